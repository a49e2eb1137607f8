//! Transaction and date range models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

use super::{Category, StaffRole};

/// One simulated service sale.
///
/// # Example
///
/// ```
/// use salon_sim::models::{Category, StaffRole, Transaction};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let tx = Transaction {
///     date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     weekday: "Wed".to_string(),
///     service: "Haircut".to_string(),
///     category: Category::Hair,
///     staff: StaffRole::SeniorStylist,
///     price: Decimal::new(149, 0),
/// };
/// assert_eq!(tx.weekday, "Wed");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// The day the service was sold.
    pub date: NaiveDate,
    /// Abbreviated weekday label ("Mon", "Tue", ...).
    pub weekday: String,
    /// The menu name of the service.
    pub service: String,
    /// The service category.
    pub category: Category,
    /// The staff role who performed the service.
    pub staff: StaffRole,
    /// The price charged.
    pub price: Decimal,
}

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First simulated day (inclusive).
    pub start: NaiveDate,
    /// Last simulated day (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a date range, rejecting ranges whose start is after their end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> SimResult<Self> {
        let range = Self { start, end };
        range.validate()?;
        Ok(range)
    }

    /// Checks that the range is not inverted.
    pub fn validate(&self) -> SimResult<()> {
        if self.start > self.end {
            return Err(SimError::InvalidDateRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// Returns every day in the range, in order.
    ///
    /// ```
    /// use salon_sim::models::DateRange;
    /// use chrono::NaiveDate;
    ///
    /// let range = DateRange::new(
    ///     NaiveDate::from_ymd_opt(2025, 1, 30).unwrap(),
    ///     NaiveDate::from_ymd_opt(2025, 2, 2).unwrap(),
    /// ).unwrap();
    /// assert_eq!(range.days().count(), 4);
    /// ```
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(move |d| *d <= self.end)
    }

    /// The number of calendar days in the range.
    pub fn len_days(&self) -> u32 {
        ((self.end - self.start).num_days() + 1).max(0) as u32
    }
}

/// An inclusive range for the number of transactions drawn per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    /// Fewest transactions on any day.
    pub min: u32,
    /// Most transactions on any day.
    pub max: u32,
}

impl CountRange {
    /// Creates a count range, rejecting `min > max`.
    pub fn new(min: u32, max: u32) -> SimResult<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Checks that the range is not inverted.
    pub fn validate(&self) -> SimResult<()> {
        if self.min > self.max {
            return Err(SimError::InvalidCountRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Returns true if `count` lies inside the range.
    pub fn contains(&self, count: u32) -> bool {
        (self.min..=self.max).contains(&count)
    }
}
