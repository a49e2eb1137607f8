//! Sales incentive staircase.
//!
//! An incentive is zero below a sales threshold. At the threshold it jumps
//! to a fixed bonus, and every further full step of sales adds a fixed
//! amount:
//!
//! ```text
//! incentive(s) = 0                                               if s < threshold
//!              = bonus + step_bonus * floor((s - threshold) / step_size)  otherwise
//! ```
//!
//! The nail tech staircase is usually quoted as
//! `1,500 + 500 * (1 + floor(...))`, which is the same line with a
//! 2,000 bonus at threshold.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::MAX_AMOUNT;
use crate::error::{SimError, SimResult};

/// A right-continuous staircase bonus on monthly sales.
///
/// # Example
///
/// ```
/// use salon_sim::compensation::IncentiveSchedule;
/// use rust_decimal::Decimal;
///
/// let stylist = IncentiveSchedule::stylist();
/// assert_eq!(stylist.incentive(Decimal::from(99_999)), Decimal::ZERO);
/// assert_eq!(stylist.incentive(Decimal::from(100_000)), Decimal::from(2_000));
/// assert_eq!(stylist.incentive(Decimal::from(105_000)), Decimal::from(2_500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncentiveSchedule {
    /// Sales at which the incentive starts.
    pub threshold: Decimal,
    /// Bonus paid for reaching the threshold.
    pub bonus_at_threshold: Decimal,
    /// Size of each further sales step.
    pub step_size: Decimal,
    /// Bonus added for each full step above the threshold.
    pub step_bonus: Decimal,
}

impl IncentiveSchedule {
    /// Senior and junior stylists: 2,000 at 100,000, plus 500 per 5,000.
    pub fn stylist() -> Self {
        Self {
            threshold: Decimal::from(100_000),
            bonus_at_threshold: Decimal::from(2_000),
            step_size: Decimal::from(5_000),
            step_bonus: Decimal::from(500),
        }
    }

    /// Nail tech: 2,000 at 45,000, plus 500 per 5,000.
    pub fn nail_tech() -> Self {
        Self {
            threshold: Decimal::from(45_000),
            bonus_at_threshold: Decimal::from(2_000),
            step_size: Decimal::from(5_000),
            step_bonus: Decimal::from(500),
        }
    }

    /// Number of full steps above the threshold, or `None` below it.
    ///
    /// A zero step size counts no steps.
    pub fn steps(&self, sales: Decimal) -> Option<Decimal> {
        if sales < self.threshold {
            return None;
        }
        let steps = (sales - self.threshold)
            .checked_div(self.step_size)
            .map(|s| s.floor())
            .unwrap_or(Decimal::ZERO);
        Some(steps)
    }

    /// The incentive earned for `sales`.
    pub fn incentive(&self, sales: Decimal) -> Decimal {
        match self.steps(sales) {
            Some(steps) => self.bonus_at_threshold + self.step_bonus * steps,
            None => Decimal::ZERO,
        }
    }

    /// Checks that every amount is within `[0, MAX_AMOUNT]` and the step
    /// size is at least one currency unit.
    pub fn validate(&self, field: &str) -> SimResult<()> {
        let invalid = |message: String| SimError::InvalidSettings {
            field: field.to_string(),
            message,
        };

        if self.step_size < Decimal::ONE {
            return Err(invalid(format!(
                "step_size {} must be at least 1",
                self.step_size
            )));
        }
        for (name, value) in [
            ("threshold", self.threshold),
            ("bonus_at_threshold", self.bonus_at_threshold),
            ("step_size", self.step_size),
            ("step_bonus", self.step_bonus),
        ] {
            if value < Decimal::ZERO {
                return Err(invalid(format!("{} {} is negative", name, value)));
            }
            if value > Decimal::from(MAX_AMOUNT) {
                return Err(invalid(format!("{} {} exceeds {}", name, value, MAX_AMOUNT)));
            }
        }
        Ok(())
    }
}
