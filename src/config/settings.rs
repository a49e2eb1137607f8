//! Compensation settings (`settings.yaml`).
//!
//! Settings are supplied, never derived: they hold the rates, salaries,
//! incentive schedules and overhead figures both pay policies read.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::compensation::IncentiveSchedule;
use crate::error::{SimError, SimResult};
use crate::models::StaffRole;

/// Largest amount, in whole currency units, any setting may hold.
///
/// Bounding every input keeps sums and products of a month's pay and
/// expenses inside `Decimal` range.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// Fixed monthly salon expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overhead {
    /// Monthly rent.
    pub rent: Decimal,
    /// Monthly electricity bill.
    pub electricity: Decimal,
    /// Monthly water bill.
    pub water: Decimal,
}

impl Overhead {
    /// Rent plus utilities.
    pub fn total(&self) -> Decimal {
        self.rent + self.electricity + self.water
    }
}

/// Settings for the flat split policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatSplitSettings {
    /// Share of each stylist sale paid to the stylist.
    pub staff_rate: Decimal,
    /// Share of each stylist sale kept by the owner.
    pub owner_rate: Decimal,
    /// Guaranteed monthly pay for the nail tech.
    pub nail_tech_min_wage: Decimal,
}

/// Base monthly salaries per role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseSalaries {
    /// Senior stylist base salary.
    pub senior_stylist: Decimal,
    /// Junior stylist base salary.
    pub junior_stylist: Decimal,
    /// Nail tech base salary.
    pub nail_tech: Decimal,
}

impl BaseSalaries {
    /// Returns the base salary for a role.
    pub fn for_role(&self, role: StaffRole) -> Decimal {
        match role {
            StaffRole::SeniorStylist => self.senior_stylist,
            StaffRole::JuniorStylist => self.junior_stylist,
            StaffRole::NailTech => self.nail_tech,
        }
    }
}

/// Settings for the tiered incentive policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieredIncentiveSettings {
    /// Commission on every sale, paid to whoever performed it.
    pub commission_rate: Decimal,
    /// Base monthly salaries.
    pub base_salaries: BaseSalaries,
    /// Incentive staircase shared by senior and junior stylists.
    pub stylist_incentive: IncentiveSchedule,
    /// Incentive staircase for the nail tech.
    pub nail_tech_incentive: IncentiveSchedule,
}

impl TieredIncentiveSettings {
    /// Returns the incentive schedule that applies to a role.
    pub fn incentive_for(&self, role: StaffRole) -> &IncentiveSchedule {
        match role {
            StaffRole::SeniorStylist | StaffRole::JuniorStylist => &self.stylist_incentive,
            StaffRole::NailTech => &self.nail_tech_incentive,
        }
    }
}

/// All compensation parameters for one run.
///
/// # Example
///
/// ```
/// use salon_sim::config::CompensationSettings;
/// use rust_decimal::Decimal;
///
/// let settings = CompensationSettings::default();
/// assert_eq!(settings.overhead.total(), Decimal::new(20500, 0));
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationSettings {
    /// Product cost as a fraction of total sales.
    pub product_cost_rate: Decimal,
    /// Rent and utilities.
    pub overhead: Overhead,
    /// Flat split policy parameters.
    pub flat_split: FlatSplitSettings,
    /// Tiered incentive policy parameters.
    pub tiered_incentive: TieredIncentiveSettings,
}

impl Default for CompensationSettings {
    fn default() -> Self {
        Self {
            product_cost_rate: Decimal::new(20, 2),
            overhead: Overhead {
                rent: Decimal::from(15_000),
                electricity: Decimal::from(5_000),
                water: Decimal::from(500),
            },
            flat_split: FlatSplitSettings {
                staff_rate: Decimal::new(40, 2),
                owner_rate: Decimal::new(60, 2),
                nail_tech_min_wage: Decimal::from(7_000),
            },
            tiered_incentive: TieredIncentiveSettings {
                commission_rate: Decimal::new(10, 2),
                base_salaries: BaseSalaries {
                    senior_stylist: Decimal::from(12_000),
                    junior_stylist: Decimal::from(9_000),
                    nail_tech: Decimal::from(8_000),
                },
                stylist_incentive: IncentiveSchedule::stylist(),
                nail_tech_incentive: IncentiveSchedule::nail_tech(),
            },
        }
    }
}

impl CompensationSettings {
    /// Checks rates are fractions and amounts are within `[0, MAX_AMOUNT]`.
    pub fn validate(&self) -> SimResult<()> {
        check_rate("product_cost_rate", self.product_cost_rate)?;
        check_rate("flat_split.staff_rate", self.flat_split.staff_rate)?;
        check_rate("flat_split.owner_rate", self.flat_split.owner_rate)?;
        check_rate(
            "tiered_incentive.commission_rate",
            self.tiered_incentive.commission_rate,
        )?;

        check_amount("overhead.rent", self.overhead.rent)?;
        check_amount("overhead.electricity", self.overhead.electricity)?;
        check_amount("overhead.water", self.overhead.water)?;
        check_amount(
            "flat_split.nail_tech_min_wage",
            self.flat_split.nail_tech_min_wage,
        )?;

        let base = &self.tiered_incentive.base_salaries;
        check_amount("base_salaries.senior_stylist", base.senior_stylist)?;
        check_amount("base_salaries.junior_stylist", base.junior_stylist)?;
        check_amount("base_salaries.nail_tech", base.nail_tech)?;

        self.tiered_incentive
            .stylist_incentive
            .validate("stylist_incentive")?;
        self.tiered_incentive
            .nail_tech_incentive
            .validate("nail_tech_incentive")?;
        Ok(())
    }
}

fn check_rate(field: &str, rate: Decimal) -> SimResult<()> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(SimError::InvalidSettings {
            field: field.to_string(),
            message: format!("rate {} is outside [0, 1]", rate),
        });
    }
    Ok(())
}

fn check_amount(field: &str, amount: Decimal) -> SimResult<()> {
    if amount < Decimal::ZERO {
        return Err(SimError::InvalidSettings {
            field: field.to_string(),
            message: format!("amount {} is negative", amount),
        });
    }
    if amount > Decimal::from(MAX_AMOUNT) {
        return Err(SimError::InvalidSettings {
            field: field.to_string(),
            message: format!("amount {} exceeds {}", amount, MAX_AMOUNT),
        });
    }
    Ok(())
}
