//! Compensation and profitability models.
//!
//! Both pay policies are pure functions of the transaction sequence and the
//! compensation settings. They implement [`CompensationModel`] and are
//! selected at runtime through [`Policy`]:
//!
//! - [`FlatSplitModel`]: percentage split with a nail tech wage floor
//! - [`TieredIncentiveModel`]: base salary + incentive staircase + commission
//!
//! # Example
//!
//! ```
//! use salon_sim::config::CompensationSettings;
//! use salon_sim::models::Policy;
//! use rust_decimal::Decimal;
//!
//! let settings = CompensationSettings::default();
//! let breakdown = Policy::TieredIncentive.evaluate(&[], &settings);
//! assert_eq!(breakdown.total_sales, Decimal::ZERO);
//! ```

mod aggregates;
mod flat_split;
mod incentive;
mod tiered;

pub use aggregates::Aggregates;
pub use flat_split::{FlatSplitModel, TransactionSplit, split_transaction};
pub use incentive::IncentiveSchedule;
pub use tiered::TieredIncentiveModel;

use crate::config::CompensationSettings;
use crate::models::{CompensationBreakdown, Policy, Transaction};

/// A compensation policy.
pub trait CompensationModel {
    /// The policy this model implements.
    fn policy(&self) -> Policy;

    /// Computes staff pay and owner profitability for a set of transactions.
    fn evaluate(
        &self,
        transactions: &[Transaction],
        settings: &CompensationSettings,
    ) -> CompensationBreakdown;
}

impl Policy {
    /// Returns the model implementing this policy.
    pub fn model(self) -> &'static dyn CompensationModel {
        match self {
            Policy::FlatSplit => &FlatSplitModel,
            Policy::TieredIncentive => &TieredIncentiveModel,
        }
    }

    /// Evaluates this policy.
    pub fn evaluate(
        self,
        transactions: &[Transaction],
        settings: &CompensationSettings,
    ) -> CompensationBreakdown {
        self.model().evaluate(transactions, settings)
    }
}
