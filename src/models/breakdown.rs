//! Compensation breakdown models.
//!
//! This module contains the [`CompensationBreakdown`] type and its associated
//! structures that capture every output of a compensation policy: headline
//! totals, per-staff pay, the ordered summary metrics and an audit trail.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::StaffRole;

/// The compensation policy used to pay staff.
///
/// # Example
///
/// ```
/// use salon_sim::models::Policy;
///
/// let policy: Policy = serde_json::from_str("\"tiered_incentive\"").unwrap();
/// assert_eq!(policy, Policy::TieredIncentive);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Percentage split of every sale, with a fixed minimum wage for the nail tech.
    FlatSplit,
    /// Base salary plus a sales incentive staircase plus a flat commission.
    TieredIncentive,
}

impl Policy {
    /// Returns the short name used on the command line and in file names.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::FlatSplit => "flat_split",
            Policy::TieredIncentive => "tiered_incentive",
        }
    }
}

/// A named value in the summary.
///
/// The key is stable and machine-readable; the label is what a report
/// prints in its Metric column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    /// Stable identifier (e.g. `owner_net_income`).
    pub key: String,
    /// Report label (e.g. "Owner Net Income").
    pub label: String,
    /// The computed amount.
    pub value: Decimal,
}

impl Metric {
    /// Creates a new metric.
    pub fn new(key: impl Into<String>, label: impl Into<String>, value: Decimal) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            value,
        }
    }
}

/// Pay for one staff role over the simulated period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffPay {
    /// The staff role.
    pub role: StaffRole,
    /// Total sales handled by this role.
    pub sales: Decimal,
    /// Fixed salary component (minimum wage for the flat split nail tech).
    pub base_salary: Decimal,
    /// Sales incentive bonus.
    pub incentive: Decimal,
    /// Commission earned on the role's own sales.
    pub commission: Decimal,
    /// Total pay: base + incentive + commission.
    pub total_pay: Decimal,
}

/// A single step in the audit trail recording a compensation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete result of evaluating a compensation policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationBreakdown {
    /// The policy that produced this breakdown.
    pub policy: Policy,
    /// Sum of all transaction prices.
    pub total_sales: Decimal,
    /// Product cost as a share of sales.
    pub product_cost: Decimal,
    /// Rent plus utilities.
    pub fixed_overhead: Decimal,
    /// Everything paid to staff.
    pub total_staff_pay: Decimal,
    /// Staff pay plus product cost plus fixed overhead.
    pub total_expenses: Decimal,
    /// What is left for the owner.
    pub owner_net_income: Decimal,
    /// Per-role pay, in [`StaffRole::ALL`] order.
    pub staff: Vec<StaffPay>,
    /// Ordered summary metrics; the key set depends on the policy.
    pub metrics: Vec<Metric>,
    /// Audit trail of the rules applied.
    pub audit_steps: Vec<AuditStep>,
}

impl CompensationBreakdown {
    /// Looks up a summary metric by key.
    pub fn metric(&self, key: &str) -> Option<Decimal> {
        self.metrics.iter().find(|m| m.key == key).map(|m| m.value)
    }

    /// Returns the pay line for a role.
    pub fn staff_pay(&self, role: StaffRole) -> Option<&StaffPay> {
        self.staff.iter().find(|s| s.role == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_breakdown() -> CompensationBreakdown {
        CompensationBreakdown {
            policy: Policy::FlatSplit,
            total_sales: dec("1000"),
            product_cost: dec("200"),
            fixed_overhead: dec("20500"),
            total_staff_pay: dec("7400"),
            total_expenses: dec("28100"),
            owner_net_income: dec("-27100"),
            staff: vec![StaffPay {
                role: StaffRole::SeniorStylist,
                sales: dec("1000"),
                base_salary: Decimal::ZERO,
                incentive: Decimal::ZERO,
                commission: dec("400"),
                total_pay: dec("400"),
            }],
            metrics: vec![Metric::new("total_sales", "Total Sales", dec("1000"))],
            audit_steps: vec![],
        }
    }

    #[test]
    fn test_policy_serialization() {
        assert_eq!(
            serde_json::to_string(&Policy::FlatSplit).unwrap(),
            "\"flat_split\""
        );
        assert_eq!(Policy::TieredIncentive.name(), "tiered_incentive");
    }

    #[test]
    fn test_metric_lookup() {
        let breakdown = sample_breakdown();
        assert_eq!(breakdown.metric("total_sales"), Some(dec("1000")));
        assert_eq!(breakdown.metric("unknown"), None);
    }

    #[test]
    fn test_staff_pay_lookup() {
        let breakdown = sample_breakdown();
        assert_eq!(
            breakdown.staff_pay(StaffRole::SeniorStylist).map(|s| s.commission),
            Some(dec("400"))
        );
        assert!(breakdown.staff_pay(StaffRole::NailTech).is_none());
    }

    #[test]
    fn test_breakdown_serializes_decimals_as_strings() {
        let json = serde_json::to_string(&sample_breakdown()).unwrap();
        assert!(json.contains("\"policy\":\"flat_split\""));
        assert!(json.contains("\"owner_net_income\":\"-27100\""));
        assert!(json.contains("\"role\":\"senior_stylist\""));
    }
}
