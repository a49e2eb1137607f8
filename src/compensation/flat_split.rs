//! Flat split compensation.
//!
//! Every stylist sale is split between the stylist and the owner at fixed
//! rates. The nail tech earns no commission; the owner keeps the full price
//! of nail services and pays the nail tech a guaranteed monthly wage
//! instead.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{CompensationSettings, FlatSplitSettings};
use crate::models::{
    AuditStep, CompensationBreakdown, Metric, Policy, StaffPay, StaffRole, Transaction,
};

use super::{Aggregates, CompensationModel};

/// How one transaction's price is divided between staff and owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSplit {
    /// Paid to the staff member who performed the service.
    pub staff_share: Decimal,
    /// Kept by the owner.
    pub owner_share: Decimal,
}

/// Splits one transaction under the flat split rates.
///
/// # Example
///
/// ```
/// use salon_sim::compensation::split_transaction;
/// use salon_sim::config::CompensationSettings;
/// use salon_sim::models::StaffRole;
/// use rust_decimal::Decimal;
///
/// let settings = CompensationSettings::default();
/// let split = split_transaction(StaffRole::NailTech, Decimal::from(399), &settings.flat_split);
/// assert_eq!(split.staff_share, Decimal::ZERO);
/// assert_eq!(split.owner_share, Decimal::from(399));
/// ```
pub fn split_transaction(
    staff: StaffRole,
    price: Decimal,
    settings: &FlatSplitSettings,
) -> TransactionSplit {
    if staff.is_nail_tech() {
        TransactionSplit {
            staff_share: Decimal::ZERO,
            owner_share: price,
        }
    } else {
        TransactionSplit {
            staff_share: price * settings.staff_rate,
            owner_share: price * settings.owner_rate,
        }
    }
}

/// The flat split policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatSplitModel;

impl CompensationModel for FlatSplitModel {
    fn policy(&self) -> Policy {
        Policy::FlatSplit
    }

    fn evaluate(
        &self,
        transactions: &[Transaction],
        settings: &CompensationSettings,
    ) -> CompensationBreakdown {
        let rates = &settings.flat_split;
        let aggregates = Aggregates::from_transactions(transactions);
        let total_sales = aggregates.total_sales;

        let mut commission_by_role = [Decimal::ZERO; 3];
        let mut owner_gross_share = Decimal::ZERO;
        for tx in transactions {
            let split = split_transaction(tx.staff, tx.price, rates);
            commission_by_role[role_index(tx.staff)] += split.staff_share;
            owner_gross_share += split.owner_share;
        }
        let total_commissions: Decimal = commission_by_role.iter().copied().sum();

        let nail_tech_commission = commission_by_role[role_index(StaffRole::NailTech)];
        let nail_tech_actual_pay = rates.nail_tech_min_wage.max(nail_tech_commission);
        let adjusted_staff_salary = total_commissions - nail_tech_commission + nail_tech_actual_pay;

        let product_cost = total_sales * settings.product_cost_rate;
        let fixed_overhead = settings.overhead.total();
        let total_expenses = adjusted_staff_salary + product_cost + fixed_overhead;
        let owner_net_income = total_sales - total_expenses;

        let staff = StaffRole::ALL
            .iter()
            .map(|&role| {
                let commission = commission_by_role[role_index(role)];
                if role.is_nail_tech() {
                    StaffPay {
                        role,
                        sales: aggregates.sales_for(role),
                        base_salary: nail_tech_actual_pay,
                        incentive: Decimal::ZERO,
                        commission,
                        total_pay: nail_tech_actual_pay,
                    }
                } else {
                    StaffPay {
                        role,
                        sales: aggregates.sales_for(role),
                        base_salary: Decimal::ZERO,
                        incentive: Decimal::ZERO,
                        commission,
                        total_pay: commission,
                    }
                }
            })
            .collect();

        let metrics = vec![
            Metric::new("total_sales", "Total Sales", total_sales),
            Metric::new(
                "total_staff_commission",
                "Total Staff Salary (Commissions)",
                total_commissions,
            ),
            Metric::new("owner_gross_share", "Owner Gross Share", owner_gross_share),
            Metric::new("product_cost", "Product Cost", product_cost),
            Metric::new(
                "fixed_expenses",
                "Fixed Salon Expenses (Rent+Utilities)",
                fixed_overhead,
            ),
            Metric::new("total_expenses", "Total Expenses", total_expenses),
            Metric::new("owner_net_income", "Owner Net Income", owner_net_income),
            Metric::new(
                "nail_tech_min_wage",
                "Nail Tech Min Monthly Wage (Setting)",
                rates.nail_tech_min_wage,
            ),
            Metric::new(
                "nail_tech_commission",
                "Nail Tech Commission (0%)",
                nail_tech_commission,
            ),
            Metric::new(
                "nail_tech_actual_pay",
                "Nail Tech Actual Pay",
                nail_tech_actual_pay,
            ),
            Metric::new(
                "adjusted_total_staff_salary",
                "Adjusted Total Staff Salary",
                adjusted_staff_salary,
            ),
        ];

        let audit_steps = vec![
            AuditStep {
                step_number: 1,
                rule_id: "flat_split_commission".to_string(),
                rule_name: "Flat Split Commission".to_string(),
                input: serde_json::json!({
                    "transactions": aggregates.transaction_count,
                    "total_sales": total_sales.to_string(),
                    "staff_rate": rates.staff_rate.to_string(),
                    "owner_rate": rates.owner_rate.to_string()
                }),
                output: serde_json::json!({
                    "total_commissions": total_commissions.to_string(),
                    "owner_gross_share": owner_gross_share.to_string()
                }),
                reasoning: format!(
                    "Stylist sales split {}/{} between staff and owner; nail sales kept by owner in full",
                    rates.staff_rate.normalize(),
                    rates.owner_rate.normalize()
                ),
            },
            AuditStep {
                step_number: 2,
                rule_id: "nail_tech_wage_floor".to_string(),
                rule_name: "Nail Tech Minimum Wage".to_string(),
                input: serde_json::json!({
                    "nail_tech_commission": nail_tech_commission.to_string(),
                    "nail_tech_min_wage": rates.nail_tech_min_wage.to_string()
                }),
                output: serde_json::json!({
                    "nail_tech_actual_pay": nail_tech_actual_pay.to_string(),
                    "adjusted_total_staff_salary": adjusted_staff_salary.to_string()
                }),
                reasoning: format!(
                    "Nail tech paid the greater of commission {} and minimum wage {}",
                    nail_tech_commission.normalize(),
                    rates.nail_tech_min_wage.normalize()
                ),
            },
            AuditStep {
                step_number: 3,
                rule_id: "owner_net_income".to_string(),
                rule_name: "Owner Net Income".to_string(),
                input: serde_json::json!({
                    "total_sales": total_sales.to_string(),
                    "adjusted_total_staff_salary": adjusted_staff_salary.to_string(),
                    "product_cost": product_cost.to_string(),
                    "fixed_overhead": fixed_overhead.to_string()
                }),
                output: serde_json::json!({
                    "owner_net_income": owner_net_income.to_string()
                }),
                reasoning: format!(
                    "{} sales less {} expenses leaves {}",
                    total_sales.normalize(),
                    total_expenses.normalize(),
                    owner_net_income.normalize()
                ),
            },
        ];

        CompensationBreakdown {
            policy: Policy::FlatSplit,
            total_sales,
            product_cost,
            fixed_overhead,
            total_staff_pay: adjusted_staff_salary,
            total_expenses,
            owner_net_income,
            staff,
            metrics,
            audit_steps,
        }
    }
}

fn role_index(role: StaffRole) -> usize {
    match role {
        StaffRole::SeniorStylist => 0,
        StaffRole::JuniorStylist => 1,
        StaffRole::NailTech => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tx(staff: StaffRole, price: &str) -> Transaction {
        Transaction {
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            weekday: "Wed".to_string(),
            service: "Service".to_string(),
            category: if staff.is_nail_tech() {
                Category::Nail
            } else {
                Category::Hair
            },
            staff,
            price: dec(price),
        }
    }

    #[test]
    fn test_stylist_split_uses_rates() {
        let settings = CompensationSettings::default();
        let split = split_transaction(StaffRole::SeniorStylist, dec("1000"), &settings.flat_split);
        assert_eq!(split.staff_share, dec("400"));
        assert_eq!(split.owner_share, dec("600"));
    }

    #[test]
    fn test_nail_tech_split_gives_owner_everything() {
        let settings = CompensationSettings::default();
        let split = split_transaction(StaffRole::NailTech, dec("599"), &settings.flat_split);
        assert_eq!(split.staff_share, Decimal::ZERO);
        assert_eq!(split.owner_share, dec("599"));
    }

    #[test]
    fn test_month_breakdown() {
        let settings = CompensationSettings::default();
        let transactions = vec![
            tx(StaffRole::SeniorStylist, "1000"),
            tx(StaffRole::JuniorStylist, "500"),
            tx(StaffRole::NailTech, "300"),
        ];

        let breakdown = FlatSplitModel.evaluate(&transactions, &settings);

        // commissions: 400 + 200; nail tech paid the 7000 floor
        assert_eq!(breakdown.total_sales, dec("1800"));
        assert_eq!(breakdown.metric("total_staff_commission"), Some(dec("600")));
        assert_eq!(breakdown.metric("owner_gross_share"), Some(dec("1200")));
        assert_eq!(breakdown.metric("nail_tech_actual_pay"), Some(dec("7000")));
        assert_eq!(breakdown.total_staff_pay, dec("7600"));
        assert_eq!(breakdown.product_cost, dec("360"));
        assert_eq!(breakdown.fixed_overhead, dec("20500"));
        assert_eq!(breakdown.total_expenses, dec("28460"));
        assert_eq!(breakdown.owner_net_income, dec("-26660"));
    }

    #[test]
    fn test_zero_min_wage_floor() {
        let mut settings = CompensationSettings::default();
        settings.flat_split.nail_tech_min_wage = Decimal::ZERO;

        let breakdown =
            FlatSplitModel.evaluate(&[tx(StaffRole::NailTech, "399")], &settings);

        assert_eq!(breakdown.metric("nail_tech_actual_pay"), Some(Decimal::ZERO));
        assert_eq!(breakdown.total_staff_pay, Decimal::ZERO);
    }

    #[test]
    fn test_staff_pay_lines() {
        let settings = CompensationSettings::default();
        let breakdown = FlatSplitModel.evaluate(
            &[
                tx(StaffRole::SeniorStylist, "149"),
                tx(StaffRole::NailTech, "119"),
            ],
            &settings,
        );

        let senior = breakdown.staff_pay(StaffRole::SeniorStylist).unwrap();
        assert_eq!(senior.commission, dec("59.60"));
        assert_eq!(senior.total_pay, dec("59.60"));

        let nail = breakdown.staff_pay(StaffRole::NailTech).unwrap();
        assert_eq!(nail.sales, dec("119"));
        assert_eq!(nail.commission, Decimal::ZERO);
        assert_eq!(nail.total_pay, dec("7000"));

        let summed: Decimal = breakdown.staff.iter().map(|s| s.total_pay).sum();
        assert_eq!(summed, breakdown.total_staff_pay);
    }

    #[test]
    fn test_no_transactions_still_pays_floor_and_overhead() {
        let settings = CompensationSettings::default();
        let breakdown = FlatSplitModel.evaluate(&[], &settings);
        assert_eq!(breakdown.total_sales, Decimal::ZERO);
        assert_eq!(breakdown.owner_net_income, dec("-27500"));
    }

    #[test]
    fn test_audit_trail_records_wage_floor() {
        let settings = CompensationSettings::default();
        let breakdown = FlatSplitModel.evaluate(&[tx(StaffRole::NailTech, "119")], &settings);

        let step = breakdown
            .audit_steps
            .iter()
            .find(|s| s.rule_id == "nail_tech_wage_floor")
            .unwrap();
        assert_eq!(step.output["nail_tech_actual_pay"], "7000");
        assert_eq!(
            step.reasoning,
            "Nail tech paid the greater of commission 0 and minimum wage 7000"
        );
    }

    proptest! {
        #[test]
        fn prop_nail_tech_never_earns_commission(price in 1u32..10_000) {
            let settings = CompensationSettings::default();
            let split = split_transaction(StaffRole::NailTech, Decimal::from(price), &settings.flat_split);
            prop_assert_eq!(split.staff_share, Decimal::ZERO);
            prop_assert_eq!(split.owner_share, Decimal::from(price));
        }

        #[test]
        fn prop_net_income_identity(prices in proptest::collection::vec((0usize..3, 1u32..3_500), 0..60)) {
            let settings = CompensationSettings::default();
            let transactions: Vec<Transaction> = prices
                .iter()
                .map(|(role, price)| tx(StaffRole::ALL[*role], &price.to_string()))
                .collect();

            let breakdown = FlatSplitModel.evaluate(&transactions, &settings);
            let sum: Decimal = transactions.iter().map(|t| t.price).sum();

            prop_assert_eq!(breakdown.total_sales, sum);
            prop_assert_eq!(
                breakdown.owner_net_income,
                breakdown.total_sales
                    - breakdown.total_staff_pay
                    - breakdown.product_cost
                    - breakdown.fixed_overhead
            );
        }
    }
}
