//! Base salary + tiered incentive + commission compensation.

use rust_decimal::Decimal;

use crate::config::CompensationSettings;
use crate::models::{
    AuditStep, CompensationBreakdown, Metric, Policy, StaffPay, StaffRole, Transaction,
};

use super::{Aggregates, CompensationModel};

/// The tiered incentive policy.
///
/// Each role earns its base salary, an incentive from the role's sales
/// staircase, and a flat commission on every sale it performed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TieredIncentiveModel;

impl CompensationModel for TieredIncentiveModel {
    fn policy(&self) -> Policy {
        Policy::TieredIncentive
    }

    fn evaluate(
        &self,
        transactions: &[Transaction],
        settings: &CompensationSettings,
    ) -> CompensationBreakdown {
        let tiered = &settings.tiered_incentive;
        let aggregates = Aggregates::from_transactions(transactions);
        let total_sales = aggregates.total_sales;

        let mut audit_steps = Vec::new();
        let mut step_number = 1;

        let staff: Vec<StaffPay> = StaffRole::ALL
            .iter()
            .map(|&role| {
                let sales = aggregates.sales_for(role);
                let commission: Decimal = transactions
                    .iter()
                    .filter(|tx| tx.staff == role)
                    .map(|tx| tx.price * tiered.commission_rate)
                    .sum();
                let schedule = tiered.incentive_for(role);
                let incentive = schedule.incentive(sales);
                let base_salary = tiered.base_salaries.for_role(role);

                let reasoning = match schedule.steps(sales) {
                    Some(steps) => format!(
                        "{} sales {} reached {} threshold: {} + {} step(s) x {} = {}",
                        role.label(),
                        sales.normalize(),
                        schedule.threshold.normalize(),
                        schedule.bonus_at_threshold.normalize(),
                        steps.normalize(),
                        schedule.step_bonus.normalize(),
                        incentive.normalize()
                    ),
                    None => format!(
                        "{} sales {} below {} threshold - no incentive",
                        role.label(),
                        sales.normalize(),
                        schedule.threshold.normalize()
                    ),
                };

                audit_steps.push(AuditStep {
                    step_number,
                    rule_id: format!("{}_incentive", role.key()),
                    rule_name: format!("{} Incentive", role.short_label()),
                    input: serde_json::json!({
                        "sales": sales.to_string(),
                        "threshold": schedule.threshold.to_string(),
                        "step_size": schedule.step_size.to_string()
                    }),
                    output: serde_json::json!({
                        "incentive": incentive.to_string(),
                        "commission": commission.to_string(),
                        "base_salary": base_salary.to_string()
                    }),
                    reasoning,
                });
                step_number += 1;

                StaffPay {
                    role,
                    sales,
                    base_salary,
                    incentive,
                    commission,
                    total_pay: base_salary + incentive + commission,
                }
            })
            .collect();

        let total_staff_pay: Decimal = staff.iter().map(|s| s.total_pay).sum();
        let product_cost = total_sales * settings.product_cost_rate;
        let fixed_overhead = settings.overhead.total();
        let total_expenses = product_cost + fixed_overhead + total_staff_pay;
        let owner_net_income = total_sales - total_expenses;

        audit_steps.push(AuditStep {
            step_number,
            rule_id: "owner_net_income".to_string(),
            rule_name: "Owner Net Income".to_string(),
            input: serde_json::json!({
                "total_sales": total_sales.to_string(),
                "total_staff_pay": total_staff_pay.to_string(),
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
        });

        let mut metrics = vec![
            Metric::new("total_sales", "Total Sales", total_sales),
            Metric::new("product_cost", "Product Cost", product_cost),
            Metric::new(
                "fixed_expenses",
                "Fixed Salon Expenses (Rent+Utilities)",
                fixed_overhead,
            ),
        ];
        let columns: [(&str, &str, fn(&StaffPay) -> Decimal); 4] = [
            ("sales", "Sales", |pay| pay.sales),
            ("base_salary", "Base Salary", |pay| pay.base_salary),
            ("incentive", "Incentive", |pay| pay.incentive),
            ("commission", "Commission", |pay| pay.commission),
        ];
        for (suffix, label, value) in columns {
            for pay in &staff {
                metrics.push(Metric::new(
                    format!("{}_{}", pay.role.key(), suffix),
                    format!("{} {}", pay.role.short_label(), label),
                    value(pay),
                ));
            }
        }
        metrics.extend([
            Metric::new(
                "total_staff_pay",
                "Total Staff Pay (Base + Incentives + Commission)",
                total_staff_pay,
            ),
            Metric::new("total_expenses", "Total Expenses", total_expenses),
            Metric::new("owner_net_income", "Owner Net Income", owner_net_income),
        ]);

        CompensationBreakdown {
            policy: Policy::TieredIncentive,
            total_sales,
            product_cost,
            fixed_overhead,
            total_staff_pay,
            total_expenses,
            owner_net_income,
            staff,
            metrics,
            audit_steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use chrono::NaiveDate;
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
    fn test_senior_exactly_at_threshold() {
        let settings = CompensationSettings::default();
        let breakdown =
            TieredIncentiveModel.evaluate(&[tx(StaffRole::SeniorStylist, "100000")], &settings);

        let senior = breakdown.staff_pay(StaffRole::SeniorStylist).unwrap();
        assert_eq!(senior.incentive, dec("2000"));
        assert_eq!(senior.commission, dec("10000"));
        assert_eq!(senior.total_pay, dec("24000"));
    }

    #[test]
    fn test_senior_boundary_steps() {
        let settings = CompensationSettings::default();

        let just_below = TieredIncentiveModel
            .evaluate(&[tx(StaffRole::SeniorStylist, "104999")], &settings);
        assert_eq!(just_below.metric("senior_incentive"), Some(dec("2000")));

        let next_step = TieredIncentiveModel
            .evaluate(&[tx(StaffRole::SeniorStylist, "105000")], &settings);
        assert_eq!(next_step.metric("senior_incentive"), Some(dec("2500")));
    }

    #[test]
    fn test_nail_tech_at_threshold() {
        let settings = CompensationSettings::default();
        let breakdown = TieredIncentiveModel.evaluate(
            &[
                tx(StaffRole::NailTech, "40000"),
                tx(StaffRole::NailTech, "5000"),
            ],
            &settings,
        );

        assert_eq!(breakdown.metric("nail_tech_sales"), Some(dec("45000")));
        assert_eq!(breakdown.metric("nail_tech_incentive"), Some(dec("2000")));
        assert_eq!(breakdown.metric("nail_tech_commission"), Some(dec("4500")));
    }

    #[test]
    fn test_month_breakdown() {
        let settings = CompensationSettings::default();
        let transactions = vec![
            tx(StaffRole::SeniorStylist, "1000"),
            tx(StaffRole::JuniorStylist, "500"),
            tx(StaffRole::NailTech, "300"),
        ];

        let breakdown = TieredIncentiveModel.evaluate(&transactions, &settings);

        // base 12000 + 9000 + 8000, commission 100 + 50 + 30, no incentives
        assert_eq!(breakdown.total_staff_pay, dec("29180"));
        assert_eq!(breakdown.product_cost, dec("360"));
        assert_eq!(breakdown.total_expenses, dec("50040"));
        assert_eq!(breakdown.owner_net_income, dec("-48240"));
    }

    #[test]
    fn test_per_role_metrics_match_staff_pay() {
        let settings = CompensationSettings::default();
        let transactions = vec![
            tx(StaffRole::SeniorStylist, "105000"),
            tx(StaffRole::JuniorStylist, "500"),
            tx(StaffRole::NailTech, "50000"),
        ];

        let breakdown = TieredIncentiveModel.evaluate(&transactions, &settings);

        for pay in &breakdown.staff {
            let key = pay.role.key();
            assert_eq!(breakdown.metric(&format!("{}_sales", key)), Some(pay.sales));
            assert_eq!(
                breakdown.metric(&format!("{}_base_salary", key)),
                Some(pay.base_salary)
            );
            assert_eq!(
                breakdown.metric(&format!("{}_incentive", key)),
                Some(pay.incentive)
            );
            assert_eq!(
                breakdown.metric(&format!("{}_commission", key)),
                Some(pay.commission)
            );
        }
        assert_eq!(breakdown.metric("senior_incentive"), Some(dec("2500")));
        assert_eq!(breakdown.metric("nail_tech_commission"), Some(dec("5000")));
    }

    #[test]
    fn test_metric_keys_in_summary_order() {
        let settings = CompensationSettings::default();
        let breakdown = TieredIncentiveModel.evaluate(&[], &settings);
        let keys: Vec<&str> = breakdown.metrics.iter().map(|m| m.key.as_str()).collect();

        assert_eq!(
            keys,
            vec![
                "total_sales",
                "product_cost",
                "fixed_expenses",
                "senior_sales",
                "junior_sales",
                "nail_tech_sales",
                "senior_base_salary",
                "junior_base_salary",
                "nail_tech_base_salary",
                "senior_incentive",
                "junior_incentive",
                "nail_tech_incentive",
                "senior_commission",
                "junior_commission",
                "nail_tech_commission",
                "total_staff_pay",
                "total_expenses",
                "owner_net_income",
            ]
        );
    }

    #[test]
    fn test_audit_step_per_role_plus_net_income() {
        let settings = CompensationSettings::default();
        let breakdown =
            TieredIncentiveModel.evaluate(&[tx(StaffRole::JuniorStylist, "120000")], &settings);

        assert_eq!(breakdown.audit_steps.len(), 4);
        let junior = &breakdown.audit_steps[1];
        assert_eq!(junior.rule_id, "junior_incentive");
        assert_eq!(junior.step_number, 2);
        assert_eq!(junior.output["incentive"], "4000");
        assert_eq!(
            junior.reasoning,
            "Junior Stylist sales 120000 reached 100000 threshold: 2000 + 4 step(s) x 500 = 4000"
        );
        assert_eq!(breakdown.audit_steps[3].rule_id, "owner_net_income");
    }
}
