//! End-to-end simulation runs.
//!
//! A run validates its inputs, generates a month of transactions with a
//! fresh seeded generator and evaluates the chosen pay policy. Nothing is
//! shared between runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::config::{CategoryMix, CompensationSettings, SimulationConfig};
use crate::error::SimResult;
use crate::generation::TransactionGenerator;
use crate::models::{
    CompensationBreakdown, CountRange, DateRange, Policy, ServiceDefinition, Transaction,
};

/// Everything that parameterizes one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Seed for the pseudo-random source.
    pub seed: u64,
    /// Simulated days.
    pub dates: DateRange,
    /// Transactions per day.
    pub counts: CountRange,
    /// Category and staff probabilities.
    pub mix: CategoryMix,
    /// Pay policy to evaluate.
    pub policy: Policy,
}

impl SimulationParams {
    /// Builds parameters from a loaded simulation config, picking the
    /// policy's own daily count range.
    pub fn from_config(config: &SimulationConfig, policy: Policy) -> Self {
        Self {
            seed: config.seed,
            dates: config.date_range(),
            counts: config.daily_transactions.for_policy(policy),
            mix: config.mix,
            policy,
        }
    }
}

/// The in-memory result of a run, ready for any renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// The version of the crate that produced it.
    pub engine_version: String,
    /// The parameters of the run.
    pub params: SimulationParams,
    /// The price list the run sampled from.
    pub price_list: Vec<ServiceDefinition>,
    /// The settings the policy was evaluated with.
    pub settings: CompensationSettings,
    /// Generated transactions, sorted by date.
    pub transactions: Vec<Transaction>,
    /// Pay and profitability breakdown.
    pub breakdown: CompensationBreakdown,
}

/// Runs one simulation.
///
/// All configuration is validated before the first draw.
///
/// # Example
///
/// ```
/// use salon_sim::catalog::Catalog;
/// use salon_sim::config::{CompensationSettings, SimulationConfig};
/// use salon_sim::models::Policy;
/// use salon_sim::simulation::{run_simulation, SimulationParams};
///
/// let params = SimulationParams::from_config(&SimulationConfig::default(), Policy::FlatSplit);
/// let report = run_simulation(
///     &Catalog::salon_default(),
///     &CompensationSettings::default(),
///     params,
/// ).unwrap();
/// let total: rust_decimal::Decimal = report.transactions.iter().map(|t| t.price).sum();
/// assert_eq!(report.breakdown.total_sales, total);
/// ```
pub fn run_simulation(
    catalog: &Catalog,
    settings: &CompensationSettings,
    params: SimulationParams,
) -> SimResult<SimulationReport> {
    params.dates.validate()?;
    params.counts.validate()?;
    settings.validate()?;

    let mut generator = TransactionGenerator::new(catalog, params.mix, params.seed)?;
    let transactions = generator.run(params.dates, params.counts)?;
    let breakdown = params.policy.evaluate(&transactions, settings);

    info!(
        policy = params.policy.name(),
        seed = params.seed,
        transactions = transactions.len(),
        total_sales = %breakdown.total_sales,
        owner_net_income = %breakdown.owner_net_income,
        "Simulation completed"
    );

    Ok(SimulationReport {
        report_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        params,
        price_list: catalog.price_list().cloned().collect(),
        settings: settings.clone(),
        transactions,
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;
    use rust_decimal::Decimal;

    fn params(policy: Policy) -> SimulationParams {
        SimulationParams::from_config(&SimulationConfig::default(), policy)
    }

    #[test]
    fn test_from_config_uses_policy_count_range() {
        assert_eq!(params(Policy::FlatSplit).counts, CountRange { min: 5, max: 15 });
        assert_eq!(
            params(Policy::TieredIncentive).counts,
            CountRange { min: 7, max: 15 }
        );
    }

    #[test]
    fn test_runs_are_reproducible() {
        let catalog = Catalog::salon_default();
        let settings = CompensationSettings::default();

        let first = run_simulation(&catalog, &settings, params(Policy::TieredIncentive)).unwrap();
        let second = run_simulation(&catalog, &settings, params(Policy::TieredIncentive)).unwrap();

        assert_eq!(first.transactions, second.transactions);
        assert_eq!(first.breakdown, second.breakdown);
        assert_ne!(first.report_id, second.report_id);
    }

    #[test]
    fn test_report_carries_price_list() {
        let report = run_simulation(
            &Catalog::salon_default(),
            &CompensationSettings::default(),
            params(Policy::FlatSplit),
        )
        .unwrap();
        assert_eq!(report.price_list.len(), 31);
        assert_eq!(report.breakdown.policy, Policy::FlatSplit);
    }

    #[test]
    fn test_invalid_settings_fail_before_generation() {
        let mut settings = CompensationSettings::default();
        settings.product_cost_rate = Decimal::from(2);

        let result = run_simulation(&Catalog::salon_default(), &settings, params(Policy::FlatSplit));
        assert!(matches!(result, Err(SimError::InvalidSettings { .. })));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = run_simulation(
            &Catalog::salon_default(),
            &CompensationSettings::default(),
            params(Policy::FlatSplit),
        )
        .unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["params"]["policy"], "flat_split");
        assert_eq!(json["params"]["seed"], 42);
        assert!(json["transactions"].as_array().unwrap().len() >= 150);
    }
}
