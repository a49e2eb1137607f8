//! Request types for the salon simulator API.
//!
//! This module defines the JSON request structure for the `/simulate` endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::{CategoryMix, CompensationSettings, SimulationConfig};
use crate::models::{CountRange, DateRange, Policy};
use crate::simulation::SimulationParams;

/// Request body for the `/simulate` endpoint.
///
/// Only the policy is required. Anything omitted falls back to the server's
/// loaded configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// The pay policy to evaluate.
    pub policy: Policy,
    /// Seed for the pseudo-random source.
    #[serde(default)]
    pub seed: Option<u64>,
    /// First simulated day (inclusive).
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last simulated day (inclusive).
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Transactions per day.
    #[serde(default)]
    pub daily_transactions: Option<CountRange>,
    /// Category and staff probabilities.
    #[serde(default)]
    pub mix: Option<CategoryMix>,
    /// Replacement compensation settings.
    #[serde(default)]
    pub settings: Option<CompensationSettings>,
}

impl SimulationRequest {
    /// Creates a request that uses every configured default.
    pub fn for_policy(policy: Policy) -> Self {
        Self {
            policy,
            seed: None,
            start_date: None,
            end_date: None,
            daily_transactions: None,
            mix: None,
            settings: None,
        }
    }

    /// Resolves the run parameters against the configured defaults.
    ///
    /// The result is not validated here; `run_simulation` does that.
    pub fn to_params(&self, defaults: &SimulationConfig) -> SimulationParams {
        let base = SimulationParams::from_config(defaults, self.policy);
        SimulationParams {
            seed: self.seed.unwrap_or(base.seed),
            dates: DateRange {
                start: self.start_date.unwrap_or(base.dates.start),
                end: self.end_date.unwrap_or(base.dates.end),
            },
            counts: self.daily_transactions.unwrap_or(base.counts),
            mix: self.mix.unwrap_or(base.mix),
            policy: self.policy,
        }
    }
}
