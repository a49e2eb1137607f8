//! Configuration types for catalog and simulation files.
//!
//! This module contains the strongly-typed structures that are
//! deserialized from `catalog.yaml` and `simulation.yaml`.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};
use crate::models::{Category, CountRange, DateRange, Policy, ServiceDefinition};

/// One entry of the price list as written in `catalog.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    /// The menu name of the service.
    pub name: String,
    /// The fixed price.
    pub price: Decimal,
}

/// Catalog configuration file structure.
///
/// ```yaml
/// services:
///   hair:
///     - name: Haircut
///       price: "149"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Services keyed by category, in menu order.
    pub services: BTreeMap<Category, Vec<CatalogEntry>>,
}

impl CatalogConfig {
    /// Flattens the file into service definitions, hair first.
    pub fn into_services(self) -> Vec<ServiceDefinition> {
        self.services
            .into_iter()
            .flat_map(|(category, entries)| {
                entries
                    .into_iter()
                    .map(move |e| ServiceDefinition::new(e.name, category, e.price))
            })
            .collect()
    }
}

/// Probabilities that drive category and staff draws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryMix {
    /// Probability that a slot is a hair service.
    pub hair: f64,
    /// Probability that a slot is a nail service.
    pub nail: f64,
    /// Probability that a hair service goes to the senior stylist.
    pub senior_stylist: f64,
}

impl Default for CategoryMix {
    fn default() -> Self {
        Self {
            hair: 0.7,
            nail: 0.3,
            senior_stylist: 0.6,
        }
    }
}

impl CategoryMix {
    /// Checks that every probability is in `[0, 1]` and the category mix sums to 1.
    pub fn validate(&self) -> SimResult<()> {
        for (name, p) in [
            ("hair", self.hair),
            ("nail", self.nail),
            ("senior_stylist", self.senior_stylist),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(SimError::InvalidProbability {
                    name: name.to_string(),
                    message: format!("{} is outside [0, 1]", p),
                });
            }
        }

        let total = self.hair + self.nail;
        if (total - 1.0).abs() > 1e-9 {
            return Err(SimError::InvalidProbability {
                name: "category_mix".to_string(),
                message: format!("hair + nail must sum to 1.0, got {}", total),
            });
        }
        Ok(())
    }
}

/// Most transactions a simulation may draw for one day.
pub const MAX_DAILY_TRANSACTIONS: u32 = 1_000;

/// Per-policy daily transaction count ranges.
///
/// The two pay schemes were modelled with different daily volumes; each
/// keeps its own range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCounts {
    /// Range used with the flat split policy.
    pub flat_split: CountRange,
    /// Range used with the tiered incentive policy.
    pub tiered_incentive: CountRange,
}

impl Default for DailyCounts {
    fn default() -> Self {
        Self {
            flat_split: CountRange { min: 5, max: 15 },
            tiered_incentive: CountRange { min: 7, max: 15 },
        }
    }
}

impl DailyCounts {
    /// Returns the configured range for a policy.
    pub fn for_policy(&self, policy: Policy) -> CountRange {
        match policy {
            Policy::FlatSplit => self.flat_split,
            Policy::TieredIncentive => self.tiered_incentive,
        }
    }
}

/// Simulation configuration file structure (`simulation.yaml`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Seed for the pseudo-random source.
    pub seed: u64,
    /// First simulated day.
    pub start_date: NaiveDate,
    /// Last simulated day (inclusive).
    pub end_date: NaiveDate,
    /// Category and staff probabilities.
    #[serde(default)]
    pub mix: CategoryMix,
    /// Daily transaction count range per policy.
    #[serde(default)]
    pub daily_transactions: DailyCounts,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 30).unwrap_or_default(),
            mix: CategoryMix::default(),
            daily_transactions: DailyCounts::default(),
        }
    }
}

impl SimulationConfig {
    /// The configured date range.
    pub fn date_range(&self) -> DateRange {
        DateRange {
            start: self.start_date,
            end: self.end_date,
        }
    }

    /// Validates dates, probabilities and both count ranges.
    ///
    /// Neither count range may exceed [`MAX_DAILY_TRANSACTIONS`] per day.
    pub fn validate(&self) -> SimResult<()> {
        self.date_range().validate()?;
        self.mix.validate()?;
        for counts in [
            self.daily_transactions.flat_split,
            self.daily_transactions.tiered_incentive,
        ] {
            counts.validate()?;
            if counts.max > MAX_DAILY_TRANSACTIONS {
                return Err(SimError::DailyCountTooLarge {
                    max: counts.max,
                    limit: MAX_DAILY_TRANSACTIONS,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mix_is_valid() {
        assert!(CategoryMix::default().validate().is_ok());
    }

    #[test]
    fn test_mix_not_summing_to_one_is_rejected() {
        let mix = CategoryMix {
            hair: 0.7,
            nail: 0.4,
            senior_stylist: 0.6,
        };
        match mix.validate() {
            Err(SimError::InvalidProbability { name, .. }) => assert_eq!(name, "category_mix"),
            other => panic!("Expected InvalidProbability, got {:?}", other),
        }
    }

    #[test]
    fn test_senior_probability_out_of_range_is_rejected() {
        let mix = CategoryMix {
            senior_stylist: 1.5,
            ..CategoryMix::default()
        };
        match mix.validate() {
            Err(SimError::InvalidProbability { name, .. }) => assert_eq!(name, "senior_stylist"),
            other => panic!("Expected InvalidProbability, got {:?}", other),
        }
    }

    #[test]
    fn test_daily_counts_per_policy() {
        let counts = DailyCounts::default();
        assert_eq!(counts.for_policy(Policy::FlatSplit), CountRange { min: 5, max: 15 });
        assert_eq!(
            counts.for_policy(Policy::TieredIncentive),
            CountRange { min: 7, max: 15 }
        );
    }

    #[test]
    fn test_simulation_config_from_yaml_uses_defaults() {
        let yaml = "seed: 7\nstart_date: 2025-03-01\nend_date: 2025-03-31\n";
        let config: SimulationConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.date_range().len_days(), 31);
        assert_eq!(config.mix, CategoryMix::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_simulation_config_rejects_inverted_counts() {
        let mut config = SimulationConfig::default();
        config.daily_transactions.tiered_incentive = CountRange { min: 20, max: 10 };
        assert!(matches!(
            config.validate(),
            Err(SimError::InvalidCountRange { min: 20, max: 10 })
        ));
    }

    #[test]
    fn test_simulation_config_rejects_oversized_daily_counts() {
        let mut config = SimulationConfig::default();
        config.daily_transactions.flat_split = CountRange {
            min: 5,
            max: MAX_DAILY_TRANSACTIONS + 1,
        };
        assert!(matches!(
            config.validate(),
            Err(SimError::DailyCountTooLarge { limit: MAX_DAILY_TRANSACTIONS, .. })
        ));

        config.daily_transactions.flat_split = CountRange {
            min: 5,
            max: MAX_DAILY_TRANSACTIONS,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_catalog_config_flattens_in_category_order() {
        let yaml = r#"
services:
  nail:
    - name: Manicure
      price: "119"
  hair:
    - name: Haircut
      price: "149"
    - name: Color
      price: "699"
"#;
        let config: CatalogConfig = serde_yaml::from_str(yaml).unwrap();
        let names: Vec<String> = config.into_services().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Haircut", "Color", "Manicure"]);
    }
}
