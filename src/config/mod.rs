//! Configuration loading and management for the salon simulator.
//!
//! This module loads the catalog, compensation settings and simulation
//! parameters from a directory of YAML files.
//!
//! # Example
//!
//! ```no_run
//! use salon_sim::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/salon").unwrap();
//! println!("Seed: {}", config.simulation().seed);
//! ```

mod loader;
mod settings;
mod types;

pub use loader::ConfigLoader;
pub use settings::{
    BaseSalaries, CompensationSettings, FlatSplitSettings, MAX_AMOUNT, Overhead,
    TieredIncentiveSettings,
};
pub use types::{
    CatalogConfig, CatalogEntry, CategoryMix, DailyCounts, MAX_DAILY_TRANSACTIONS,
    SimulationConfig,
};
