//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a salon
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{SimError, SimResult};

use super::settings::CompensationSettings;
use super::types::{CatalogConfig, SimulationConfig};

/// Loads and provides access to a salon configuration.
///
/// # Directory Structure
///
/// ```text
/// config/salon/
/// ├── catalog.yaml     # Services and prices per category
/// ├── settings.yaml    # Compensation settings for both policies
/// └── simulation.yaml  # Seed, dates, category mix, daily counts
/// ```
///
/// # Example
///
/// ```no_run
/// use salon_sim::config::ConfigLoader;
/// use salon_sim::models::Category;
///
/// let loader = ConfigLoader::load("./config/salon")?;
/// println!("{} hair services", loader.catalog().get_services(Category::Hair).len());
/// # Ok::<(), salon_sim::error::SimError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    catalog: Catalog,
    settings: CompensationSettings,
    simulation: SimulationConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - Any loaded value fails validation (prices, probabilities, ranges, rates)
    pub fn load<P: AsRef<Path>>(path: P) -> SimResult<Self> {
        let path = path.as_ref();

        let catalog_config = Self::load_yaml::<CatalogConfig>(&path.join("catalog.yaml"))?;
        let catalog = Catalog::new(catalog_config.into_services())?;

        let settings = Self::load_yaml::<CompensationSettings>(&path.join("settings.yaml"))?;
        settings.validate()?;

        let simulation = Self::load_yaml::<SimulationConfig>(&path.join("simulation.yaml"))?;
        simulation.validate()?;

        debug!(
            path = %path.display(),
            services = catalog.len(),
            seed = simulation.seed,
            "Loaded salon configuration"
        );

        Ok(Self {
            catalog,
            settings,
            simulation,
        })
    }

    /// The built-in salon menu with default settings.
    pub fn builtin() -> Self {
        Self {
            catalog: Catalog::salon_default(),
            settings: CompensationSettings::default(),
            simulation: SimulationConfig::default(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> SimResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| SimError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| SimError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the validated catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the compensation settings.
    pub fn settings(&self) -> &CompensationSettings {
        &self.settings
    }

    /// Returns the simulation configuration.
    pub fn simulation(&self) -> &SimulationConfig {
        &self.simulation
    }
}
