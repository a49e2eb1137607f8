//! The service catalog.
//!
//! A [`Catalog`] is the immutable price list the generator samples from.
//! It is built once per run, either from the built-in menu or from
//! `catalog.yaml`, and validated on construction so that every later
//! weight computation can assume strictly positive prices.
//!
//! # Example
//!
//! ```
//! use salon_sim::catalog::Catalog;
//! use salon_sim::models::Category;
//!
//! let catalog = Catalog::salon_default();
//! assert_eq!(catalog.get_services(Category::Nail)[0].name, "Manicure");
//! ```

mod menu;

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::error::{SimError, SimResult};
use crate::models::{Category, ServiceDefinition};

pub use menu::default_services;

/// An ordered, validated price list grouped by category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    by_category: BTreeMap<Category, Vec<ServiceDefinition>>,
}

impl Catalog {
    /// Builds a catalog from services, keeping their order within each category.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidPrice`] if any service has a price of zero
    /// or below.
    pub fn new(services: Vec<ServiceDefinition>) -> SimResult<Self> {
        let mut by_category: BTreeMap<Category, Vec<ServiceDefinition>> = BTreeMap::new();

        for service in services {
            if service.price <= Decimal::ZERO {
                return Err(SimError::InvalidPrice {
                    service: service.name,
                    price: service.price,
                });
            }
            by_category.entry(service.category).or_default().push(service);
        }

        Ok(Self { by_category })
    }

    /// The built-in salon menu.
    pub fn salon_default() -> Self {
        let mut by_category: BTreeMap<Category, Vec<ServiceDefinition>> = BTreeMap::new();
        for service in default_services() {
            by_category.entry(service.category).or_default().push(service);
        }
        Self { by_category }
    }

    /// Returns the services of one category in menu order.
    ///
    /// A category with no services yields an empty slice.
    pub fn get_services(&self, category: Category) -> &[ServiceDefinition] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns every non-empty category with its services.
    pub fn services_by_category(&self) -> &BTreeMap<Category, Vec<ServiceDefinition>> {
        &self.by_category
    }

    /// Iterates the flattened price list: hair, nail, then other.
    pub fn price_list(&self) -> impl Iterator<Item = &ServiceDefinition> {
        Category::ALL
            .into_iter()
            .flat_map(move |category| self.get_services(category).iter())
    }

    /// Total number of services across all categories.
    pub fn len(&self) -> usize {
        self.by_category.values().map(Vec::len).sum()
    }

    /// Returns true if the catalog has no services at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
