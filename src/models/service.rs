//! Service model and related types.
//!
//! This module defines the [`ServiceDefinition`] struct and the [`Category`]
//! enum used to group the salon's price list.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The category a service belongs to.
///
/// # Example
///
/// ```
/// use salon_sim::models::Category;
///
/// assert_eq!(Category::Hair.label(), "Hair");
/// assert_eq!(Category::ALL.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Hair services (cuts, colour, treatments).
    Hair,
    /// Nail services (manicure, pedicure, extensions).
    Nail,
    /// Everything else on the menu (lashes, event make-up).
    Other,
}

impl Category {
    /// All categories in price-list order.
    pub const ALL: [Category; 3] = [Category::Hair, Category::Nail, Category::Other];

    /// Returns the human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Hair => "Hair",
            Category::Nail => "Nail",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single purchasable service with a fixed price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    /// The menu name of the service.
    pub name: String,
    /// The category the service is listed under.
    pub category: Category,
    /// The fixed price of the service.
    pub price: Decimal,
}

impl ServiceDefinition {
    /// Creates a new service definition.
    pub fn new(name: impl Into<String>, category: Category, price: Decimal) -> Self {
        Self {
            name: name.into(),
            category,
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serialization() {
        assert_eq!(serde_json::to_string(&Category::Hair).unwrap(), "\"hair\"");
        assert_eq!(serde_json::to_string(&Category::Nail).unwrap(), "\"nail\"");
        assert_eq!(serde_json::to_string(&Category::Other).unwrap(), "\"other\"");
    }

    #[test]
    fn test_category_display_uses_label() {
        assert_eq!(Category::Nail.to_string(), "Nail");
    }

    #[test]
    fn test_service_price_serializes_as_string() {
        let service = ServiceDefinition::new("Haircut", Category::Hair, Decimal::new(149, 0));
        let json = serde_json::to_string(&service).unwrap();
        assert!(json.contains("\"name\":\"Haircut\""));
        assert!(json.contains("\"category\":\"hair\""));
        assert!(json.contains("\"price\":\"149\""));
    }

    #[test]
    fn test_deserialize_service_from_yaml() {
        let yaml = "name: Manicure\ncategory: nail\nprice: \"119\"\n";
        let service: ServiceDefinition = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(service.name, "Manicure");
        assert_eq!(service.category, Category::Nail);
        assert_eq!(service.price, Decimal::new(119, 0));
    }
}
