//! The salon's built-in service menu.

use rust_decimal::Decimal;

use crate::models::{Category, ServiceDefinition};

const HAIR_SERVICES: &[(&str, i64)] = &[
    ("Blowdry", 99),
    ("Haircut", 149),
    ("Iron", 199),
    ("Hair Spa", 349),
    ("Hair Botox Treatment", 499),
    ("Keratin Mask", 499),
    ("Color", 699),
    ("Rebond", 1499),
    ("Rebond Hair Botox", 1999),
    ("Rebond / Color", 2199),
    ("Rebond / Color / Brazilian", 3199),
    ("Kerabond", 1999),
    ("Brazilian", 1499),
    ("Brazilian / Botox", 1499),
    ("Brazilian / Keratin", 1499),
    ("LUXLISS Cysteine Treatment", 1999),
    ("LUXLISS Smooth Wonder Treatment", 1999),
    ("Highlights (per foil)", 100),
    ("Balayage / Color", 2499),
];

const NAIL_SERVICES: &[(&str, i64)] = &[
    ("Manicure", 119),
    ("Pedicure", 149),
    ("Manicure / Pedicure", 269),
    ("Manicure / Pedicure / Foot Spa", 499),
    ("Foot Spa", 299),
    ("Foot Spa / Pedicure", 399),
    ("Manicure / Gel Polish", 349),
    ("Pedicure / Gel Polish", 399),
    ("Nails Extension Ordinary Polish", 399),
    ("Nails Extension Gel Polish", 599),
];

const OTHER_SERVICES: &[(&str, i64)] = &[
    ("Eyelash Extension", 399),
    ("Hair & Make up (Wedding/Debut)", 1499),
];

/// Returns the full menu in price-list order: hair, then nail, then other.
pub fn default_services() -> Vec<ServiceDefinition> {
    [
        (Category::Hair, HAIR_SERVICES),
        (Category::Nail, NAIL_SERVICES),
        (Category::Other, OTHER_SERVICES),
    ]
    .into_iter()
    .flat_map(|(category, entries)| {
        entries
            .iter()
            .map(move |(name, price)| ServiceDefinition::new(*name, category, Decimal::from(*price)))
    })
    .collect()
}
