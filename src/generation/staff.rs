//! Visit type and staff assignment draws.

use rand::Rng;

use crate::models::{Category, StaffRole};

/// The kind of visit a generated slot represents.
///
/// Only hair and nail visits are generated; services in the Other category
/// appear on the price list but are never drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// A hair service.
    Hair,
    /// A nail service.
    Nail,
}

impl Visit {
    /// Draws a visit type: hair with probability `hair_probability`, else nail.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R, hair_probability: f64) -> Self {
        if rng.gen_bool(hair_probability) {
            Visit::Hair
        } else {
            Visit::Nail
        }
    }

    /// The catalog category this visit draws from.
    pub fn category(self) -> Category {
        match self {
            Visit::Hair => Category::Hair,
            Visit::Nail => Category::Nail,
        }
    }

    /// Assigns the staff member for this visit.
    ///
    /// Nail visits always go to the nail tech. Hair visits go to the senior
    /// stylist with probability `senior_probability`, otherwise the junior.
    /// Nail visits consume no randomness.
    pub fn assign_staff<R: Rng + ?Sized>(self, rng: &mut R, senior_probability: f64) -> StaffRole {
        match self {
            Visit::Nail => StaffRole::NailTech,
            Visit::Hair => {
                if rng.gen_bool(senior_probability) {
                    StaffRole::SeniorStylist
                } else {
                    StaffRole::JuniorStylist
                }
            }
        }
    }
}
