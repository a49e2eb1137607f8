//! Stochastic transaction generation.
//!
//! This module contains the seeded transaction generator, inverse-price
//! service sampling and the visit/staff assignment draws.

mod generator;
mod staff;
mod weights;

pub use generator::{TransactionGenerator, generate_transactions};
pub use staff::Visit;
pub use weights::{ServiceSampler, inverse_price_weights};
