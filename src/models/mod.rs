//! Core data models for the salon simulator.
//!
//! This module contains all the domain models used throughout the crate.

mod breakdown;
mod service;
mod staff;
mod transaction;

pub use breakdown::{AuditStep, CompensationBreakdown, Metric, Policy, StaffPay};
pub use service::{Category, ServiceDefinition};
pub use staff::StaffRole;
pub use transaction::{CountRange, DateRange, Transaction};
