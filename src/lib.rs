//! Salon month simulator.
//!
//! This crate generates a synthetic month of salon sales from a service
//! catalog and evaluates two staff compensation policies over it, reporting
//! staff pay and owner profitability.

#![warn(missing_docs)]

pub mod api;
pub mod catalog;
pub mod compensation;
pub mod config;
pub mod error;
pub mod generation;
pub mod models;
pub mod report;
pub mod simulation;
