//! Error types for the salon simulator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can stop a simulation run. All of them are
//! configuration or output errors: the generator and compensation models
//! are deterministic and never fail once their inputs have been validated.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the salon simulator.
///
/// # Example
///
/// ```
/// use salon_sim::error::SimError;
///
/// let error = SimError::ConfigNotFound {
///     path: "/missing/catalog.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/catalog.yaml");
/// ```
#[derive(Debug, Error)]
pub enum SimError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A category that the generator may draw from has no services.
    #[error("Category '{category}' has no services")]
    EmptyCategory {
        /// The category label.
        category: String,
    },

    /// A service was configured with a zero or negative price.
    #[error("Service '{service}' has non-positive price {price}")]
    InvalidPrice {
        /// The service name.
        service: String,
        /// The offending price.
        price: Decimal,
    },

    /// The per-day transaction count range is inverted.
    #[error("Invalid daily transaction range: min {min} is greater than max {max}")]
    InvalidCountRange {
        /// Lower bound.
        min: u32,
        /// Upper bound.
        max: u32,
    },

    /// The per-day transaction count exceeds what a simulation may draw.
    #[error("Invalid daily transaction range: max {max} exceeds the limit of {limit}")]
    DailyCountTooLarge {
        /// Requested upper bound.
        max: u32,
        /// Largest allowed upper bound.
        limit: u32,
    },

    /// The simulated date range ends before it starts.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// First day of the range.
        start: NaiveDate,
        /// Last day of the range.
        end: NaiveDate,
    },

    /// A probability or probability mix is out of bounds.
    #[error("Invalid probability '{name}': {message}")]
    InvalidProbability {
        /// The name of the probability setting.
        name: String,
        /// A description of the problem.
        message: String,
    },

    /// A compensation setting is out of bounds.
    #[error("Invalid compensation setting '{field}': {message}")]
    InvalidSettings {
        /// The setting that was invalid.
        field: String,
        /// A description of what made the setting invalid.
        message: String,
    },

    /// The report could not be written.
    #[error("Failed to write report '{path}': {message}")]
    ReportWrite {
        /// The path being written.
        path: String,
        /// The underlying I/O or encoding error.
        message: String,
    },
}

/// A type alias for Results that return SimError.
pub type SimResult<T> = Result<T, SimError>;
