//! Response types for the salon simulator API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    fn internal(error: ApiError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<SimError> for ApiErrorResponse {
    fn from(error: SimError) -> Self {
        let message = error.to_string();
        match error {
            SimError::ConfigNotFound { .. } | SimError::ConfigParseError { .. } => {
                Self::internal(ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    message,
                ))
            }
            SimError::EmptyCategory { .. } | SimError::InvalidPrice { .. } => {
                Self::internal(ApiError::with_details(
                    "CATALOG_ERROR",
                    "The service catalog cannot be sampled",
                    message,
                ))
            }
            SimError::InvalidCountRange { .. } => Self::bad_request(ApiError::with_details(
                "INVALID_COUNT_RANGE",
                message,
                "daily_transactions.min must not exceed daily_transactions.max",
            )),
            SimError::DailyCountTooLarge { .. } => {
                Self::bad_request(ApiError::new("INVALID_COUNT_RANGE", message))
            }
            SimError::InvalidDateRange { .. } => Self::bad_request(ApiError::with_details(
                "INVALID_DATE_RANGE",
                message,
                "start_date must not be after end_date",
            )),
            SimError::InvalidProbability { .. } => {
                Self::bad_request(ApiError::new("INVALID_PROBABILITY", message))
            }
            SimError::InvalidSettings { .. } => {
                Self::bad_request(ApiError::new("INVALID_SETTINGS", message))
            }
            SimError::ReportWrite { .. } => Self::internal(ApiError::with_details(
                "REPORT_ERROR",
                "Report could not be written",
                message,
            )),
        }
    }
}
