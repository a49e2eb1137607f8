//! HTTP request handlers for the salon simulator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::MAX_DAILY_TRANSACTIONS;
use crate::simulation::run_simulation;

use super::request::SimulationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Longest date range a single request may simulate.
pub const MAX_SIMULATED_DAYS: u32 = 366;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/simulate", post(simulate_handler))
        .with_state(state)
}

/// Handler for POST /simulate endpoint.
///
/// Runs one simulation and returns the full report.
async fn simulate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SimulationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing simulation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return error_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let config = state.config();
    let params = request.to_params(config.simulation());
    let settings = request.settings.as_ref().unwrap_or(config.settings());

    if let Some(error) = check_limits(params.dates.len_days(), params.counts.max) {
        warn!(
            correlation_id = %correlation_id,
            error = %error.message,
            "Request exceeds limits"
        );
        return error_response(StatusCode::BAD_REQUEST, error);
    }

    let start_time = Instant::now();
    match run_simulation(config.catalog(), settings, params) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                report_id = %report.report_id,
                policy = params.policy.name(),
                seed = params.seed,
                transactions = report.transactions.len(),
                owner_net_income = %report.breakdown.owner_net_income,
                duration_us = start_time.elapsed().as_micros(),
                "Simulation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Simulation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            error_response(api_error.status, api_error.error)
        }
    }
}

/// Rejects requests too large to serve inline. Inverted ranges are left to
/// the simulation's own validation.
fn check_limits(days: u32, max_per_day: u32) -> Option<ApiError> {
    if days > MAX_SIMULATED_DAYS {
        return Some(ApiError::validation_error(format!(
            "date range covers {} days; at most {} are allowed",
            days, MAX_SIMULATED_DAYS
        )));
    }
    if max_per_day > MAX_DAILY_TRANSACTIONS {
        return Some(ApiError::validation_error(format!(
            "daily_transactions.max is {}; at most {} are allowed",
            max_per_day, MAX_DAILY_TRANSACTIONS
        )));
    }
    None
}

fn error_response(status: StatusCode, error: ApiError) -> axum::response::Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
