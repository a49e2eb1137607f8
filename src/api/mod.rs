//! HTTP API module for the salon simulator.
//!
//! A single endpoint, `POST /simulate`, runs one simulation and returns the
//! full report as JSON.

mod handlers;
mod request;
mod response;
mod state;

pub use crate::config::MAX_DAILY_TRANSACTIONS;
pub use handlers::{MAX_SIMULATED_DAYS, create_router};
pub use request::SimulationRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
