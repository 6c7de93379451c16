//! Route definitions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;

/// Create the API router.
pub fn create_router() -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health))
        .route("/api/v1/health", get(handlers::health))
        // Risk
        .route("/api/v1/risk", post(handlers::compute_risk))
        .route("/api/v1/risk/batch", post(handlers::compute_risk_batch))
        // Calibration data
        .route("/api/v1/calibration", get(handlers::calibration))
}
