//! HTTP route handlers for the payment-status API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                    - Liveness check
//! GET  /health/ready              - Readiness check (verifies database)
//!
//! # Payment statuses
//! GET  /payment-statuses          - List the catalog
//!                                   (?is_active=true|false, optional)
//! ```

pub mod payment_statuses;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new().route("/payment-statuses", get(payment_statuses::list))
}
