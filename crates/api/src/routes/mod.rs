//! HTTP route handlers for the pass API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health           - Liveness check
//! GET  /health/ready     - Readiness check (store connectivity)
//!
//! # Passes
//! POST /generate_pass    - Issue a pass; responds with the PDF document
//! POST /verify_pass      - Look up a scanned code
//! ```

pub mod passes;

use axum::{Router, routing::post};

use crate::state::AppState;

/// Create all routes for the pass API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/generate_pass", post(passes::generate_pass))
        .route("/verify_pass", post(passes::verify_pass))
}
