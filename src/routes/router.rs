//! Router Configuration
//!
//! Combines the API routes into a single Axum router with per-request
//! tracing and a 404 fallback.
//!
//! # Routes
//!
//! ## Authentication
//! - `POST /api/auth/sign-up` - register and log in
//! - `POST /api/auth/sign-in` - authenticate
//! - `DELETE /api/auth/sign-out` - revoke a session
//!
//! ## Catalog
//! - `GET /api/examples` - free-text listing search (`query`)
//! - `GET /api/collections` - the same search (`criteria`)
//!
//! ## Meta
//! - `GET /api/info` - build metadata
//!
//! Unknown routes fall through to a plain 404.

use axum::http::StatusCode;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured.
pub fn create_router(state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    // Per-request logging, the only middleware in the stack
    router.layer(TraceLayer::new_for_http()).with_state(state)
}
