//! API Route Wiring
//!
//! Maps every API path to its handler. The handlers themselves live next
//! to the subsystems they expose (`auth::handlers`, `listings::handlers`,
//! `server::info`).

use axum::Router;

use crate::auth::handlers::{sign_in, sign_out, sign_up};
use crate::listings::handlers::{list_collections, list_examples};
use crate::server::info::build_info;
use crate::server::state::AppState;

/// Configure API routes.
///
/// All endpoints are public: the auth endpoints issue and revoke
/// sessions, and the catalog endpoints are read-only.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/sign-up", axum::routing::post(sign_up))
        .route("/api/auth/sign-in", axum::routing::post(sign_in))
        .route("/api/auth/sign-out", axum::routing::delete(sign_out))
        // Catalog endpoints
        .route("/api/examples", axum::routing::get(list_examples))
        .route("/api/collections", axum::routing::get(list_collections))
        // Build metadata
        .route("/api/info", axum::routing::get(build_info))
}
