//! Build metadata endpoint.

use axum::extract::State;
use axum::response::Json;

use crate::server::state::BuildInfo;

/// `GET /api/info` - build commit, version and date as JSON.
pub async fn build_info(State(info): State<BuildInfo>) -> Json<BuildInfo> {
    Json(info)
}
