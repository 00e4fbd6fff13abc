//! Sign-out Handler
//!
//! Implements `DELETE /api/auth/sign-out`. The bearer token comes from
//! the `x-auth-token` header; a missing header is treated like an unknown
//! token. Deletion is idempotent, so the endpoint answers `204 No
//! Content` for any token unless the store itself fails.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};

use crate::auth::service::AuthService;
use crate::error::ServiceError;

/// Header carrying the session bearer token.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

pub async fn sign_out(
    State(auth): State<AuthService>,
    headers: HeaderMap,
) -> Result<StatusCode, ServiceError> {
    let token = headers
        .get(AUTH_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    auth.sign_out(token).await?;

    Ok(StatusCode::NO_CONTENT)
}
