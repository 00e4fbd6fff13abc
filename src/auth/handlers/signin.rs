//! Sign-in Handler
//!
//! Implements `POST /api/auth/sign-in`.
//!
//! # Authentication Process
//!
//! 1. Validate that login and password are non-empty
//! 2. Match login and password digest against the user store in one
//!    lookup
//! 3. Create a session and return its token
//!
//! # Errors
//!
//! * `400 Bad Request` - empty login or password
//! * `403 Forbidden` - no matching user; an unknown login and a wrong
//!   password produce the same status and the same body, so the endpoint
//!   cannot be used to probe which logins exist
//! * `500 Internal Server Error` - store failure, or session creation
//!   failed after authentication

use axum::extract::State;
use axum::response::Json;

use crate::auth::handlers::types::{Credentials, TokenResponse};
use crate::auth::service::AuthService;
use crate::error::ServiceError;

pub async fn sign_in(
    State(auth): State<AuthService>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<TokenResponse>, ServiceError> {
    tracing::info!("sign-in request for login: {}", credentials.login);

    let token = auth
        .sign_in(&credentials.login, &credentials.password)
        .await?;

    Ok(Json(TokenResponse { token }))
}
