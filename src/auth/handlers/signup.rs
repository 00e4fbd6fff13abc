//! Sign-up Handler
//!
//! Implements `POST /api/auth/sign-up`.
//!
//! # Registration Process
//!
//! 1. Validate that login and password are non-empty
//! 2. Digest the password and create the user
//! 3. Create a session for the new user
//! 4. Return the session token
//!
//! # Errors
//!
//! * `400 Bad Request` - empty login or password (nothing is written)
//! * `500 Internal Server Error` - user insert failed (including a login
//!   already taken), or the session insert failed after the account was
//!   created; the two cases carry different response bodies
//!
//! # Example Request
//!
//! ```http
//! POST /api/auth/sign-up HTTP/1.1
//! Content-Type: application/json
//!
//! {"login": "alice", "password": "secret123"}
//! ```
//!
//! # Example Response
//!
//! ```json
//! {"token": "0f8fad5bd9cb469fa165b7ac009ade9f"}
//! ```

use axum::extract::State;
use axum::response::Json;

use crate::auth::handlers::types::{Credentials, TokenResponse};
use crate::auth::service::AuthService;
use crate::error::ServiceError;

pub async fn sign_up(
    State(auth): State<AuthService>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<TokenResponse>, ServiceError> {
    tracing::info!("sign-up request for login: {}", credentials.login);

    let token = auth
        .sign_up(&credentials.login, &credentials.password)
        .await?;

    Ok(Json(TokenResponse { token }))
}
