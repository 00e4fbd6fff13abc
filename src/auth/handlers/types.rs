//! Auth Handler Types
//!
//! Request and response bodies shared by the sign-up and sign-in
//! handlers.

use serde::{Deserialize, Serialize};

/// Sign-up / sign-in request body.
///
/// The password only exists in memory for the duration of the request; it
/// is digested before any comparison or storage and never persisted.
#[derive(Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

/// Response carrying the session's bearer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
