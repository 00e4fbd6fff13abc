//! Service Error Types
//!
//! Four caller-facing failure categories, one per HTTP status class the
//! transport needs to distinguish:
//!
//! - `Validation` - bad input, the caller can retry with corrected input
//! - `Forbidden` - authentication failed, deliberately opaque as to cause
//! - `NotFound` - no live session matches a presented token
//! - `Storage` - the persistent store failed
//! - `Session` - session creation failed after the account/credential step
//!   already succeeded, so callers can tell "account created but not
//!   logged in" apart from a full storage failure

use axum::http::StatusCode;
use thiserror::Error;

/// Errors surfaced by the auth service and listing search.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing or malformed input.
    #[error("{message}")]
    Validation { message: String },

    /// Authentication failed. Carries no cause: an unknown login and a
    /// wrong password are indistinguishable to callers.
    #[error("authentication failed")]
    Forbidden,

    /// No live session matches the presented token.
    #[error("session not found")]
    NotFound,

    /// The persistent store failed (insert, query, row decoding or
    /// connectivity).
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Session creation failed after the account or credential step
    /// succeeded.
    #[error("session failed: {message}")]
    Session { message: String },
}

impl ServiceError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn session(message: impl Into<String>) -> Self {
        Self::Session {
            message: message.into(),
        }
    }

    /// HTTP status class for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Session { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to put on the wire. Storage details stay in the logs;
    /// a session failure keeps its distinct label so callers can react to
    /// the partial-failure case.
    pub fn public_message(&self) -> String {
        match self {
            Self::Storage(_) => "internal error".to_string(),
            Self::Session { .. } => "session failed".to_string(),
            other => other.to_string(),
        }
    }
}
