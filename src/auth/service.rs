//! Auth Service
//!
//! Composes the credential hasher with the user and session stores into
//! the three account operations: sign-up, sign-in, sign-out. Constructed
//! once at startup from the immutable configuration and shared through
//! application state; it holds no mutable state of its own, so every
//! operation is request-scoped.

use std::time::Duration;

use sqlx::PgPool;

use crate::auth::hashing::CredentialHasher;
use crate::auth::sessions::{self, Session};
use crate::auth::users;
use crate::error::ServiceError;

#[derive(Clone)]
pub struct AuthService {
    pool: PgPool,
    hasher: CredentialHasher,
    session_ttl: Duration,
}

impl AuthService {
    pub fn new(pool: PgPool, hasher: CredentialHasher, session_ttl: Duration) -> Self {
        Self {
            pool,
            hasher,
            session_ttl,
        }
    }

    /// Register a new account and log it in, returning the session token.
    ///
    /// # Errors
    ///
    /// - `Validation` if either field is empty; nothing is written
    /// - `Storage` if the user insert fails (including a duplicate login)
    /// - `Session` if the user was created but the session insert failed,
    ///   so callers can tell "account created but not logged in" apart
    ///   from "account not created"
    pub async fn sign_up(&self, login: &str, password: &str) -> Result<String, ServiceError> {
        validate_credentials(login, password)?;

        let user = users::create_user(&self.pool, &self.hasher, login, password).await?;
        tracing::info!("user created: {}", user.login);

        sessions::create_session(&self.pool, user.id)
            .await
            .map_err(|e| ServiceError::session(e.to_string()))
    }

    /// Authenticate and issue a fresh session token.
    ///
    /// # Errors
    ///
    /// - `Validation` if either field is empty
    /// - `Forbidden` when no user matches; unknown login and wrong
    ///   password are reported identically
    /// - `Storage` if the lookup itself fails
    /// - `Session` if the session insert fails after authentication
    pub async fn sign_in(&self, login: &str, password: &str) -> Result<String, ServiceError> {
        validate_credentials(login, password)?;

        let user = users::find_by_credentials(&self.pool, &self.hasher, login, password)
            .await?
            .ok_or(ServiceError::Forbidden)?;
        tracing::info!("user authenticated: {}", user.login);

        sessions::create_session(&self.pool, user.id)
            .await
            .map_err(|e| ServiceError::session(e.to_string()))
    }

    /// Revoke a session. Idempotent: revoking an unknown or malformed
    /// token succeeds without effect.
    pub async fn sign_out(&self, token: &str) -> Result<(), ServiceError> {
        sessions::delete_session(&self.pool, token).await?;
        Ok(())
    }

    /// Resolve a bearer token to its live session.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown, revoked or expired token.
    pub async fn session_for_token(&self, token: &str) -> Result<Session, ServiceError> {
        sessions::find_session(&self.pool, token, self.session_ttl)
            .await?
            .ok_or(ServiceError::NotFound)
    }
}

fn validate_credentials(login: &str, password: &str) -> Result<(), ServiceError> {
    if login.is_empty() {
        return Err(ServiceError::validation("login required"));
    }
    if password.is_empty() {
        return Err(ServiceError::validation("password required"));
    }
    Ok(())
}
