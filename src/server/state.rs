//! Application State Management
//!
//! [`AppState`] is the central state container for the Axum application.
//! It is built once during startup and cloned into every handler; all
//! fields are cheap to clone (the pool and service hold `Arc`s
//! internally).
//!
//! The `FromRef` implementations let handlers extract just the slice of
//! state they need: the listing handlers take the pool, the auth handlers
//! take the [`AuthService`], and the info handler takes [`BuildInfo`].

use axum::extract::FromRef;
use serde::Serialize;
use sqlx::PgPool;

use crate::auth::service::AuthService;

/// Build metadata exposed by `GET /api/info`.
///
/// `commit` and `date` are injected at compile time through the
/// `BUILD_COMMIT` and `BUILD_DATE` environment variables; when absent
/// (local builds) they read `unknown`.
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub commit: String,
    pub version: String,
    pub date: String,
}

impl BuildInfo {
    pub fn from_build_env() -> Self {
        Self {
            commit: option_env!("BUILD_COMMIT").unwrap_or("unknown").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            date: option_env!("BUILD_DATE").unwrap_or("unknown").to_string(),
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool, shared with the auth service.
    pub pool: PgPool,

    /// Auth service composing the credential hasher with the user and
    /// session stores.
    pub auth: AuthService,

    /// Build metadata for the info endpoint.
    pub build_info: BuildInfo,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

impl FromRef<AppState> for BuildInfo {
    fn from_ref(state: &AppState) -> Self {
        state.build_info.clone()
    }
}
