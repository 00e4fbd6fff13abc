//! Codeshelf - Listing Catalog Backend
//!
//! Codeshelf is a small HTTP service exposing a catalog of source-code
//! listings together with a minimal credential-based account system.
//!
//! # Module Structure
//!
//! The library is organized into focused modules:
//!
//! - **`server`** - Configuration loading, application construction, shared
//!   state
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential hashing, user and session stores, the auth
//!   service, and the sign-up/sign-in/sign-out handlers
//! - **`listings`** - Listing model, free-text search, and listing handlers
//! - **`error`** - Service error taxonomy and HTTP response conversion
//!
//! # Architecture
//!
//! All shared state lives in [`server::state::AppState`]: the PostgreSQL
//! connection pool, the [`auth::service::AuthService`] constructed once at
//! startup from the immutable [`server::config::ServerConfig`], and the
//! build metadata served by `/api/info`. Handlers extract the slice of
//! state they need through axum's `FromRef` mechanism; there are no
//! ambient globals.

/// Credential hashing, user/session stores, auth service and handlers
pub mod auth;

/// Service error taxonomy and HTTP conversion
pub mod error;

/// Listing model, search and handlers
pub mod listings;

/// Route configuration
pub mod routes;

/// Server setup, configuration and state
pub mod server;

// Re-export commonly used types
pub use error::ServiceError;
pub use server::config::ServerConfig;
