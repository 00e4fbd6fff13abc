//! Server Initialization
//!
//! Builds the application from an immutable [`ServerConfig`]:
//!
//! 1. Connect the PostgreSQL pool and probe connectivity once with a short
//!    deadline, so a store that is unreachable at startup fails fast
//!    instead of failing on the first request.
//! 2. Run database migrations.
//! 3. Construct the auth service from the configured pepper and session
//!    TTL.
//! 4. Spawn the periodic sweep that reclaims expired session rows.
//! 5. Assemble the router.

use std::time::Duration;

use axum::Router;
use sqlx::postgres::PgPoolOptions;

use crate::auth::hashing::CredentialHasher;
use crate::auth::service::AuthService;
use crate::auth::sessions;
use crate::routes::router::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::{AppState, BuildInfo};

/// Deadline for the single startup connectivity probe. Per-request calls
/// rely on the pool's own timeouts.
const STARTUP_PROBE_DEADLINE: Duration = Duration::from_secs(1);

/// How often the expired-session sweep runs.
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(300);

/// Create and configure the Axum application.
///
/// # Errors
///
/// Fails if the database is unreachable within the startup deadline or if
/// migrations cannot be applied.
pub async fn create_app(config: ServerConfig) -> Result<Router, Box<dyn std::error::Error>> {
    tracing::info!("initializing codeshelf backend");

    let pool = PgPoolOptions::new()
        .max_connections(8)
        .connect_lazy(&config.database_url)?;

    tokio::time::timeout(
        STARTUP_PROBE_DEADLINE,
        sqlx::query("SELECT 1").execute(&pool),
    )
    .await??;
    tracing::info!("database reachable");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("database migrations complete");

    let hasher = CredentialHasher::new(config.pepper);
    let auth = AuthService::new(pool.clone(), hasher, config.session_ttl);

    let state = AppState {
        pool: pool.clone(),
        auth,
        build_info: BuildInfo::from_build_env(),
    };

    spawn_session_sweep(pool, config.session_ttl);

    Ok(create_router(state))
}

/// Periodically delete session rows past their TTL. Expiry is also checked
/// lazily on every session lookup, so the sweep only bounds table growth.
fn spawn_session_sweep(pool: sqlx::PgPool, ttl: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(SESSION_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            match sessions::purge_expired(&pool, ttl).await {
                Ok(0) => {}
                Ok(n) => tracing::debug!("purged {} expired sessions", n),
                Err(e) => tracing::warn!("session sweep failed: {:?}", e),
            }
        }
    });
}
