//! Common test utilities
//!
//! Shared helpers for the integration tests: the database fixture, a
//! ready-to-use test server over the real router, and seed helpers.

pub mod database;

use axum_test::TestServer;
use sqlx::PgPool;
use std::time::Duration;

use codeshelf::auth::hashing::CredentialHasher;
use codeshelf::auth::service::AuthService;
use codeshelf::routes::create_router;
use codeshelf::server::state::{AppState, BuildInfo};

pub const TEST_PEPPER: &str = "integration-test-pepper";
pub const TEST_SESSION_TTL: Duration = Duration::from_secs(3600);

/// Build a test server over the real router, backed by the given pool.
pub fn test_server(pool: &PgPool) -> TestServer {
    TestServer::new(test_router(pool)).expect("failed to start test server")
}

/// The real router wired to a test auth service.
pub fn test_router(pool: &PgPool) -> axum::Router {
    let state = AppState {
        pool: pool.clone(),
        auth: test_auth(pool),
        build_info: BuildInfo::from_build_env(),
    };
    create_router(state)
}

/// A test auth service over the given pool, matching the one inside the
/// test server.
pub fn test_auth(pool: &PgPool) -> AuthService {
    AuthService::new(
        pool.clone(),
        CredentialHasher::new(TEST_PEPPER),
        TEST_SESSION_TTL,
    )
}

/// Insert a listing row directly into the store.
pub async fn insert_listing(
    pool: &PgPool,
    name: &str,
    description: &str,
    text: &str,
    author: &str,
    loc: i32,
    is_public: bool,
) {
    sqlx::query(
        r#"
        INSERT INTO listings (name, description, text, author, loc, is_public)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(text)
    .bind(author)
    .bind(loc)
    .bind(is_public)
    .execute(pool)
    .await
    .expect("failed to insert test listing");
}

/// Count rows in a table.
pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("failed to count rows")
}
