//! Database test fixture
//!
//! Connects to the test database named by `TEST_DATABASE_URL` (or
//! `DATABASE_URL`), applies migrations and truncates all tables so every
//! test starts clean. Tests that need the database skip with a notice
//! when neither variable is set, so the rest of the suite stays runnable
//! anywhere.

use sqlx::PgPool;

pub struct TestDatabase {
    pool: PgPool,
}

impl TestDatabase {
    /// Connect, migrate and truncate. `None` when no test database is
    /// configured.
    pub async fn try_new() -> Option<Self> {
        let url = std::env::var("TEST_DATABASE_URL")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .ok()?;

        let pool = PgPool::connect(&url)
            .await
            .expect("failed to connect to test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("failed to run migrations");

        sqlx::query("TRUNCATE TABLE sessions, users, listings CASCADE")
            .execute(&pool)
            .await
            .expect("failed to truncate test tables");

        Some(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Print the standard skip notice for DB-backed tests.
pub fn skip_notice(test: &str) {
    eprintln!("skipping {}: TEST_DATABASE_URL/DATABASE_URL not set", test);
}
