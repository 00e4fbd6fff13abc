//! User Model and Store Operations
//!
//! A user row is `{id, login, password_digest, created_at}`. Rows are
//! created on sign-up and never mutated; there is no deletion path.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::hashing::CredentialHasher;

/// A registered account.
///
/// `password_digest` is the peppered SHA-512 of the password; the raw
/// password is never stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub login: String,
    pub password_digest: Vec<u8>,
    pub created_at: DateTime<Utc>,
}

/// Create a new user.
///
/// Generates a fresh id, digests the supplied password and inserts the
/// row. No uniqueness pre-check happens at this layer; the UNIQUE
/// constraint on `login` turns a duplicate insert into a database error.
///
/// # Errors
///
/// Any insert failure, including a uniqueness violation.
pub async fn create_user(
    pool: &PgPool,
    hasher: &CredentialHasher,
    login: &str,
    password: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let digest = hasher.digest(password.as_bytes());

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, login, password_digest, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id, login, password_digest, created_at
        "#,
    )
    .bind(id)
    .bind(login)
    .bind(&digest)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

/// Look up the user whose login and password digest both match.
///
/// This single lookup is the whole authentication check. `None` covers
/// unknown login and wrong password alike; callers cannot tell the two
/// apart from this layer.
pub async fn find_by_credentials(
    pool: &PgPool,
    hasher: &CredentialHasher,
    login: &str,
    password: &str,
) -> Result<Option<User>, sqlx::Error> {
    let digest = hasher.digest(password.as_bytes());

    sqlx::query_as::<_, User>(
        r#"
        SELECT id, login, password_digest, created_at
        FROM users
        WHERE login = $1 AND password_digest = $2
        "#,
    )
    .bind(login)
    .bind(&digest)
    .fetch_optional(pool)
    .await
}
