//! Session Records and Bearer Tokens
//!
//! A session row is `{id, user_id, created_at}`, keyed by a UUID. The
//! bearer token handed to clients is that UUID's 32-character lowercase
//! hex encoding, produced by an explicit encode step: the token is a
//! capability, the UUID is a storage key, and the two stay separate
//! notions even though one is derived from the other.
//!
//! Expiry is checked lazily on every lookup ([`find_session`]) and expired
//! rows are reclaimed by the periodic sweep ([`purge_expired`]).

use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// A session row. `user_id` is a weak reference resolved by lookup; the
/// session does not own the user.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Session {
    pub id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Encode a session id as a bearer token.
pub fn encode_token(id: Uuid) -> String {
    hex::encode(id.as_bytes())
}

/// Decode a bearer token back into a session id. Anything that is not 32
/// hex characters is `None`.
pub fn decode_token(token: &str) -> Option<Uuid> {
    let bytes = hex::decode(token).ok()?;
    Uuid::from_slice(&bytes).ok()
}

/// Create a session for `user_id` and return its bearer token.
///
/// The user row exists whenever this is called (sessions are created
/// right after user creation or authentication), so the foreign reference
/// cannot dangle at creation time.
pub async fn create_session(pool: &PgPool, user_id: Uuid) -> Result<String, sqlx::Error> {
    let id = Uuid::new_v4();

    sqlx::query("INSERT INTO sessions (id, user_id, created_at) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(user_id)
        .bind(Utc::now())
        .execute(pool)
        .await?;

    Ok(encode_token(id))
}

/// Delete the session matching `token`.
///
/// Idempotent: a token that does not decode, or that matches no row,
/// deletes nothing and is not an error.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    let Some(id) = decode_token(token) else {
        return Ok(());
    };

    sqlx::query("DELETE FROM sessions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Look up a live session by token.
///
/// A session older than `ttl` is treated as absent even if its row still
/// exists; the sweep will reclaim it.
pub async fn find_session(
    pool: &PgPool,
    token: &str,
    ttl: Duration,
) -> Result<Option<Session>, sqlx::Error> {
    let Some(id) = decode_token(token) else {
        return Ok(None);
    };

    sqlx::query_as::<_, Session>(
        r#"
        SELECT id, user_id, created_at
        FROM sessions
        WHERE id = $1 AND created_at > $2
        "#,
    )
    .bind(id)
    .bind(expiry_cutoff(ttl))
    .fetch_optional(pool)
    .await
}

/// Delete sessions past their TTL. Returns the number of rows removed.
pub async fn purge_expired(pool: &PgPool, ttl: Duration) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM sessions WHERE created_at <= $1")
        .bind(expiry_cutoff(ttl))
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Creation instant before which a session counts as expired. A TTL too
/// large to represent means nothing ever expires.
fn expiry_cutoff(ttl: Duration) -> DateTime<Utc> {
    let secs = ttl.as_secs().min(i64::MAX as u64) as i64;
    chrono::Duration::try_seconds(secs)
        .and_then(|ttl| Utc::now().checked_sub_signed(ttl))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
