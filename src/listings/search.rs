//! Listing Model and Search
//!
//! Free-text search across the catalog. The query string is applied as a
//! case-insensitive regular expression against `name`, `author` and
//! `description`; a listing matches when any of the three does. An empty
//! query therefore matches every listing. Callers that pass regex
//! metacharacters get regex semantics - the query is not escaped into a
//! literal substring.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// A catalog entry. Read-only from this service's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub name: String,
    pub description: String,
    pub text: String,
    pub author: String,
    pub loc: i32,
    pub is_public: bool,
}

/// Fetch every listing whose name, author or description matches `query`
/// case-insensitively.
///
/// Results are materialized in full before returning; a failure while
/// reading rows aborts the whole call with no partial output. A query
/// matching nothing yields an empty vector, not an error.
pub async fn search_listings(pool: &PgPool, query: &str) -> Result<Vec<Listing>, sqlx::Error> {
    sqlx::query_as::<_, Listing>(
        r#"
        SELECT name, description, text, author, loc, is_public
        FROM listings
        WHERE name ~* $1 OR author ~* $1 OR description ~* $1
        "#,
    )
    .bind(query)
    .fetch_all(pool)
    .await
}
