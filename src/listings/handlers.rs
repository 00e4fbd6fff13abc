//! Listing Handlers
//!
//! Two read-only endpoints over the same search:
//!
//! - `GET /api/examples?query=` - listings matching the free-text query
//! - `GET /api/collections?criteria=` - the same search keyed by the
//!   `criteria` parameter
//!
//! Both default to the empty query, which matches every listing.

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::ServiceError;
use crate::listings::search::{search_listings, Listing};

#[derive(Debug, Default, Deserialize)]
pub struct ExamplesParams {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CollectionsParams {
    #[serde(default)]
    pub criteria: String,
}

/// `GET /api/examples` - listings matching the `query` parameter.
pub async fn list_examples(
    State(pool): State<PgPool>,
    Query(params): Query<ExamplesParams>,
) -> Result<Json<Vec<Listing>>, ServiceError> {
    let listings = search_listings(&pool, &params.query).await?;
    Ok(Json(listings))
}

/// `GET /api/collections` - listings matching the `criteria` parameter.
pub async fn list_collections(
    State(pool): State<PgPool>,
    Query(params): Query<CollectionsParams>,
) -> Result<Json<Vec<Listing>>, ServiceError> {
    let listings = search_listings(&pool, &params.criteria).await?;
    Ok(Json(listings))
}
