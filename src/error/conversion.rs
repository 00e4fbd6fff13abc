//! Error Conversion
//!
//! `IntoResponse` for [`ServiceError`], so handlers can return it
//! directly. The response body is JSON:
//!
//! ```json
//! {
//!   "error": "authentication failed",
//!   "status": 403
//! }
//! ```
//!
//! Server-side failures are logged with their full detail here and masked
//! on the wire; client-side rejections are logged at warn with the same
//! text the caller sees.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::error::types::ServiceError;

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {:?}", self);
        } else {
            tracing::warn!("request rejected: {}", self);
        }

        let body = Json(serde_json::json!({
            "error": self.public_message(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
