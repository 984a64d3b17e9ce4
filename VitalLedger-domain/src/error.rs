//! Central error type for the HTTP surface.
//!
//! Every handler returns `Result<_, ApiError>`; the category-to-status
//! mapping lives in exactly one place (`ApiError::status`) instead of being
//! repeated per handler.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use vital_ledger_data::repository::RepositoryError;

/// Error taxonomy for API requests. No category is ever retried; every
/// failure is terminal for the request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The `X-API-Key` header was absent
    #[error("API key is missing")]
    MissingApiKey,

    /// The supplied credential has no record in the api_keys collection
    #[error("Invalid API key")]
    InvalidApiKey,

    /// A required field was missing or malformed; the message enumerates the
    /// offending field(s)
    #[error("{0}")]
    Validation(String),

    /// The document store failed. The raw error text is surfaced to the
    /// client, matching the original system's behavior.
    #[error("{0}")]
    Store(#[from] RepositoryError),
}

impl ApiError {
    /// The single place where error categories map to HTTP status codes.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingApiKey | ApiError::InvalidApiKey => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use serde_json::Value;

    use vital_ledger_data::database::DatabaseError;

    use super::*;

    #[test]
    fn every_category_maps_to_its_status() {
        assert_eq!(ApiError::MissingApiKey.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::InvalidApiKey.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::Validation("Missing weight field".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Store(RepositoryError::Lock("poisoned".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn auth_errors_use_the_exact_wire_messages() {
        for (error, expected) in [
            (ApiError::MissingApiKey, "API key is missing"),
            (ApiError::InvalidApiKey, "Invalid API key"),
        ] {
            let response = error.into_response();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let body: Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body, json!({ "error": expected }));
        }
    }

    #[tokio::test]
    async fn store_errors_surface_the_raw_error_text() {
        let error = ApiError::Store(RepositoryError::Database(DatabaseError::Query(
            "disk I/O error".to_string(),
        )));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Database error: Database query error: disk I/O error");
    }
}
