//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use savor_core::CoreError;
use savor_store::StoreError;

/// Errors that can occur during gateway request handling.
///
/// Every variant is converted directly into an HTTP response at the point
/// of detection; nothing is retried or wrapped further.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// Client input failed identifier validation or payload normalization.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    /// The write body is not parseable as a JSON object.
    #[error("request body is not a JSON object")]
    MalformedPayload,

    /// The requested review document does not exist.
    #[error("not found")]
    NotFound,

    /// An error propagated from the document store.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::Invalid(_) | GatewayError::MalformedPayload => StatusCode::BAD_REQUEST,
            GatewayError::NotFound => StatusCode::NOT_FOUND,
            GatewayError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
