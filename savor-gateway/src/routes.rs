//! Axum route handlers for the review gateway.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use savor_core::{Review, ReviewId, SubjectId};
use savor_store::DocumentStore;

use crate::error::GatewayError;

// ── Shared state ─────────────────────────────────────────────────────────────

type Store = Arc<dyn DocumentStore>;

/// Usage text served at the root path.
const USAGE: &str = "\
savor - an anonymous review service for 64-digit hex identifiers

GET   /ping                  liveness probe, answers \"pong\"

GET   /hex/<hex64>           all reviews for the subject, as a JSON object
                             keyed by review id

PATCH /hex/<hex64>           submit a review: a JSON object with optional
                             \"rating\" (1-5) and \"comment\"; every other
                             key is kept verbatim under \"meta\". The review
                             id is the SHA-256 of the exact request body,
                             echoed in the Content-Location header.

GET   /hex/<hex64>/<sha256>  one review by id
";

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router with the given document store.
pub fn create_router(store: Store) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ping", get(ping))
        .route("/hex/{hex64}", get(list_reviews).patch(submit_review))
        .route("/hex/{hex64}/{sha256}", get(fetch_review))
        .with_state(store)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /` — plain-text usage description.
pub async fn index() -> &'static str {
    USAGE
}

/// `GET /ping` — liveness probe.
pub async fn ping() -> impl IntoResponse {
    Json("pong")
}

/// `GET /hex/:hex64` — every review for the subject, keyed by review id.
///
/// Reads the entire subcollection on every call; there is no pagination.
///
/// # Errors
/// Returns [`GatewayError::Invalid`] if the subject segment is not a
/// 64-digit hex string.
pub async fn list_reviews(
    State(store): State<Store>,
    Path(hex64): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let subject = SubjectId::parse(hex64)?;
    let reviews = store.stream(&subject).await?;
    let body: BTreeMap<String, Review> = reviews
        .into_iter()
        .map(|(id, record)| (id.into_inner(), record))
        .collect();
    Ok(Json(body))
}

/// `PATCH /hex/:hex64` — create or wholesale-replace a review.
///
/// The review id is the SHA-256 of the exact body bytes, computed before
/// parsing so that key order and whitespace take part in the identity.
/// Byte-identical submissions overwrite the same document; any byte
/// difference creates a distinct review.
///
/// # Errors
/// Returns [`GatewayError::Invalid`] for a bad subject segment or rating,
/// or [`GatewayError::MalformedPayload`] if the body is not a JSON object.
pub async fn submit_review(
    State(store): State<Store>,
    Path(hex64): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, GatewayError> {
    let subject = SubjectId::parse(hex64)?;
    let id = ReviewId::derive(&body);
    let payload = match serde_json::from_slice::<Value>(&body) {
        Ok(Value::Object(map)) => map,
        Ok(_) | Err(_) => return Err(GatewayError::MalformedPayload),
    };
    let record = Review::from_payload(payload)?;
    store.set(&subject, &id, record.clone()).await?;
    tracing::info!(subject = %subject, review = %id, "review stored");
    let location = format!("/hex/{subject}/{id}");
    Ok(([(header::CONTENT_LOCATION, location)], Json(record)))
}

/// `GET /hex/:hex64/:sha256` — one review by id.
///
/// Both segments are validated with the same hex64 rules; the subject
/// segment is checked first, so its error wins when both are bad.
///
/// # Errors
/// Returns [`GatewayError::Invalid`] for a bad segment, or
/// [`GatewayError::NotFound`] if no such review exists.
pub async fn fetch_review(
    State(store): State<Store>,
    Path((hex64, sha256)): Path<(String, String)>,
) -> Result<impl IntoResponse, GatewayError> {
    let subject = SubjectId::parse(hex64)?;
    let id = ReviewId::parse(sha256)?;
    match store.get(&subject, &id).await? {
        Some(record) => Ok(Json(record)),
        None => Err(GatewayError::NotFound),
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;

    use savor_store::MemoryStore;

    use super::*;

    fn test_router() -> Router {
        create_router(Arc::new(MemoryStore::new()))
    }

    async fn send(app: Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
        let resp = match app.oneshot(req).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        let status = resp.status();
        let bytes = match axum::body::to_bytes(resp.into_body(), 64 * 1024).await {
            Ok(b) => b,
            Err(e) => panic!("failed to read body: {e}"),
        };
        (status, bytes.to_vec())
    }

    fn get_req(uri: &str) -> Request<Body> {
        match Request::builder().uri(uri).body(Body::empty()) {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        }
    }

    fn patch_req(uri: &str, body: &[u8]) -> Request<Body> {
        match Request::builder()
            .method("PATCH")
            .uri(uri)
            .body(Body::from(body.to_vec()))
        {
            Ok(r) => r,
            Err(e) => panic!("failed to build request: {e}"),
        }
    }

    fn json_body(bytes: &[u8]) -> Value {
        match serde_json::from_slice(bytes) {
            Ok(v) => v,
            Err(e) => panic!("invalid JSON: {e}"),
        }
    }

    #[tokio::test]
    async fn ping_answers_pong() {
        let (status, body) = send(test_router(), get_req("/ping")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body), json!("pong"));
    }

    #[tokio::test]
    async fn index_serves_plain_text_usage() {
        let app = test_router();
        let resp = match app.oneshot(get_req("/")).await {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert!(content_type.starts_with("text/plain"), "got {content_type}");
        let bytes = match axum::body::to_bytes(resp.into_body(), 64 * 1024).await {
            Ok(b) => b,
            Err(e) => panic!("failed to read body: {e}"),
        };
        let text = String::from_utf8_lossy(&bytes).into_owned();
        assert!(text.contains("PATCH /hex/"), "usage must describe the endpoints");
    }

    #[tokio::test]
    async fn list_with_non_hex_subject_is_bad_request() {
        let (status, body) = send(test_router(), get_req("/hex/zz")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json_body(&body), json!({"error": "zz is not hexadecimal"}));
    }

    #[tokio::test]
    async fn list_with_short_hex_subject_reports_wrong_length() {
        let uri = format!("/hex/{}", "a".repeat(63));
        let (status, body) = send(test_router(), get_req(&uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(&body),
            json!({"error": "hexadecimal number should have 64 digits"})
        );
    }

    #[tokio::test]
    async fn list_unknown_subject_is_an_empty_object() {
        let uri = format!("/hex/{}", "0".repeat(64));
        let (status, body) = send(test_router(), get_req(&uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body), json!({}));
    }

    #[tokio::test]
    async fn submit_review_stores_record_and_sets_content_location() {
        let app = test_router();
        let subject = "a".repeat(64);
        let body = br#"{"rating": 3, "comment": "ok", "extra": 1}"#;
        let expected_id = ReviewId::derive(body);

        let resp = match app
            .clone()
            .oneshot(patch_req(&format!("/hex/{subject}"), body))
            .await
        {
            Ok(r) => r,
            Err(e) => panic!("handler error: {e}"),
        };
        assert_eq!(resp.status(), StatusCode::OK);
        let location = resp
            .headers()
            .get(header::CONTENT_LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert_eq!(location, format!("/hex/{subject}/{expected_id}"));

        let bytes = match axum::body::to_bytes(resp.into_body(), 64 * 1024).await {
            Ok(b) => b,
            Err(e) => panic!("failed to read body: {e}"),
        };
        assert_eq!(
            json_body(&bytes),
            json!({"rating": 3, "comment": "ok", "meta": {"extra": 1}})
        );

        // The record must now be readable at the advertised location.
        let (status, body) = send(app, get_req(&location)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json_body(&body),
            json!({"rating": 3, "comment": "ok", "meta": {"extra": 1}})
        );
    }

    #[tokio::test]
    async fn submit_review_with_invalid_rating_stores_nothing() {
        let app = test_router();
        let subject = "b".repeat(64);

        let (status, body) = send(
            app.clone(),
            patch_req(&format!("/hex/{subject}"), br#"{"rating": 6}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = json_body(&body)["error"].as_str().unwrap_or_default().to_owned();
        assert!(message.contains("should be 1, 2, 3, 4, or 5"), "got {message}");

        let (status, body) = send(app, get_req(&format!("/hex/{subject}"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body), json!({}), "rejected write must not persist");
    }

    #[tokio::test]
    async fn submit_review_with_non_json_body_is_bad_request() {
        let subject = "c".repeat(64);
        let (status, body) = send(
            test_router(),
            patch_req(&format!("/hex/{subject}"), b"not json at all"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(&body),
            json!({"error": "request body is not a JSON object"})
        );
    }

    #[tokio::test]
    async fn submit_review_with_json_array_body_is_bad_request() {
        let subject = "c".repeat(64);
        let (status, _) = send(
            test_router(),
            patch_req(&format!("/hex/{subject}"), b"[1, 2, 3]"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn fetch_missing_review_is_not_found() {
        let uri = format!("/hex/{}/{}", "0".repeat(64), "0".repeat(64));
        let (status, body) = send(test_router(), get_req(&uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json_body(&body), json!({"error": "not found"}));
    }

    #[tokio::test]
    async fn fetch_with_invalid_review_segment_is_bad_request() {
        let uri = format!("/hex/{}/nope", "0".repeat(64));
        let (status, body) = send(test_router(), get_req(&uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json_body(&body), json!({"error": "nope is not hexadecimal"}));
    }

    #[tokio::test]
    async fn fetch_with_both_segments_invalid_reports_the_subject_first() {
        let (status, body) = send(test_router(), get_req("/hex/xyz/worse")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json_body(&body), json!({"error": "xyz is not hexadecimal"}));
    }
}
