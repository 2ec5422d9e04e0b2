//! HTTP request handlers for the custom skill endpoint.
//!
//! Decodes the request envelope, runs the batch processor and maps failures
//! to status codes using axum.

use crate::config::ServerConfig;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use pagesplit_extractor::{decode_request, BatchProcessor, ExtractorConfig, RequestError};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::error::Error as _;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::{error, info, warn};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Record processor (immutable, shared by all requests)
    pub processor: Arc<BatchProcessor>,
}

impl AppState {
    /// Build state from extractor settings
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            processor: Arc::new(BatchProcessor::new(config)),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Server version
    pub version: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// The request as a whole is malformed
    Request(RequestError),
    /// Body exceeds the configured limit
    PayloadTooLarge,
    /// Anything else
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Request(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "Request body too large".to_string(),
            ),
            AppError::InternalError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal server error: {}", msg),
            ),
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<RequestError> for AppError {
    fn from(e: RequestError) -> Self {
        AppError::Request(e)
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::InternalError(rejection.body_text())
        }
    }
}

/// POST <route_path> - Split page_content for every record in the batch
async fn split_page_content(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    let body = body.map_err(|rejection| {
        error!("Failed to read request body: {}", rejection.body_text());
        AppError::from(rejection)
    })?;

    info!("Custom skill request received ({} bytes)", body.len());

    let request = decode_request(&body).map_err(|e| {
        match e.source() {
            Some(source) => warn!("Rejected request: {} ({})", e, source),
            None => warn!("Rejected request: {}", e),
        }
        AppError::from(e)
    })?;

    let response = state.processor.process_request(&request);

    info!(
        "Processed {} records ({} failed, {} with warnings)",
        response.values.len(),
        response.failure_count(),
        response.warning_count()
    );

    let body = serde_json::to_vec(&response).map_err(|e| {
        error!("Failed to encode response: {}", e);
        AppError::InternalError(e.to_string())
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// GET /health - Liveness check
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Turn a handler panic into a 500 JSON error instead of a dropped connection
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    };

    error!("Handler panicked: {}", detail);
    AppError::InternalError(detail).into_response()
}

/// Create the axum router with all routes
pub fn create_router(state: AppState, config: &ServerConfig) -> AxumRouter {
    AxumRouter::new()
        .route(&config.route_path, post(split_page_content))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt; // for oneshot

    const ROUTE: &str = "/api/page_content_split_http_trigger";

    fn create_test_router() -> AxumRouter {
        let config = ServerConfig::default();
        create_router(AppState::new(config.extractor.clone()), &config)
    }

    fn post_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(ROUTE)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_test_router();

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_split_returns_ok() {
        let app = create_test_router();
        let response = app
            .oneshot(post_request(
                r#"{"values":[{"recordId":"r1","data":{"page_content":"question: Q\n\nanswer: A"}}]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_invalid_json_is_bad_request() {
        let app = create_test_router();
        let response = app.oneshot(post_request("{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_on_skill_route_not_allowed() {
        let app = create_test_router();
        let request = Request::builder().uri(ROUTE).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_panicking_handler_returns_json_500() {
        async fn explode() -> &'static str {
            panic!("record table corrupted")
        }

        let app: AxumRouter = AxumRouter::new()
            .route("/explode", get(explode))
            .layer(CatchPanicLayer::custom(panic_response));

        let request = Request::builder().uri("/explode").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "Internal server error: record table corrupted");
    }

    #[test]
    fn test_panic_payload_without_message() {
        let response = panic_response(Box::new(42_u32));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_error_message() {
        let response = AppError::InternalError("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
