//! Request Router
//!
//! Maps the `/records` endpoints onto catalog operations.

use axum::error_handling::HandleErrorLayer;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use bytes::Bytes;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower::timeout::TimeoutLayer;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::catalog::Record;
use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::protocol::{decode_record, ErrorBody, Pretty};
use crate::service::CatalogService;

/// Build the HTTP router for `service`
///
/// Timeout and concurrency layers are only installed when enabled in
/// `config`.
pub fn router(service: CatalogService, config: &Config) -> Router {
    let router = Router::new()
        .route("/records", get(list_records).post(add_record))
        .route("/records/:id", get(get_record))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http());

    let router = match config.concurrency_limit() {
        Some(limit) => router.layer(GlobalConcurrencyLimitLayer::new(limit)),
        None => router,
    };

    let router = match config.request_timeout() {
        Some(timeout) => router.layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_timeout_error))
                .layer(TimeoutLayer::new(timeout)),
        ),
        None => router,
    };

    router.with_state(service)
}

// =============================================================================
// Handlers
// =============================================================================

/// `GET /records`
async fn list_records(State(service): State<CatalogService>) -> Pretty<Vec<Record>> {
    Pretty(StatusCode::OK, service.list_all())
}

/// `GET /records/:id`
async fn get_record(
    State(service): State<CatalogService>,
    Path(id): Path<String>,
) -> Result<Pretty<Record>> {
    let record = service.get_by_id(&id).map_err(|e| {
        tracing::debug!("Lookup miss: {}", e);
        e
    })?;
    Ok(Pretty(StatusCode::OK, record))
}

/// `POST /records`
///
/// The body is taken as raw bytes so every decode failure, including a
/// missing or wrong content type, answers 400 `invalid request body`.
async fn add_record(
    State(service): State<CatalogService>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Pretty<Record>> {
    let body = body.map_err(|e| CatalogError::MalformedPayload(e.body_text()))?;

    let candidate = decode_record(&body).map_err(|e| {
        tracing::debug!("Rejected request body: {}", e);
        e
    })?;

    match service.add_record(candidate) {
        Ok(record) => {
            tracing::info!("Added record {:?}", record.id);
            Ok(Pretty(StatusCode::CREATED, record))
        }
        Err(e) if e.is_client_error() => {
            tracing::debug!("Rejected record: {}", e);
            Err(e)
        }
        Err(e) => {
            tracing::error!("Failed to add record: {}", e);
            Err(e)
        }
    }
}

// =============================================================================
// Fallbacks
// =============================================================================

async fn not_found() -> Response {
    Pretty(StatusCode::NOT_FOUND, ErrorBody::new("not found")).into_response()
}

async fn method_not_allowed() -> Response {
    Pretty(StatusCode::METHOD_NOT_ALLOWED, ErrorBody::new("method not allowed")).into_response()
}

async fn handle_timeout_error(err: tower::BoxError) -> Pretty<ErrorBody> {
    tracing::warn!("Request failed in middleware: {}", err);
    Pretty(StatusCode::SERVICE_UNAVAILABLE, ErrorBody::new("request timed out"))
}
