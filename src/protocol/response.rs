//! Response definitions
//!
//! Maps results onto HTTP status codes and JSON bodies.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use super::codec::encode_json;
use crate::error::CatalogError;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Sent when a response value itself cannot be encoded
const ENCODE_FAILURE_BODY: &str = "{\n  \"message\": \"internal server error\"\n}";

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// HTTP status for an error
pub fn status_for(err: &CatalogError) -> StatusCode {
    match err {
        CatalogError::EmptyId | CatalogError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
        CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
        CatalogError::AlreadyExists(_) => StatusCode::CONFLICT,
        CatalogError::Serialization(_) | CatalogError::Io(_) | CatalogError::Config(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Client-facing message for an error
///
/// These strings are part of the HTTP contract; `Display` carries the
/// detailed text for logs.
pub fn message_for(err: &CatalogError) -> &'static str {
    match err {
        CatalogError::EmptyId => "id is required",
        CatalogError::MalformedPayload(_) => "invalid request body",
        CatalogError::NotFound(_) => "song not found",
        CatalogError::AlreadyExists(_) => "song with this id already exists",
        CatalogError::Serialization(_) | CatalogError::Io(_) | CatalogError::Config(_) => {
            "internal server error"
        }
    }
}

/// A status code plus a value rendered as indented JSON
#[derive(Debug, Clone)]
pub struct Pretty<T>(pub StatusCode, pub T);

impl<T: Serialize> IntoResponse for Pretty<T> {
    fn into_response(self) -> Response {
        let Pretty(status, value) = self;
        match encode_json(&value) {
            Ok(body) => (
                status,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static(JSON_CONTENT_TYPE),
                )],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!("Failed to encode response body: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
                    ENCODE_FAILURE_BODY,
                )
                    .into_response()
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        Pretty(status_for(&self), ErrorBody::new(message_for(&self))).into_response()
    }
}
