//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Router-level failures (unknown route, wrong method, request deadline)
//! use the same `{"error", "message"}` shape as handler errors.

use std::time::Duration;

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::id::InvalidId;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Body or path could not be decoded (400)
    BadRequest { message: String },

    /// Body refused before decoding, keeps axum's status (e.g. 413)
    Rejected { status: StatusCode, message: String },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: i32 },

    /// No route matches the path (404)
    NoRoute { method: Method, path: String },

    /// Path exists but not for this method (405)
    MethodNotAllowed { method: Method, path: String },

    /// Request exceeded its deadline (408)
    Timeout { after: Duration },

    /// Database error (500, logged)
    Database(DbError),

    /// Middleware failure other than a timeout (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Rejected { status, .. } => *status,
            Self::NotFound { .. } | Self::NoRoute { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Timeout { .. } => StatusCode::REQUEST_TIMEOUT,
            Self::Database(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::BadRequest { message } => json!({
                "error": "bad_request",
                "message": message
            }),
            Self::Rejected { status, message } => {
                let kind = if *status == StatusCode::PAYLOAD_TOO_LARGE {
                    "payload_too_large"
                } else {
                    "bad_request"
                };
                json!({
                    "error": kind,
                    "message": message
                })
            }
            Self::NotFound { resource, id } => json!({
                "error": "not_found",
                "message": format!("{} '{}' not found", resource, id)
            }),
            Self::NoRoute { method, path } => json!({
                "error": "not_found",
                "message": format!("no route for {} {}", method, path)
            }),
            Self::MethodNotAllowed { method, path } => json!({
                "error": "method_not_allowed",
                "message": format!("{} is not allowed on {}", method, path)
            }),
            Self::Timeout { after } => {
                tracing::warn!("Request timed out after {:?}", after);
                json!({
                    "error": "timeout",
                    "message": format!("request timed out after {:?}", after)
                })
            }
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                json!({
                    "error": "internal_error",
                    "message": e.to_string()
                })
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                json!({
                    "error": "internal_error",
                    "message": message
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<InvalidId> for ApiError {
    fn from(e: InvalidId) -> Self {
        Self::bad_request(e.to_string())
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}
