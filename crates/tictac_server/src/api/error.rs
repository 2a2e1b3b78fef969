//! HTTP error mapping.

use crate::error::StoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// JSON body of every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error kind, e.g. `SessionNotFound`.
    pub error: String,
    /// Human-readable detail.
    pub message: String,
    /// HTTP status repeated in the body.
    pub status_code: u16,
}

/// A request that could not be served.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{kind}: {message}")]
pub struct ApiError {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Malformed request body.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            kind: "ValidationError",
            message: message.into(),
        }
    }

    /// HTTP status of this error.
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::SessionNotFound(_) => Self {
                status: StatusCode::NOT_FOUND,
                kind: "SessionNotFound",
                message: err.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(status = %self.status, kind = self.kind, message = %self.message, "Request failed");
        let body = ErrorBody {
            error: self.kind.to_string(),
            message: self.message,
            status_code: self.status.as_u16(),
        };
        (self.status, Json(body)).into_response()
    }
}
