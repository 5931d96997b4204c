//! API error types with IntoResponse
//!
//! Every failure renders the same envelope:
//! `{"success": false, "error": <status code>, "message": <fixed text>}`.
//! Failure detail is logged, never returned to the client.

use std::fmt::Display;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::StoreError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request shape is unusable (400)
    BadRequest { reason: String },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Path exists but not for this method (405)
    MethodNotAllowed,

    /// Well-formed request whose operation failed (422)
    Unprocessable { reason: String },

    /// Internal error (500)
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(reason: impl Display) -> Self {
        Self::BadRequest {
            reason: reason.to_string(),
        }
    }

    pub fn not_found(resource: &'static str, id: impl Display) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn unprocessable(reason: impl Display) -> Self {
        Self::Unprocessable {
            reason: reason.to_string(),
        }
    }

    pub fn internal(message: impl Display) -> Self {
        Self::Internal {
            message: message.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Fixed client-facing message for each status.
    pub fn message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "bad request",
            Self::NotFound { .. } => "resource not found",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::Unprocessable { .. } => "unprocessable",
            Self::Internal { .. } => "internal error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::BadRequest { reason } => tracing::warn!("Bad request: {}", reason),
            Self::NotFound { resource, id } => tracing::debug!("Not found: {} '{}'", resource, id),
            Self::MethodNotAllowed => {}
            Self::Unprocessable { reason } => tracing::warn!("Unprocessable: {}", reason),
            Self::Internal { message } => tracing::error!("Internal error: {}", message),
        }

        let status = self.status();
        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message(),
        });

        (status, Json(body)).into_response()
    }
}

/// Store failures on endpoints without their own fold policy are 500s.
impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::internal(e)
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::unprocessable(e)
    }
}
