//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps document parse failures and schema lint failures to HTTP status
//! codes with JSON bodies carrying an error code, message, and details.
//! Never exposes internal error details in responses.
//!
//! A document that parses but fails validation is not an error: it is a
//! 200 response carrying the validation report.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use jsv_core::DocumentError;
use jsv_schema::{SchemaError, SchemaIssues};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured JSON error response body.
///
/// The `details` field carries the lint issues for 422 responses and is
/// omitted otherwise.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`BAD_REQUEST`, `VALIDATION_ERROR`, ...).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details, present only for schema lint failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body, schema text or document text could not be parsed (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The schema parsed but has malformed keyword values (422).
    #[error("invalid schema: {} malformed keyword(s)", .0.len())]
    InvalidSchema(SchemaIssues),

    /// A handler panicked (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            Self::InvalidSchema(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    /// Map a document text parse failure, naming which input failed.
    pub fn unparseable(input: &str, err: DocumentError) -> Self {
        Self::BadRequest(format!("{input} is not valid JSON: {err}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Never expose internal error messages to clients.
        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            other => other.to_string(),
        };

        if matches!(&self, Self::Internal(_)) {
            tracing::error!(error = %self, "internal server error");
        }

        let details = match &self {
            Self::InvalidSchema(issues) => serde_json::to_value(issues).ok(),
            _ => None,
        };

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Response for a handler that panicked, installed with
/// `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "handler panicked".to_string());
    AppError::Internal(detail).into_response()
}

impl From<SchemaError> for AppError {
    fn from(err: SchemaError) -> Self {
        match err {
            SchemaError::Malformed { issues } => Self::InvalidSchema(issues),
        }
    }
}
