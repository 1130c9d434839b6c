//! # Validation API
//!
//! `POST /validate` accepts a schema and a document, both as JSON text, and
//! returns the validation report. The document text is kept as text so
//! reported lines refer to what the caller sent.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use jsv_core::Document;
use jsv_schema::{lint_schema, Scope, Validate, ValidationResult};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;

/// Request body for `POST /validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateRequest {
    /// Schema as JSON text.
    pub schema: String,
    /// Document as JSON text.
    pub json: String,
}

/// Build the validation router.
pub fn router() -> Router<AppState> {
    Router::new().route("/validate", post(validate_document))
}

/// Parse both inputs, lint the schema and validate the document.
///
/// A document that fails validation still yields 200; the report carries
/// `valid: false`.
async fn validate_document(
    State(state): State<AppState>,
    body: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidationResult>, AppError> {
    let request = extract_json(body)?;

    let schema = Document::parse(&request.schema)
        .map_err(|e| AppError::unparseable("schema", e))?
        .into_parts()
        .0;
    let document =
        Document::parse(&request.json).map_err(|e| AppError::unparseable("json", e))?;
    lint_schema(&schema)?;

    let scope = Scope::new(state.config.report_root.as_str(), "", document.source_map());
    let result = state.validator.validate(document.value(), &schema, &scope);

    state.metrics.record_outcome(result.is_valid());
    tracing::info!(
        valid = result.is_valid(),
        errors = result.errors().len(),
        "document validated"
    );
    Ok(Json(result))
}
