//! # Body Extraction
//!
//! Maps Axum's JSON rejection into the structured [`AppError`] so handlers
//! keep a plain `Result` shape.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;

use crate::error::AppError;

/// Extract an untyped JSON body, mapping deserialization errors to
/// [`AppError::BadRequest`].
///
/// The payload stays a raw [`Value`] on purpose: shape checking belongs to
/// the schema validator, so handlers pass the value through to the catalog
/// untouched. Only syntactically broken JSON is rejected here (400); a
/// well-formed body of the wrong shape still reaches the validator (422).
pub fn extract_json(result: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}
