//! # Validation Error Types
//!
//! Structured, per-field validation failures. Violations are collected
//! across all fields — validation never stops at the first offender — and
//! carry a machine-readable reason code alongside the field name.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldReason {
    /// The field is required but absent.
    Required,
    /// The value has the wrong JSON type (including non-integer years).
    InvalidType,
    /// A numeric value lies outside its inclusive range.
    OutOfRange,
    /// A textual value is malformed (empty title, unparseable URL).
    InvalidFormat,
    /// A genre tag outside the closed vocabulary.
    InvalidEnumValue,
}

impl FieldReason {
    /// The wire name of this reason code.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldReason::Required => "required",
            FieldReason::InvalidType => "invalid_type",
            FieldReason::OutOfRange => "out_of_range",
            FieldReason::InvalidFormat => "invalid_format",
            FieldReason::InvalidEnumValue => "invalid_enum_value",
        }
    }
}

impl std::fmt::Display for FieldReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single field violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// The offending field, or `"$"` for the payload itself.
    pub field: String,
    pub reason: FieldReason,
}

impl FieldError {
    pub fn new(field: impl Into<String>, reason: FieldReason) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// The collected violations from one validation pass.
///
/// Serializes as `{"errors": [{"field": ..., "reason": ...}, ...]}` — the
/// exact 422 response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, Error)]
#[error("validation failed: {}", render(.errors))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

/// Comma-join the violations for the `Display` form.
fn render(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationErrors {
    /// Wrap a non-empty set of field violations.
    pub fn new(errors: Vec<FieldError>) -> Self {
        debug_assert!(!errors.is_empty(), "a validation failure carries at least one error");
        Self { errors }
    }

    /// The failure for a payload that is not a JSON object at all.
    pub fn malformed_input() -> Self {
        Self {
            errors: vec![FieldError::new("$", FieldReason::InvalidType)],
        }
    }

    /// Whether `field` is among the violations.
    pub fn mentions(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}
