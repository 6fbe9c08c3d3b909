//! # Movie Schema Validation
//!
//! Validates untyped JSON payloads against the movie schema. The schema is
//! data, not code: [`FIELDS`] is a constant table pairing each recognized
//! field with its [`FieldRule`], and one checker interprets the table for
//! both validation modes. Full mode requires every field; partial mode
//! checks only the fields present. Unrecognized keys are ignored in both
//! modes.
//!
//! Violations are collected across all fields — a payload with a missing
//! title and an out-of-range year reports both.

use serde_json::{Map, Value};

use crate::error::{FieldError, FieldReason, ValidationErrors};
use crate::genre::Genre;
use crate::movie::{MovieDraft, MoviePatch};

/// A per-field constraint.
#[derive(Debug, Clone, Copy)]
pub enum FieldRule {
    /// A string; `non_empty` additionally rejects `""`.
    Text { non_empty: bool },
    /// An integer within an inclusive range. Fractional numbers are a type
    /// violation, not a range violation.
    IntRange { min: i64, max: i64 },
    /// Any number within an inclusive range.
    NumRange { min: f64, max: f64 },
    /// A string that parses as a URL.
    Url,
    /// An array of tags from the [`Genre`] vocabulary. May be empty or
    /// contain repeats.
    Genres,
}

/// The movie schema: every recognized field and its constraint.
///
/// The `duration` bound of [0, 10] is inherited from the source dataset's
/// schema. It is implausible for a runtime in minutes, but the contract is
/// preserved literally rather than silently widened.
pub const FIELDS: [(&str, FieldRule); 6] = [
    ("title", FieldRule::Text { non_empty: true }),
    ("year", FieldRule::IntRange { min: 1900, max: 2025 }),
    ("director", FieldRule::Text { non_empty: false }),
    ("duration", FieldRule::NumRange { min: 0.0, max: 10.0 }),
    ("poster", FieldRule::Url),
    ("genre", FieldRule::Genres),
];

/// A checked value, shaped by the rule that produced it.
enum FieldValue {
    Text(String),
    Int(i32),
    Num(f64),
    Genres(Vec<Genre>),
}

impl FieldRule {
    /// Check one value against this rule, yielding the normalized value or
    /// the reason it was rejected.
    fn check(&self, value: &Value) -> Result<FieldValue, FieldReason> {
        match self {
            FieldRule::Text { non_empty } => {
                let s = value.as_str().ok_or(FieldReason::InvalidType)?;
                if *non_empty && s.is_empty() {
                    return Err(FieldReason::InvalidFormat);
                }
                Ok(FieldValue::Text(s.to_string()))
            }
            FieldRule::IntRange { min, max } => {
                let n = value.as_i64().ok_or(FieldReason::InvalidType)?;
                if n < *min || n > *max {
                    return Err(FieldReason::OutOfRange);
                }
                Ok(FieldValue::Int(n as i32))
            }
            FieldRule::NumRange { min, max } => {
                let n = value.as_f64().ok_or(FieldReason::InvalidType)?;
                if n < *min || n > *max {
                    return Err(FieldReason::OutOfRange);
                }
                Ok(FieldValue::Num(n))
            }
            FieldRule::Url => {
                let s = value.as_str().ok_or(FieldReason::InvalidType)?;
                url::Url::parse(s).map_err(|_| FieldReason::InvalidFormat)?;
                Ok(FieldValue::Text(s.to_string()))
            }
            FieldRule::Genres => {
                let items = value.as_array().ok_or(FieldReason::InvalidType)?;
                let mut genres = Vec::with_capacity(items.len());
                for item in items {
                    let name = item.as_str().ok_or(FieldReason::InvalidType)?;
                    let genre = Genre::from_wire(name).ok_or(FieldReason::InvalidEnumValue)?;
                    genres.push(genre);
                }
                Ok(FieldValue::Genres(genres))
            }
        }
    }
}

/// Validate a complete movie payload.
///
/// Every schema field must be present and satisfy its rule. On failure the
/// returned [`ValidationErrors`] enumerates every violated field. A
/// non-object payload fails with the single generic `$`/`invalid_type`
/// error.
pub fn validate_full(input: &Value) -> Result<MovieDraft, ValidationErrors> {
    let Some(obj) = input.as_object() else {
        return Err(ValidationErrors::malformed_input());
    };
    let (patch, errors) = collect(obj, true);
    match (errors.is_empty(), patch.into_draft()) {
        (true, Some(draft)) => Ok(draft),
        _ => Err(ValidationErrors::new(errors)),
    }
}

/// Validate a partial movie payload.
///
/// Same per-field rules as [`validate_full`], but nothing is required:
/// only fields present in the payload are checked and returned. An empty
/// object is a valid patch that changes nothing.
pub fn validate_partial(input: &Value) -> Result<MoviePatch, ValidationErrors> {
    let Some(obj) = input.as_object() else {
        return Err(ValidationErrors::malformed_input());
    };
    let (patch, errors) = collect(obj, false);
    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(ValidationErrors::new(errors))
    }
}

/// Walk the schema table over a payload, accumulating normalized values and
/// violations. `required` is the only difference between the two modes.
fn collect(obj: &Map<String, Value>, required: bool) -> (MoviePatch, Vec<FieldError>) {
    let mut patch = MoviePatch::default();
    let mut errors = Vec::new();

    for (field, rule) in FIELDS {
        let Some(value) = obj.get(field) else {
            if required {
                errors.push(FieldError::new(field, FieldReason::Required));
            }
            continue;
        };
        match rule.check(value) {
            Ok(v) => set(&mut patch, field, v),
            Err(reason) => errors.push(FieldError::new(field, reason)),
        }
    }

    (patch, errors)
}

/// Store a checked value in the patch slot named by the schema table.
fn set(patch: &mut MoviePatch, field: &str, value: FieldValue) {
    match (field, value) {
        ("title", FieldValue::Text(s)) => patch.title = Some(s),
        ("director", FieldValue::Text(s)) => patch.director = Some(s),
        ("poster", FieldValue::Text(s)) => patch.poster = Some(s),
        ("year", FieldValue::Int(n)) => patch.year = Some(n),
        ("duration", FieldValue::Num(n)) => patch.duration = Some(n),
        ("genre", FieldValue::Genres(g)) => patch.genre = Some(g),
        // The table pairs each field with exactly one rule, and each rule
        // yields exactly one value shape.
        _ => {}
    }
}
