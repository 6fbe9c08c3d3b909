//! # Catalog Error Types
//!
//! Failures from the resource manager. Update failures distinguish
//! resource absence from payload rejection; seed failures abort startup
//! instead of panicking.

use marquee_core::ValidationErrors;
use thiserror::Error;

/// Why a partial update failed.
///
/// Existence is checked before the payload is validated, so a request
/// against a missing id reports [`UpdateError::NotFound`] even when the
/// payload is also invalid.
#[derive(Error, Debug)]
pub enum UpdateError {
    /// No movie with the requested id.
    #[error("no movie with the requested id")]
    NotFound,

    /// The patch payload violated the schema.
    #[error("{0}")]
    Validation(ValidationErrors),
}

/// Failures while loading the embedded seed dataset.
#[derive(Error, Debug)]
pub enum SeedError {
    /// The embedded seed document is not valid movie JSON.
    #[error("embedded seed dataset is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two seed records share an id.
    #[error("duplicate id in seed dataset: {0}")]
    DuplicateId(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::{FieldError, FieldReason};

    #[test]
    fn update_error_displays() {
        assert!(UpdateError::NotFound.to_string().contains("no movie"));
        let errs = ValidationErrors::new(vec![FieldError::new("year", FieldReason::OutOfRange)]);
        let msg = UpdateError::Validation(errs).to_string();
        assert!(msg.contains("year"));
        assert!(msg.contains("out_of_range"));
    }

    #[test]
    fn seed_duplicate_id_names_the_id() {
        let err = SeedError::DuplicateId("abc".to_string());
        assert!(err.to_string().contains("abc"));
    }
}
