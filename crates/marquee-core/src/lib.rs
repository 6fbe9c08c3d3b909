//! # marquee-core — Movie Catalog Domain Types
//!
//! Foundational types for the Marquee movie catalog service: the movie
//! record and its identifier newtype, the closed genre vocabulary, the
//! schema validator, and the structured validation error hierarchy.
//!
//! ## Validation Model
//!
//! The movie schema is a declarative constraint table ([`schema::FIELDS`]):
//! one `(field, rule)` pair per recognized field, interpreted by a single
//! checker. Full validation ([`schema::validate_full`]) requires every
//! field; partial validation ([`schema::validate_partial`]) checks only the
//! fields present. Both modes read the same table, so the rule sets cannot
//! drift.
//!
//! ## Crate Policy
//!
//! - Leaf crate: no HTTP, no locking, no I/O.
//! - Validation functions are pure — a `serde_json::Value` in, a typed
//!   draft/patch or collected field errors out.
//! - No `unwrap()`/`expect()` outside tests.

pub mod error;
pub mod genre;
pub mod movie;
pub mod schema;

pub use error::{FieldError, FieldReason, ValidationErrors};
pub use genre::Genre;
pub use movie::{Movie, MovieDraft, MovieId, MoviePatch};
