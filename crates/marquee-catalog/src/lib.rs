//! # marquee-catalog — Movie Resource Manager
//!
//! Owns the in-memory movie collection and its mutation operations:
//! filtered listing, lookup by id, validated creation with identity
//! assignment, and validated partial update. All input shape-checking is
//! delegated to `marquee_core::schema`; this crate adds identity, ordering
//! and locking.
//!
//! ## Concurrency
//!
//! The collection lives behind a `parking_lot::RwLock`: reads run
//! concurrently, mutations are serialized, and the lock is never held
//! across an `.await` point — every operation here is synchronous, bounded
//! and in-memory.
//!
//! ## Crate Policy
//!
//! - The collection `Vec` is never exposed mutably; callers get clones.
//! - Identity generation is injected via [`IdGenerator`] so tests can pin
//!   deterministic ids.
//! - No `unwrap()`/`expect()` outside tests — seed problems surface as
//!   [`SeedError`] at construction time.

pub mod catalog;
pub mod error;
pub mod ids;
mod seed;

pub use catalog::Catalog;
pub use error::{SeedError, UpdateError};
pub use ids::{IdGenerator, RandomIds, SequentialIds};
