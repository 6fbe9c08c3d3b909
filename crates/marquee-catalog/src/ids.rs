//! # Identity Generation
//!
//! Movie identifiers are assigned by the catalog, never by clients. The
//! generator is an injected capability so production code gets random
//! UUIDs while tests substitute a deterministic sequence.

use std::sync::atomic::{AtomicU32, Ordering};

use marquee_core::MovieId;
use uuid::Uuid;

/// A source of fresh movie identifiers.
pub trait IdGenerator: Send + Sync {
    /// Produce an identifier not yet present in the collection.
    fn generate(&self) -> MovieId;
}

/// The production generator: random v4 UUIDs, practically collision-free.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn generate(&self) -> MovieId {
        MovieId::new()
    }
}

/// A deterministic generator for tests: counts up from zero, rendering
/// each counter value into the UUID's low bytes.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU32,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> MovieId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        MovieId::from_uuid(Uuid::from_u128(n as u128))
    }
}
