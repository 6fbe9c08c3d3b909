//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor. Holds the one store this service owns: the movie
//! catalog.

use marquee_catalog::{Catalog, IdGenerator, RandomIds, SeedError};

/// Shared application state.
///
/// Cloning shares the underlying catalog.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
}

impl AppState {
    /// Production state: seed-initialized catalog with random ids.
    pub fn new() -> Result<Self, SeedError> {
        Self::with_ids(RandomIds)
    }

    /// Seed-initialized catalog with an injected id generator.
    pub fn with_ids(ids: impl IdGenerator + 'static) -> Result<Self, SeedError> {
        Ok(Self {
            catalog: Catalog::seeded(ids)?,
        })
    }

    /// State around an existing catalog. Used by tests that start empty.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_catalog::SequentialIds;
    use serde_json::json;

    #[test]
    fn new_state_is_seeded() {
        let state = AppState::new().unwrap();
        assert!(!state.catalog.is_empty());
    }

    #[test]
    fn clones_share_the_catalog() {
        let state = AppState::new().unwrap();
        let clone = state.clone();
        assert_eq!(state.catalog.len(), clone.catalog.len());
    }

    #[test]
    fn with_ids_pins_created_identifiers() {
        let state = AppState::with_ids(SequentialIds::new()).unwrap();
        let movie = state
            .catalog
            .create(&json!({
                "title": "Ran",
                "year": 1985,
                "director": "Akira Kurosawa",
                "duration": 2.7,
                "poster": "https://example.com/ran.jpg",
                "genre": ["Drama"]
            }))
            .unwrap();
        assert_eq!(
            movie.id.to_string(),
            "00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn with_catalog_wraps_an_existing_store() {
        let state = AppState::with_catalog(Catalog::empty(RandomIds));
        assert!(state.catalog.is_empty());
    }
}
