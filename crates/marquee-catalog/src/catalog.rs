//! # The Movie Catalog
//!
//! Thread-safe, cloneable owner of the in-memory movie collection. The
//! collection is insertion-ordered; listing iterates in that order and
//! `create` appends. All reads hand out clones, so nothing a caller does
//! with a returned movie can corrupt the collection.

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

use marquee_core::{schema, Movie, ValidationErrors};

use crate::error::{SeedError, UpdateError};
use crate::ids::IdGenerator;
use crate::seed;

/// The movie resource manager.
///
/// Cloning is cheap and shares the underlying collection. Reads
/// ([`list`](Catalog::list), [`get`](Catalog::get)) take the read lock and
/// may run concurrently; mutations ([`create`](Catalog::create),
/// [`update_partial`](Catalog::update_partial)) take the write lock and
/// are serialized. `parking_lot::RwLock` is non-poisonable, so a panicking
/// writer does not permanently wedge the store.
#[derive(Clone)]
pub struct Catalog {
    movies: Arc<RwLock<Vec<Movie>>>,
    ids: Arc<dyn IdGenerator>,
}

impl Catalog {
    /// Create a catalog initialized from the embedded seed dataset.
    pub fn seeded(ids: impl IdGenerator + 'static) -> Result<Self, SeedError> {
        let movies = seed::load()?;

        let mut seen = std::collections::HashSet::new();
        for movie in &movies {
            if !seen.insert(movie.id) {
                return Err(SeedError::DuplicateId(movie.id.to_string()));
            }
        }

        Ok(Self {
            movies: Arc::new(RwLock::new(movies)),
            ids: Arc::new(ids),
        })
    }

    /// Create an empty catalog. Used by tests that want full control over
    /// the collection's contents.
    pub fn empty(ids: impl IdGenerator + 'static) -> Self {
        Self {
            movies: Arc::new(RwLock::new(Vec::new())),
            ids: Arc::new(ids),
        }
    }

    /// List movies in collection order, optionally filtered by genre.
    ///
    /// The filter matches case-insensitively against any of a movie's
    /// genre tags; a filter that matches nothing yields an empty vector,
    /// not an error.
    pub fn list(&self, genre: Option<&str>) -> Vec<Movie> {
        let movies = self.movies.read();
        match genre {
            Some(query) => movies
                .iter()
                .filter(|m| m.genre.iter().any(|tag| tag.matches(query)))
                .cloned()
                .collect(),
            None => movies.clone(),
        }
    }

    /// Look up a movie by its rendered id.
    ///
    /// Identifiers arrive from the HTTP layer as raw strings; anything
    /// that is not a rendered movie id simply matches nothing.
    pub fn get(&self, id: &str) -> Option<Movie> {
        self.movies
            .read()
            .iter()
            .find(|m| m.id.matches(id))
            .cloned()
    }

    /// Validate a payload and append a new movie.
    ///
    /// The movie is constructed — identity included — before it is pushed,
    /// so no record is ever visible in the collection without an id.
    pub fn create(&self, input: &Value) -> Result<Movie, ValidationErrors> {
        let draft = schema::validate_full(input)?;
        let movie = draft.into_movie(self.ids.generate());
        self.movies.write().push(movie.clone());
        Ok(movie)
    }

    /// Validate a patch payload and merge it over an existing movie.
    ///
    /// Existence is checked before the payload: a request against a
    /// missing id is [`UpdateError::NotFound`] even when the payload is
    /// itself invalid. The lookup-validate-merge sequence runs under one
    /// write lock, so no concurrent mutation can slip between the
    /// existence check and the merge.
    pub fn update_partial(&self, id: &str, input: &Value) -> Result<Movie, UpdateError> {
        let mut movies = self.movies.write();

        let Some(index) = movies.iter().position(|m| m.id.matches(id)) else {
            return Err(UpdateError::NotFound);
        };

        let patch = schema::validate_partial(input).map_err(UpdateError::Validation)?;
        patch.apply(&mut movies[index]);
        Ok(movies[index].clone())
    }

    /// Number of movies in the collection.
    pub fn len(&self) -> usize {
        self.movies.read().len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
