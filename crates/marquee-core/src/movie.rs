//! # Movie Records
//!
//! The movie entity, its identifier newtype, and the two validated input
//! shapes: [`MovieDraft`] (a complete record minus the id, produced by full
//! validation) and [`MoviePatch`] (a set of field overrides, produced by
//! partial validation).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::genre::Genre;

/// A unique identifier for a movie in the catalog.
///
/// Server-generated at creation time and immutable afterwards. Renders as
/// a hyphenated lowercase UUID on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct MovieId(Uuid);

impl MovieId {
    /// Create a new random movie identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a movie identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Compare against a raw identifier string.
    ///
    /// Path parameters arrive as strings and are matched against the
    /// rendered form, so a string that is not a rendered movie id matches
    /// nothing — it is never a parse error.
    pub fn matches(&self, raw: &str) -> bool {
        self.to_string() == raw
    }
}

impl Default for MovieId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A movie record in the catalog.
///
/// Wire shape:
/// `{id, title, year, director, duration, poster, genre}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: f64,
    pub poster: String,
    pub genre: Vec<Genre>,
}

/// A fully validated movie payload, not yet assigned an identity.
///
/// Produced only by [`crate::schema::validate_full`].
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDraft {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: f64,
    pub poster: String,
    pub genre: Vec<Genre>,
}

impl MovieDraft {
    /// Attach an identity, completing the record.
    pub fn into_movie(self, id: MovieId) -> Movie {
        Movie {
            id,
            title: self.title,
            year: self.year,
            director: self.director,
            duration: self.duration,
            poster: self.poster,
            genre: self.genre,
        }
    }
}

/// A validated set of field overrides for an existing movie.
///
/// Produced only by [`crate::schema::validate_partial`]. Absent fields mean
/// "leave unchanged"; the identity is not patchable at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub duration: Option<f64>,
    pub poster: Option<String>,
    pub genre: Option<Vec<Genre>>,
}

impl MoviePatch {
    /// Whether the patch changes anything.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.year.is_none()
            && self.director.is_none()
            && self.duration.is_none()
            && self.poster.is_none()
            && self.genre.is_none()
    }

    /// Overwrite the patched fields on an existing record.
    ///
    /// Untouched fields, including the id, are preserved.
    pub fn apply(self, movie: &mut Movie) {
        if let Some(title) = self.title {
            movie.title = title;
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(director) = self.director {
            movie.director = director;
        }
        if let Some(duration) = self.duration {
            movie.duration = duration;
        }
        if let Some(poster) = self.poster {
            movie.poster = poster;
        }
        if let Some(genre) = self.genre {
            movie.genre = genre;
        }
    }

    /// Convert into a complete draft, if every field is present.
    ///
    /// Full validation reports a `required` error for each absent field, so
    /// by the time it calls this, absence has already been ruled out.
    pub(crate) fn into_draft(self) -> Option<MovieDraft> {
        Some(MovieDraft {
            title: self.title?,
            year: self.year?,
            director: self.director?,
            duration: self.duration?,
            poster: self.poster?,
            genre: self.genre?,
        })
    }
}
