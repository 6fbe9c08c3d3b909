//! # Genre Vocabulary
//!
//! The closed set of genre tags a movie may carry. The wire names are part
//! of the API contract: every tag serializes as its capitalized name, with
//! `Sci-Fi` keeping its hyphen.
//!
//! Validation matches wire names exactly; listing filters match them
//! case-insensitively.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A genre tag from the catalog's fixed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Mystery,
    Thriller,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Crime,
}

impl Genre {
    /// Every genre in the vocabulary, in declaration order.
    pub const ALL: [Genre; 10] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Comedy,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Mystery,
        Genre::Thriller,
        Genre::SciFi,
        Genre::Crime,
    ];

    /// The wire name of this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Mystery => "Mystery",
            Genre::Thriller => "Thriller",
            Genre::SciFi => "Sci-Fi",
            Genre::Crime => "Crime",
        }
    }

    /// Look up a tag by its exact wire name.
    ///
    /// Used by the validator: `"Drama"` is a genre, `"drama"` is not.
    pub fn from_wire(name: &str) -> Option<Genre> {
        Self::ALL.iter().copied().find(|g| g.as_str() == name)
    }

    /// Case-insensitive comparison against a query string.
    ///
    /// Used by the listing filter: `?genre=sci-fi` matches [`Genre::SciFi`].
    pub fn matches(&self, query: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(query)
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
