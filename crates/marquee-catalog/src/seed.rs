//! # Seed Dataset
//!
//! The static dataset the collection starts from. Embedded at compile time
//! and parsed once per catalog construction; parse failures become a
//! [`SeedError`] so a broken seed stops the process at startup instead of
//! at first request.

use marquee_core::Movie;

use crate::error::SeedError;

const SEED_JSON: &str = include_str!("../data/seed.json");

/// Parse the embedded seed dataset.
pub(crate) fn load() -> Result<Vec<Movie>, SeedError> {
    let movies: Vec<Movie> = serde_json::from_str(SEED_JSON)?;
    Ok(movies)
}
