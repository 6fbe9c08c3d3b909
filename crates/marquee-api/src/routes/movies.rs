//! # Movie Routes
//!
//! CRUD surface over the movie catalog.
//!
//! ## Endpoints
//!
//! - `GET /movies` — list movies, optional `?genre=` filter
//! - `GET /movies/:id` — get one movie
//! - `POST /movies` — create a movie from a full payload
//! - `PATCH /movies/:id` — merge a partial payload over a movie

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;
use utoipa::IntoParams;

use marquee_core::Movie;

use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;

/// Query parameters accepted by the listing endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Keep only movies carrying this genre tag (case-insensitive).
    pub genre: Option<String>,
}

/// Build the movies router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/:id", get(get_movie).patch(update_movie))
}

/// GET /movies — List movies, optionally filtered by genre.
#[utoipa::path(
    get,
    path = "/movies",
    params(ListQuery),
    responses(
        (status = 200, description = "Movies in collection order", body = Vec<Movie>),
    ),
    tag = "movies"
)]
pub(crate) async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Movie>> {
    // An empty `genre=` value means no filter, not "match nothing".
    let genre = query.genre.as_deref().filter(|g| !g.is_empty());
    Json(state.catalog.list(genre))
}

/// GET /movies/:id — Get a single movie.
#[utoipa::path(
    get,
    path = "/movies/{id}",
    params(("id" = String, Path, description = "Movie id")),
    responses(
        (status = 200, description = "Movie found", body = Movie),
        (status = 404, description = "No movie with that id", body = crate::error::NotFoundBody),
    ),
    tag = "movies"
)]
pub(crate) async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, AppError> {
    state.catalog.get(&id).map(Json).ok_or(AppError::NotFound)
}

/// POST /movies — Create a movie from a full payload.
#[utoipa::path(
    post,
    path = "/movies",
    request_body = serde_json::Value,
    responses(
        (status = 201, description = "Movie created", body = Movie),
        (status = 422, description = "Payload violates the movie schema", body = marquee_core::ValidationErrors),
    ),
    tag = "movies"
)]
pub(crate) async fn create_movie(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Movie>), AppError> {
    let payload = extract_json(body)?;
    let movie = state.catalog.create(&payload)?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// PATCH /movies/:id — Merge a partial payload over an existing movie.
#[utoipa::path(
    patch,
    path = "/movies/{id}",
    params(("id" = String, Path, description = "Movie id")),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Movie updated", body = Movie),
        (status = 404, description = "No movie with that id", body = crate::error::NotFoundBody),
        (status = 422, description = "Payload violates the movie schema", body = marquee_core::ValidationErrors),
    ),
    tag = "movies"
)]
pub(crate) async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Movie>, AppError> {
    let payload = extract_json(body)?;
    let movie = state.catalog.update_partial(&id, &payload)?;
    Ok(Json(movie))
}
