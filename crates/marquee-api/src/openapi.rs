//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the movie catalog API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Marquee Movie Catalog API",
        version = "0.1.0",
        description = "CRUD operations over an in-memory, seed-initialized movie collection with schema-validated mutation.",
        license(name = "MIT")
    ),
    paths(
        crate::routes::movies::list_movies,
        crate::routes::movies::get_movie,
        crate::routes::movies::create_movie,
        crate::routes::movies::update_movie,
    ),
    components(schemas(
        marquee_core::Movie,
        marquee_core::MovieId,
        marquee_core::Genre,
        marquee_core::ValidationErrors,
        marquee_core::FieldError,
        marquee_core::FieldReason,
        crate::error::NotFoundBody,
    )),
    tags(
        (name = "movies", description = "Movie catalog CRUD"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
