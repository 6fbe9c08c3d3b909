//! # marquee-api — Axum HTTP Service
//!
//! The HTTP layer over the movie catalog. Maps the routing surface onto
//! catalog operations and catalog outcomes onto transport status codes.
//!
//! ## API Surface
//!
//! | Route                  | Module             | Purpose                |
//! |------------------------|--------------------|------------------------|
//! | `GET /`                | [`app`]            | greeting               |
//! | `GET,POST /movies`     | [`routes::movies`] | list / create          |
//! | `GET,PATCH /movies/:id`| [`routes::movies`] | lookup / partial update|
//! | `GET /openapi.json`    | [`openapi`]        | OpenAPI document       |
//! | `GET /health/*`        | [`app`]            | liveness / readiness   |
//!
//! ## Middleware Stack (Tower)
//!
//! TraceLayer → CorsLayer → Handler
//!
//! ## Crate Policy
//!
//! - No business logic in handlers — they delegate to `marquee-catalog`.
//! - All errors map to structured HTTP responses via [`AppError`].

pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use state::AppState;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Browser origins allowed to call the API cross-origin.
///
/// Requests without an `Origin` header (curl, same-origin, server-to-server)
/// are unaffected by CORS and always pass.
const ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://127.0.0.1:5500",
    "https://movies.com",
];

/// Assemble the full application router with all routes and middleware.
///
/// Health probes are mounted beside the API routes and carry no CORS
/// restrictions of their own.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            ALLOWED_ORIGINS.map(HeaderValue::from_static),
        ))
        .allow_methods([Method::GET, Method::POST, Method::PATCH])
        .allow_headers([CONTENT_TYPE]);

    let api = Router::new()
        .route("/", get(root))
        .merge(routes::movies::router())
        .merge(openapi::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    Router::new().merge(health).merge(api)
}

/// GET / — Greeting.
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Hello World!" }))
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
