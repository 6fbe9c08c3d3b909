//! # HTTP Contract Tests
//!
//! Exercises the full routing surface against a seeded application:
//! success shapes, the fixed 404 body, collected 422 field errors, 400 on
//! syntactically broken JSON, CORS allow-listing, and the ambient routes.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use marquee_api::AppState;

/// A known id from the embedded seed dataset (The Shawshank Redemption).
const SHAWSHANK_ID: &str = "dcdd0fad-a94c-4810-8acc-5f108d3b18c3";

/// Build a seeded test app.
fn test_app() -> axum::Router {
    let state = AppState::new().expect("embedded seed must load");
    marquee_api::app(state)
}

/// Read a response body as JSON.
async fn body_json(response: axum::http::Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// GET helper.
fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// POST helper with JSON body.
fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// PATCH helper with JSON body.
fn patch_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PATCH")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// A payload satisfying every schema rule.
fn valid_movie() -> Value {
    json!({
        "title": "Alien",
        "year": 1979,
        "director": "Ridley Scott",
        "duration": 2.0,
        "poster": "https://example.com/alien.jpg",
        "genre": ["Horror", "Sci-Fi"]
    })
}

// =========================================================================
// Ambient routes
// =========================================================================

#[tokio::test]
async fn root_returns_greeting() {
    let resp = test_app().oneshot(get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({"message": "Hello World!"}));
}

#[tokio::test]
async fn health_probes_respond() {
    let app = test_app();
    let live = app.clone().oneshot(get("/health/liveness")).await.unwrap();
    assert_eq!(live.status(), StatusCode::OK);
    let ready = app.oneshot(get("/health/readiness")).await.unwrap();
    assert_eq!(ready.status(), StatusCode::OK);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let resp = test_app().oneshot(get("/openapi.json")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let spec = body_json(resp).await;
    assert!(spec["paths"]["/movies"].is_object());
    assert!(spec["paths"]["/movies/{id}"].is_object());
}

// =========================================================================
// GET /movies
// =========================================================================

#[tokio::test]
async fn list_returns_the_seed_collection() {
    let resp = test_app().oneshot(get("/movies")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let movies = body_json(resp).await;
    let movies = movies.as_array().unwrap();
    assert_eq!(movies.len(), 6);
    assert_eq!(movies[0]["title"], "The Shawshank Redemption");
    // Every record carries the full wire shape.
    for movie in movies {
        for key in ["id", "title", "year", "director", "duration", "poster", "genre"] {
            assert!(movie.get(key).is_some(), "missing {key}");
        }
    }
}

#[tokio::test]
async fn list_genre_filter_is_case_insensitive() {
    let resp = test_app().oneshot(get("/movies?genre=action")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let movies = body_json(resp).await;
    let titles: Vec<&str> = movies
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert!(titles.contains(&"Gladiator"));
    assert!(titles.contains(&"The Dark Knight"));
    assert!(!titles.contains(&"The Shawshank Redemption"));
}

#[tokio::test]
async fn list_unmatched_genre_is_an_empty_array() {
    let resp = test_app().oneshot(get("/movies?genre=Comedy")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));
}

// =========================================================================
// GET /movies/:id
// =========================================================================

#[tokio::test]
async fn get_by_id_returns_the_movie() {
    let uri = format!("/movies/{SHAWSHANK_ID}");
    let resp = test_app().oneshot(get(&uri)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let movie = body_json(resp).await;
    assert_eq!(movie["id"], SHAWSHANK_ID);
    assert_eq!(movie["title"], "The Shawshank Redemption");
}

#[tokio::test]
async fn get_unknown_id_is_404_with_contract_body() {
    let resp = test_app()
        .oneshot(get("/movies/2b1f4c8e-0000-4000-8000-000000000000"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({"message": "Movie not found!"}));
}

#[tokio::test]
async fn get_malformed_id_is_an_ordinary_404() {
    let resp = test_app().oneshot(get("/movies/not-a-uuid")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({"message": "Movie not found!"}));
}

// =========================================================================
// POST /movies
// =========================================================================

#[tokio::test]
async fn create_returns_201_and_the_movie_round_trips() {
    let app = test_app();
    let payload = valid_movie();

    let resp = app.clone().oneshot(post_json("/movies", payload.clone())).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;

    // Non-id fields equal the payload; the id is server-assigned.
    let id = created["id"].as_str().unwrap().to_string();
    for key in ["title", "year", "director", "duration", "poster", "genre"] {
        assert_eq!(created[key], payload[key], "field {key}");
    }

    let resp = app.oneshot(get(&format!("/movies/{id}"))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, created);
}

#[tokio::test]
async fn create_out_of_range_year_is_422() {
    let mut payload = valid_movie();
    payload["year"] = json!(2030);
    let resp = test_app().oneshot(post_json("/movies", payload)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(resp).await,
        json!({"errors": [{"field": "year", "reason": "out_of_range"}]})
    );
}

#[tokio::test]
async fn create_empty_payload_collects_every_missing_field() {
    let resp = test_app().oneshot(post_json("/movies", json!({}))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(resp).await;
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 6);
    assert!(errors.iter().all(|e| e["reason"] == "required"));
}

#[tokio::test]
async fn create_non_object_payload_is_422_generic_type_error() {
    let resp = test_app().oneshot(post_json("/movies", json!(42))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(resp).await,
        json!({"errors": [{"field": "$", "reason": "invalid_type"}]})
    );
}

#[tokio::test]
async fn create_syntactically_broken_json_is_400() {
    let req = Request::builder()
        .method("POST")
        .uri("/movies")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let resp = test_app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn created_movie_appears_in_listing() {
    let app = test_app();
    app.clone()
        .oneshot(post_json("/movies", valid_movie()))
        .await
        .unwrap();
    let resp = app.oneshot(get("/movies")).await.unwrap();
    let movies = body_json(resp).await;
    let movies = movies.as_array().unwrap();
    assert_eq!(movies.len(), 7);
    assert_eq!(movies.last().unwrap()["title"], "Alien");
}

// =========================================================================
// PATCH /movies/:id
// =========================================================================

#[tokio::test]
async fn patch_overwrites_only_the_given_fields() {
    let app = test_app();
    let uri = format!("/movies/{SHAWSHANK_ID}");

    let resp = app
        .clone()
        .oneshot(patch_json(&uri, json!({"year": 2020})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = body_json(resp).await;
    assert_eq!(updated["year"], 2020);
    assert_eq!(updated["id"], SHAWSHANK_ID);
    assert_eq!(updated["title"], "The Shawshank Redemption");
    assert_eq!(updated["director"], "Frank Darabont");
}

#[tokio::test]
async fn patch_twice_is_idempotent() {
    let app = test_app();
    let uri = format!("/movies/{SHAWSHANK_ID}");
    let patch = json!({"year": 2020, "director": "Someone Else"});

    let once = body_json(
        app.clone().oneshot(patch_json(&uri, patch.clone())).await.unwrap(),
    )
    .await;
    let twice = body_json(app.oneshot(patch_json(&uri, patch)).await.unwrap()).await;
    assert_eq!(once, twice);
}

#[tokio::test]
async fn patch_missing_id_is_404_even_with_invalid_payload() {
    // Existence is checked before the payload is validated.
    let resp = test_app()
        .oneshot(patch_json(
            "/movies/2b1f4c8e-0000-4000-8000-000000000000",
            json!({"year": 9999}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({"message": "Movie not found!"}));
}

#[tokio::test]
async fn patch_invalid_payload_is_422() {
    let uri = format!("/movies/{SHAWSHANK_ID}");
    let resp = test_app()
        .oneshot(patch_json(&uri, json!({"duration": 50})))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(resp).await,
        json!({"errors": [{"field": "duration", "reason": "out_of_range"}]})
    );
}

#[tokio::test]
async fn patch_empty_object_returns_the_movie_unchanged() {
    let app = test_app();
    let uri = format!("/movies/{SHAWSHANK_ID}");
    let before = body_json(app.clone().oneshot(get(&uri)).await.unwrap()).await;
    let resp = app.oneshot(patch_json(&uri, json!({}))).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, before);
}

#[tokio::test]
async fn patch_ignores_unrecognized_keys_and_the_id() {
    let app = test_app();
    let uri = format!("/movies/{SHAWSHANK_ID}");
    let before = body_json(app.clone().oneshot(get(&uri)).await.unwrap()).await;
    let resp = app
        .oneshot(patch_json(
            &uri,
            json!({"rating": 9.3, "id": "11111111-1111-4111-8111-111111111111"}),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, before);
}

// =========================================================================
// CORS
// =========================================================================

#[tokio::test]
async fn preflight_from_allowed_origin_gets_cors_headers() {
    let req = Request::builder()
        .method("OPTIONS")
        .uri("/movies")
        .header("origin", "http://127.0.0.1:5500")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();
    let resp = test_app().oneshot(req).await.unwrap();
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://127.0.0.1:5500")
    );
}

#[tokio::test]
async fn preflight_from_unlisted_origin_gets_no_cors_headers() {
    let req = Request::builder()
        .method("OPTIONS")
        .uri("/movies")
        .header("origin", "https://evil.example")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();
    let resp = test_app().oneshot(req).await.unwrap();
    assert!(resp.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn requests_without_an_origin_are_served_normally() {
    let resp = test_app().oneshot(get("/movies")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
