//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! This is the single place catalog outcomes become transport-level
//! responses.
//!
//! Two bodies are fixed by the API contract and emitted verbatim:
//! 404 is `{"message": "Movie not found!"}` and 422 is
//! `{"errors": [{"field", "reason"}, ...]}`. Other failures use a generic
//! `{"error": {"code", "message"}}` envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use marquee_catalog::UpdateError;
use marquee_core::ValidationErrors;

/// The 404 body fixed by the API contract.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NotFoundBody {
    pub message: String,
}

/// Application-level error type that maps to HTTP responses.
#[derive(Error, Debug)]
pub enum AppError {
    /// No movie with the requested id (404).
    #[error("movie not found")]
    NotFound,

    /// The payload violated the movie schema (422).
    #[error("{0}")]
    Validation(ValidationErrors),

    /// The request body could not be parsed as JSON at all (400).
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::NotFound => {
                let body = NotFoundBody {
                    message: "Movie not found!".to_string(),
                };
                (status, Json(body)).into_response()
            }
            Self::Validation(errors) => (status, Json(errors)).into_response(),
            Self::BadRequest(message) => {
                let body = serde_json::json!({
                    "error": {
                        "code": status.as_u16(),
                        "message": message,
                    }
                });
                (status, Json(body)).into_response()
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<UpdateError> for AppError {
    fn from(err: UpdateError) -> Self {
        match err {
            UpdateError::NotFound => Self::NotFound,
            UpdateError::Validation(errors) => Self::Validation(errors),
        }
    }
}
