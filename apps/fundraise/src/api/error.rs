//! # API Errors
//!
//! Failures a handler reports to the client. Each becomes a JSON body
//! `{ "error", "code" }` with the matching status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// A request that cannot be answered.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Unknown user, email or reward tier.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed input the extractors let through.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// JSON body of an error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        };
        tracing::debug!(%status, "{self}");

        let body = ErrorResponse {
            error: self.to_string(),
            code,
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
