use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::error::FetchError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Keyword parameter is required")]
    MissingKeyword,

    #[error("Invalid query string: {0}")]
    InvalidQuery(#[from] QueryRejection),

    #[error("Failed to scrape Amazon")]
    Scrape(#[from] FetchError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::MissingKeyword | ApiError::InvalidQuery(_) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": self.to_string() }))).into_response()
            }
            ApiError::Scrape(source) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": self.to_string(),
                    "message": source.to_string(),
                })),
            )
                .into_response(),
        }
    }
}
