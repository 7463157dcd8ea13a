//! Application error type and its HTTP mapping.
//!
//! Every fallible step of the pipeline returns [`AppError`], so a handler can
//! propagate with `?` and axum turns the failure into a status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Chart error: {0}")]
    Chart(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Not found")]
    NotFound,
    #[error("Upstream error: {0}")]
    Upstream(String),
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            AppError::Http(e) => (StatusCode::BAD_GATEWAY, e.to_string()).into_response(),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg).into_response(),
            other => {
                error!(error = %other, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(value: serde_yaml::Error) -> Self {
        AppError::Config(value.to_string())
    }
}
