use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Failures reading the winners data file
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("Data file not found")]
    DataUnavailable(String),

    #[error("Invalid JSON data")]
    DataCorrupt(String),
}

impl DataError {
    /// Underlying io/serde detail, kept out of the response body
    pub fn detail(&self) -> &str {
        match self {
            DataError::DataUnavailable(detail) | DataError::DataCorrupt(detail) => detail,
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Data(#[from] DataError),
}

/// JSON body of every error response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "404 Not Found")]
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(message) => {
                tracing::debug!("Lookup missed: {}", message);
                StatusCode::NOT_FOUND
            }
            ApiError::Data(err) => {
                tracing::error!("Winners data unavailable: {} ({})", err, err.detail());
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Startup configuration problems
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("HOST is not in the correct format: {0}")]
    InvalidHost(String),

    #[error("PORT is not the correct format: {0}")]
    InvalidPort(String),
}
