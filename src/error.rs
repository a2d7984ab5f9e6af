//! Typed errors and HTTP mapping.

use crate::response::error_body;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Message for a PATCH body that names none of the updatable fields.
pub const MISSING_FIELDS_MESSAGE: &str =
    "Request body must contain either 'title', 'site_description', 'site_url', or 'rating'";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// A violated field constraint. The display text is what the client sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Url is required")]
    UrlRequired,
    #[error("Url length must be 5 or greater")]
    UrlTooShort,
    #[error("Rating must be a number")]
    RatingNotNumber,
    #[error("Rating cannot be less than 1 or greater than 5")]
    RatingOutOfRange,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingFields,
    #[error("{0}")]
    NotFound(&'static str),
    #[error("Unauthorized request")]
    Unauthorized,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) | AppError::MissingFields | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Config(_) | AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        match self {
            // Create-path validation failures answer with the bare message.
            AppError::Validation(e) => (
                status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                e.to_string(),
            )
                .into_response(),
            AppError::Db(e) => {
                tracing::error!(error = %e, "storage failure");
                (status, Json(error_body("server error"))).into_response()
            }
            AppError::Config(e) => {
                tracing::error!(error = %e, "configuration error");
                (status, Json(error_body("server error"))).into_response()
            }
            other => (status, Json(error_body(&other.to_string()))).into_response(),
        }
    }
}
