//! Response envelope helpers.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub message: String,
}

/// `{"error": {"message": ...}}`, the shape every JSON error shares.
pub fn error_body(message: &str) -> ErrorBody {
    ErrorBody {
        error: ErrorDetail {
            message: message.to_string(),
        },
    }
}

/// 201 with a `Location` header pointing at the new resource.
pub fn created_at<T: Serialize>(location: &str, data: T) -> Response {
    let mut response = (StatusCode::CREATED, Json(data)).into_response();
    if let Ok(value) = HeaderValue::from_str(location) {
        response.headers_mut().insert(header::LOCATION, value);
    }
    response
}
