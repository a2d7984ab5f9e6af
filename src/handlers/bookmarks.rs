//! Bookmark CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::model::Bookmark;
use crate::response::created_at;
use crate::service::{RequestValidator, BOOKMARK_DOESNT_EXIST, BOOKMARK_DOES_NOT_EXIST};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A malformed id can never match a row, so it gets the same 404 as an absent one.
fn parse_id(id_str: &str, not_found: &'static str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id_str).map_err(|_| AppError::NotFound(not_found))
}

/// Parse the raw body as a JSON object whatever the `Content-Type`. An empty body is an
/// empty object, so field rules decide the answer instead of the extractor.
fn body_to_map(body: &Bytes) -> Result<Map<String, Value>, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }
    match serde_json::from_slice(body) {
        Ok(Value::Object(m)) => Ok(m),
        Ok(_) => Err(AppError::BadRequest("body must be a JSON object".into())),
        Err(e) => Err(AppError::BadRequest(format!("malformed JSON body: {e}"))),
    }
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Bookmark>>, AppError> {
    let rows = state.bookmarks.list().await?;
    Ok(Json(rows))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Bookmark>, AppError> {
    let id = parse_id(&id_str, BOOKMARK_DOES_NOT_EXIST)?;
    let bookmark = state.bookmarks.get(id).await.inspect_err(|e| {
        if matches!(e, AppError::NotFound(_)) {
            tracing::warn!(%id, "bookmark not found");
        }
    })?;
    Ok(Json(bookmark))
}

pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let body = body_to_map(&body)?;
    let new = RequestValidator::validate(&body).inspect_err(|e| {
        tracing::warn!(reason = %e, "rejected bookmark");
    })?;
    let bookmark = state.bookmarks.create(new).await?;
    tracing::info!(id = %bookmark.id, "bookmark created");
    let location = state.config.bookmark_location(&bookmark.id);
    Ok(created_at(&location, bookmark))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, BOOKMARK_DOESNT_EXIST)?;
    // An absent bookmark answers 404 even when the body is also unusable.
    let patch = match body_to_map(&body).and_then(|b| RequestValidator::validate_partial(&b)) {
        Ok(patch) => patch,
        Err(e) => {
            state.bookmarks.require(id, BOOKMARK_DOESNT_EXIST).await?;
            tracing::warn!(%id, reason = %e, "rejected bookmark update");
            return Err(e);
        }
    };
    state.bookmarks.update(id, &patch).await?;
    tracing::info!(%id, "bookmark updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, BOOKMARK_DOESNT_EXIST)?;
    state.bookmarks.delete(id).await.inspect_err(|e| {
        if matches!(e, AppError::NotFound(_)) {
            tracing::warn!(%id, "bookmark not found");
        }
    })?;
    tracing::info!(%id, "bookmark deleted");
    Ok(StatusCode::NO_CONTENT)
}
