//! Request validation for bookmark payloads.

use crate::error::{AppError, ValidationError};
use crate::model::{BookmarkPatch, NewBookmark};
use crate::service::sanitize::sanitize;
use serde_json::{Map, Value};

pub const MIN_URL_LENGTH: usize = 5;
pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;
const DEFAULT_RATING: i32 = 1;

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create payload. Rules run in a fixed order and the first failure wins:
    /// title, url presence, url length, rating type, rating range.
    pub fn validate(body: &Map<String, Value>) -> Result<NewBookmark, ValidationError> {
        let title = text_field(body, &["title"]).map(|t| sanitize(&t)).unwrap_or_default();
        if title.is_empty() {
            return Err(ValidationError::TitleRequired);
        }
        let site_url = text_field(body, &["site_url", "url"]).unwrap_or_default();
        let site_url = validate_url(&site_url)?;
        let rating = match field(body, &["rating"]) {
            Some(v) => validate_rating(v)?,
            None => DEFAULT_RATING,
        };
        let site_description = text_field(body, &["site_description", "desc"])
            .map(|d| sanitize(&d))
            .unwrap_or_default();
        Ok(NewBookmark {
            title,
            site_url,
            site_description,
            rating,
        })
    }

    /// Validate a PATCH payload. At least one updatable field must be present; each
    /// present field is checked with the same rule as on create. Unknown keys are ignored.
    pub fn validate_partial(body: &Map<String, Value>) -> Result<BookmarkPatch, AppError> {
        let mut patch = BookmarkPatch::default();
        if let Some(title) = text_field(body, &["title"]) {
            let title = sanitize(&title);
            if title.is_empty() {
                return Err(ValidationError::TitleRequired.into());
            }
            patch.title = Some(title);
        }
        if let Some(url) = text_field(body, &["site_url", "url"]) {
            patch.site_url = Some(validate_url(&url)?);
        }
        if let Some(desc) = text_field(body, &["site_description", "desc"]) {
            patch.site_description = Some(sanitize(&desc));
        }
        if let Some(v) = field(body, &["rating"]) {
            patch.rating = Some(validate_rating(v)?);
        }
        if patch.is_empty() {
            return Err(AppError::MissingFields);
        }
        Ok(patch)
    }
}

/// First non-null value among `keys`.
fn field<'a>(body: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().filter_map(|k| body.get(*k)).find(|v| !v.is_null())
}

/// Text value among `keys`. Numbers and booleans are taken in their JSON text form.
fn text_field(body: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    match field(body, keys)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn validate_url(url: &str) -> Result<String, ValidationError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ValidationError::UrlRequired);
    }
    if url.chars().count() < MIN_URL_LENGTH {
        return Err(ValidationError::UrlTooShort);
    }
    Ok(url.to_string())
}

fn validate_rating(v: &Value) -> Result<i32, ValidationError> {
    let n = match v {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i,
            None => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.is_finite())
                .map(|f| f as i64)
                .ok_or(ValidationError::RatingNotNumber)?,
        },
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| ValidationError::RatingNotNumber)?,
        _ => return Err(ValidationError::RatingNotNumber),
    };
    if !(MIN_RATING..=MAX_RATING).contains(&n) {
        return Err(ValidationError::RatingOutOfRange);
    }
    Ok(n as i32)
}
