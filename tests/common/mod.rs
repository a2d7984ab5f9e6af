#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use bookmarks::{AppError, AppState, Bookmark, BookmarkPatch, BookmarkStore, Config, Removal};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

pub const TOKEN: &str = "test-token";

/// In-memory `BookmarkStore` keeping rows in insertion order.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Bookmark>>,
}

impl MemoryStore {
    pub fn with_rows(rows: Vec<Bookmark>) -> Self {
        MemoryStore { rows: Mutex::new(rows) }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn row(&self, id: Uuid) -> Option<Bookmark> {
        self.rows.lock().unwrap().iter().find(|b| b.id == id).cloned()
    }
}

#[async_trait]
impl BookmarkStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Bookmark>, AppError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Bookmark>, AppError> {
        Ok(self.row(id))
    }

    async fn insert(&self, bookmark: &Bookmark) -> Result<Bookmark, AppError> {
        self.rows.lock().unwrap().push(bookmark.clone());
        Ok(bookmark.clone())
    }

    async fn update_by_id(&self, id: Uuid, patch: &BookmarkPatch) -> Result<Option<Bookmark>, AppError> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|b| b.id == id).map(|b| {
            patch.apply(b);
            b.clone()
        }))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Removal, AppError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter().position(|b| b.id == id) {
            Some(index) => {
                rows.remove(index);
                Ok(Removal::Deleted)
            }
            None => Ok(Removal::NotFound),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// A store whose every call fails as if the database were gone.
pub struct FailingStore;

#[async_trait]
impl BookmarkStore for FailingStore {
    async fn list_all(&self) -> Result<Vec<Bookmark>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn get_by_id(&self, _id: Uuid) -> Result<Option<Bookmark>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn insert(&self, _bookmark: &Bookmark) -> Result<Bookmark, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn update_by_id(&self, _id: Uuid, _patch: &BookmarkPatch) -> Result<Option<Bookmark>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn delete_by_id(&self, _id: Uuid) -> Result<Removal, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }
}

pub fn test_config() -> Config {
    Config::from_lookup(|key| match key {
        "API_TOKEN" => Some(TOKEN.to_string()),
        _ => None,
    })
    .expect("test config")
}

pub fn build_test_app(store: Arc<dyn BookmarkStore>) -> Router {
    bookmarks::app(AppState::new(store, test_config()))
}

pub fn make_bookmarks() -> Vec<Bookmark> {
    vec![
        Bookmark {
            id: Uuid::new_v4(),
            title: "Thinkful".into(),
            site_url: "https://www.thinkful.com".into(),
            site_description: "Think outside the classroom".into(),
            rating: 5,
        },
        Bookmark {
            id: Uuid::new_v4(),
            title: "Google".into(),
            site_url: "https://www.google.com".into(),
            site_description: "Where we find everything else".into(),
            rating: 4,
        },
        Bookmark {
            id: Uuid::new_v4(),
            title: "MDN".into(),
            site_url: "https://developer.mozilla.org".into(),
            site_description: "The only place to find web documentation".into(),
            rating: 5,
        },
    ]
}

pub fn make_malicious_bookmark() -> (Bookmark, Bookmark) {
    let malicious = Bookmark {
        id: Uuid::new_v4(),
        title: r#"Naughty naughty very naughty <script>alert("xss");</script>"#.into(),
        site_url: "https://www.hackers.com".into(),
        site_description: r#"Bad image <img src="https://url.to.file.which/does-not.exist" onerror="alert(document.cookie);">. But not <strong>all</strong> bad."#.into(),
        rating: 1,
    };
    let expected = Bookmark {
        title: "Naughty naughty very naughty".into(),
        site_description: "Bad image . But not all bad.".into(),
        ..malicious.clone()
    };
    (malicious, expected)
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Authorized request carrying `body` verbatim and no `Content-Type` header.
pub async fn send_raw(app: Router, method: Method, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {TOKEN}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(TOKEN), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(TOKEN), Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(TOKEN), Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(TOKEN), None).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
