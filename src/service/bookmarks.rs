//! Bookmark orchestration over a `BookmarkStore`.

use crate::error::AppError;
use crate::model::{Bookmark, BookmarkPatch, NewBookmark};
use crate::service::sanitize::sanitize;
use crate::store::{BookmarkStore, Removal};
use std::sync::Arc;
use uuid::Uuid;

pub const BOOKMARK_DOES_NOT_EXIST: &str = "Bookmark does not exist";
pub const BOOKMARK_DOESNT_EXIST: &str = "Bookmark doesn't exist";

#[derive(Clone)]
pub struct BookmarkService {
    store: Arc<dyn BookmarkStore>,
}

impl BookmarkService {
    pub fn new(store: Arc<dyn BookmarkStore>) -> Self {
        BookmarkService { store }
    }

    pub async fn list(&self) -> Result<Vec<Bookmark>, AppError> {
        let rows = self.store.list_all().await?;
        Ok(rows.into_iter().map(serialize_bookmark).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<Bookmark, AppError> {
        self.store
            .get_by_id(id)
            .await?
            .map(serialize_bookmark)
            .ok_or(AppError::NotFound(BOOKMARK_DOES_NOT_EXIST))
    }

    /// Succeeds when a row with `id` exists; otherwise 404 with `message`.
    pub async fn require(&self, id: Uuid, message: &'static str) -> Result<(), AppError> {
        match self.store.get_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(message)),
        }
    }

    /// Assign a fresh id and store the bookmark.
    pub async fn create(&self, new: NewBookmark) -> Result<Bookmark, AppError> {
        let bookmark = new.with_id(Uuid::new_v4());
        let row = self.store.insert(&bookmark).await?;
        Ok(serialize_bookmark(row))
    }

    pub async fn update(&self, id: Uuid, patch: &BookmarkPatch) -> Result<Bookmark, AppError> {
        self.store
            .update_by_id(id, patch)
            .await?
            .map(serialize_bookmark)
            .ok_or(AppError::NotFound(BOOKMARK_DOESNT_EXIST))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        match self.store.delete_by_id(id).await? {
            Removal::Deleted => Ok(()),
            Removal::NotFound => Err(AppError::NotFound(BOOKMARK_DOESNT_EXIST)),
        }
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.store.ping().await
    }
}

/// Rows may predate sanitization on write, so free text is cleaned again on the way out.
fn serialize_bookmark(bookmark: Bookmark) -> Bookmark {
    Bookmark {
        title: sanitize(&bookmark.title),
        site_description: sanitize(&bookmark.site_description),
        ..bookmark
    }
}
