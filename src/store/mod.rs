//! Storage accessor for the bookmarks table.

mod postgres;

pub use postgres::{ensure_database_exists, ensure_bookmarks_table, PgBookmarkStore};

use crate::error::AppError;
use crate::model::{Bookmark, BookmarkPatch};
use async_trait::async_trait;
use uuid::Uuid;

/// Outcome of a delete. Absence is not an error at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Deleted,
    NotFound,
}

#[async_trait]
pub trait BookmarkStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Bookmark>, AppError>;

    /// `None` when no row has this id.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Bookmark>, AppError>;

    /// Stores the row as given; the id is chosen by the caller.
    async fn insert(&self, bookmark: &Bookmark) -> Result<Bookmark, AppError>;

    /// Writes only the fields present in `patch`. `None` when no row has this id.
    async fn update_by_id(&self, id: Uuid, patch: &BookmarkPatch) -> Result<Option<Bookmark>, AppError>;

    async fn delete_by_id(&self, id: Uuid) -> Result<Removal, AppError>;

    /// Cheap round trip behind `GET /ready`.
    async fn ping(&self) -> Result<(), AppError>;
}
