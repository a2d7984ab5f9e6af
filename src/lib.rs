//! Bookmarks: a small REST service for saved links, backed by PostgreSQL.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, ConfigError, ValidationError};
pub use model::{Bookmark, BookmarkPatch, NewBookmark};
pub use routes::app;
pub use service::{BookmarkService, RequestValidator};
pub use state::AppState;
pub use store::{ensure_bookmarks_table, ensure_database_exists, BookmarkStore, PgBookmarkStore, Removal};
