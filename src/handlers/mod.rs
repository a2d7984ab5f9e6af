//! HTTP handlers for bookmark CRUD.

pub mod bookmarks;
pub use bookmarks::*;
