//! Bookmark service, request validation and text sanitization.

mod bookmarks;
pub mod sanitize;
mod validation;
pub use bookmarks::{BookmarkService, BOOKMARK_DOESNT_EXIST, BOOKMARK_DOES_NOT_EXIST};
pub use sanitize::sanitize;
pub use validation::RequestValidator;
