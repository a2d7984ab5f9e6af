//! Bookmark record and its validated input shapes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored bookmark. Field names double as column names and wire names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Bookmark {
    pub id: Uuid,
    pub title: String,
    pub site_url: String,
    pub site_description: String,
    pub rating: i32,
}

/// A validated, sanitized create payload. The id is assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookmark {
    pub title: String,
    pub site_url: String,
    pub site_description: String,
    pub rating: i32,
}

impl NewBookmark {
    pub fn with_id(self, id: Uuid) -> Bookmark {
        Bookmark {
            id,
            title: self.title,
            site_url: self.site_url,
            site_description: self.site_description,
            rating: self.rating,
        }
    }
}

/// A validated partial update. `None` leaves the stored column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub site_url: Option<String>,
    pub site_description: Option<String>,
    pub rating: Option<i32>,
}

impl BookmarkPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.site_url.is_none()
            && self.site_description.is_none()
            && self.rating.is_none()
    }

    /// Apply the present fields onto `bookmark`.
    pub fn apply(&self, bookmark: &mut Bookmark) {
        if let Some(title) = &self.title {
            bookmark.title = title.clone();
        }
        if let Some(url) = &self.site_url {
            bookmark.site_url = url.clone();
        }
        if let Some(desc) = &self.site_description {
            bookmark.site_description = desc.clone();
        }
        if let Some(rating) = self.rating {
            bookmark.rating = rating;
        }
    }
}
