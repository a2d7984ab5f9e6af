//! Shared application state for all routes.

use crate::config::Config;
use crate::service::BookmarkService;
use crate::store::BookmarkStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub bookmarks: BookmarkService,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Arc<dyn BookmarkStore>, config: Config) -> Self {
        AppState {
            bookmarks: BookmarkService::new(store),
            config: Arc::new(config),
        }
    }
}
