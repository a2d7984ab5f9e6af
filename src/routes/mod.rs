//! Route tables and the assembled application router.

mod bookmarks;
mod common;

pub use bookmarks::bookmark_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full router: operational routes at the root, bookmark routes under the configured prefix.
pub fn app(state: AppState) -> Router {
    let prefix = state.config.api_prefix.clone();
    let body_limit = state.config.body_limit_bytes;
    let api = bookmark_routes(state.clone());
    let router = Router::new().merge(common_routes(state));
    let router = if prefix.is_empty() {
        router.merge(api)
    } else {
        router.nest(&prefix, api)
    };
    router
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
