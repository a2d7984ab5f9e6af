//! Bookmark CRUD routes, guarded by the bearer-token middleware.

use crate::auth::require_bearer;
use crate::handlers::bookmarks::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{middleware, routing::get, Router};

pub fn bookmark_routes(state: AppState) -> Router {
    Router::new()
        .route("/bookmarks", get(list).post(create))
        .route(
            "/bookmarks/:id",
            get(read).patch(update).delete(delete_handler),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer))
        .with_state(state)
}
