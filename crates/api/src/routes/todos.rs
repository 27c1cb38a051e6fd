//! Route definitions for the todo CRUD surface.
//!
//! Mounted at `/todos` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::todos;
use crate::state::AppState;

/// Todo routes.
///
/// ```text
/// GET    /          -> list_todos (?status, search)
/// POST   /          -> create_todo
/// GET    /{id}      -> get_todo
/// PATCH  /{id}      -> update_todo
/// DELETE /{id}      -> delete_todo
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(todos::list_todos).post(todos::create_todo))
        .route(
            "/{id}",
            get(todos::get_todo)
                .patch(todos::update_todo)
                .delete(todos::delete_todo),
        )
}
