pub mod health;
pub mod todos;

use axum::Router;

use crate::state::AppState;

/// Build the todo route tree.
///
/// ```text
/// /todos           list, create
/// /todos/{id}      get, patch, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/todos", todos::router())
}
