//! Handlers for the todo CRUD surface.
//!
//! Validates payloads at the boundary, delegates persistence to
//! [`TodoRepo`], and maps store outcomes to the wire contract.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use cograde_core::error::CoreError;
use cograde_core::todos::{validate_completed_flag, validate_description, validate_title};
use cograde_core::types::DbId;
use cograde_db::models::todo::{CreateTodo, TodoFilter, UpdateTodo};
use cograde_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response bodies
// ---------------------------------------------------------------------------

/// Response body for a successful create.
#[derive(Debug, Serialize)]
pub struct CreateTodoResponse {
    #[serde(rename = "todoId")]
    pub todo_id: DbId,
}

/// Response body for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteTodoResponse {
    pub success: bool,
}

/// Parse a path segment into a database id.
///
/// Ids arrive as raw path strings so a malformed value maps to the
/// contract's `INVALID_ID` body instead of the extractor's plain-text
/// rejection.
fn parse_id(raw: &str) -> Result<DbId, AppError> {
    raw.parse::<DbId>().map_err(|_| AppError::InvalidId)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /todos
///
/// Create a new todo.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<CreateTodo>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(CoreError::Validation)?;
    if let Some(ref description) = input.description {
        validate_description(description).map_err(CoreError::Validation)?;
    }

    let todo = TodoRepo::create(&state.pool, &input).await?;

    tracing::info!(todo_id = todo.id, "Todo created");

    Ok(Json(CreateTodoResponse { todo_id: todo.id }))
}

/// GET /todos?status=&search=
///
/// List todos, optionally restricted by completion status and a
/// case-insensitive substring search over title and description.
pub async fn list_todos(
    State(state): State<AppState>,
    Query(filter): Query<TodoFilter>,
) -> AppResult<impl IntoResponse> {
    let todos = TodoRepo::list(&state.pool, &filter).await?;

    Ok(Json(todos))
}

/// GET /todos/{id}
///
/// Get a single todo by ID.
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&id)?;

    let todo = TodoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Todo", id })?;

    Ok(Json(todo))
}

/// PATCH /todos/{id}
///
/// Apply a partial update: only supplied fields change, and an explicit
/// null `description` clears the column.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateTodo>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&id)?;

    if let Some(ref title) = input.title {
        validate_title(title).map_err(CoreError::Validation)?;
    }
    if let Some(Some(ref description)) = input.description {
        validate_description(description).map_err(CoreError::Validation)?;
    }
    if let Some(completed) = input.completed {
        validate_completed_flag(completed).map_err(CoreError::Validation)?;
    }

    let todo = TodoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Todo", id })?;

    Ok(Json(todo))
}

/// DELETE /todos/{id}
///
/// Delete a todo by ID.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_id(&id)?;

    let deleted = TodoRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound { entity: "Todo", id }.into());
    }

    tracing::info!(todo_id = id, "Todo deleted");

    Ok(Json(DeleteTodoResponse { success: true }))
}
