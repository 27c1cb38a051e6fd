//! Repository for the `todos` table.

use chrono::Utc;
use cograde_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::todo::{CreateTodo, StatusFilter, Todo, TodoFilter, UpdateTodo};

/// Column list for todos queries.
const COLUMNS: &str = "id, title, description, completed, createdAt";

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Create a new todo, returning the created row.
    ///
    /// `completed` starts at 0 and `createdAt` is assigned here; neither is
    /// accepted from the caller.
    pub async fn create(pool: &SqlitePool, input: &CreateTodo) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "INSERT INTO todos (title, description, completed, createdAt)
             VALUES (?, ?, 0, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a todo by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = ?");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List todos matching the given filter.
    ///
    /// Restrictions are collected into an explicit condition list and joined
    /// with AND only when at least one applies. No ORDER BY is issued: rows
    /// come back in table order, stable for a given store state.
    ///
    /// The search needle matches `title` or `description` with `LIKE`,
    /// lowercased on both sides. `%` and `_` in the needle are not escaped
    /// and keep their SQL wildcard meaning. An empty or whitespace-only
    /// needle applies no restriction.
    pub async fn list(pool: &SqlitePool, filter: &TodoFilter) -> Result<Vec<Todo>, sqlx::Error> {
        let mut conditions: Vec<&str> = Vec::new();

        match filter.status {
            StatusFilter::All => {}
            StatusFilter::Pending => conditions.push("completed = 0"),
            StatusFilter::Completed => conditions.push("completed = 1"),
        }

        let search = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        if search.is_some() {
            conditions.push(
                "(LOWER(title) LIKE '%' || LOWER(?) || '%' \
                 OR LOWER(description) LIKE '%' || LOWER(?) || '%')",
            );
        }

        let mut query = format!("SELECT {COLUMNS} FROM todos");
        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        let mut stmt = sqlx::query_as::<_, Todo>(&query);
        if let Some(needle) = search {
            stmt = stmt.bind(needle.to_owned()).bind(needle.to_owned());
        }
        stmt.fetch_all(pool).await
    }

    /// Partially update a todo by ID, returning the updated row.
    ///
    /// `title` and `completed` use `COALESCE` so absent fields keep their
    /// value. `description` is clearable, so it uses a provided/value pair:
    /// the CASE only assigns when the outer `Option` of the DTO field is
    /// populated, letting an explicit null through to the column.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateTodo,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let description_provided = input.description.is_some();
        let description_value = input.description.as_ref().and_then(|v| v.as_deref());

        let query = format!(
            "UPDATE todos SET
                title       = COALESCE(?, title),
                description = CASE WHEN ? THEN ? ELSE description END,
                completed   = COALESCE(?, completed)
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&input.title)
            .bind(description_provided)
            .bind(description_value)
            .bind(input.completed)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a todo by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
