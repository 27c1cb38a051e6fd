//! Todo model and DTOs.

use cograde_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `todos` table.
///
/// The wire name of the creation timestamp is `createdAt`, carried through
/// unchanged from the column name.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub completed: Option<i64>,
    #[serde(rename = "createdAt")]
    #[sqlx(rename = "createdAt")]
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a new todo.
///
/// `completed` and `createdAt` are store-assigned and not accepted here.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    pub description: Option<String>,
}

/// DTO for partially updating a todo.
///
/// `description` distinguishes "absent" from "null": the outer `Option` is
/// presence in the payload, the inner `Option` is the new value, so an
/// explicit `null` clears the column while an absent field keeps it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub completed: Option<i64>,
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

// ---------------------------------------------------------------------------
// List filter
// ---------------------------------------------------------------------------

/// Completion-status restriction for todo listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

/// Filter parameters for listing todos (`?status=&search=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoFilter {
    #[serde(default)]
    pub status: StatusFilter,
    pub search: Option<String>,
}
