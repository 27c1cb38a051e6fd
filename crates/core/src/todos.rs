//! Todo field limits and validation functions.
//!
//! Limits match the HTTP contract: titles are 1-100 characters,
//! descriptions up to 500, and the completion flag is the integer
//! pair 0/1 stored in the `completed` column.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a todo title in characters.
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum length of a todo description in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// `completed` column value for an open todo.
pub const COMPLETED_FALSE: i64 = 0;

/// `completed` column value for a finished todo.
pub const COMPLETED_TRUE: i64 = 1;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a todo title: non-empty, at most [`MAX_TITLE_LENGTH`] characters.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.is_empty() {
        return Err("title must not be empty".to_string());
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(format!(
            "title must be at most {MAX_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a todo description: at most [`MAX_DESCRIPTION_LENGTH`] characters.
pub fn validate_description(description: &str) -> Result<(), String> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(format!(
            "description must be at most {MAX_DESCRIPTION_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a completion flag: must be exactly 0 or 1.
pub fn validate_completed_flag(value: i64) -> Result<(), String> {
    if value == COMPLETED_FALSE || value == COMPLETED_TRUE {
        Ok(())
    } else {
        Err(format!("completed must be 0 or 1, got {value}"))
    }
}
