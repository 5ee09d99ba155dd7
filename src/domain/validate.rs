//! Length policy for new todo text

use thiserror::Error;

/// Minimum length of a todo after trimming
pub const MIN_TODO_LEN: usize = 3;

/// Maximum length of a todo after trimming
pub const MAX_TODO_LEN: usize = 100;

/// Why submitted todo text was rejected. The message is shown to the user.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Come on, type something!")]
    EmptyInput,

    #[error("Make it at least 3 characters")]
    TooShort,

    #[error("Whoa there, keep it under 100 characters")]
    TooLong,
}

/// Trims `raw` and checks it against the length bounds.
///
/// Length is counted in characters, not bytes.
pub fn validate_todo_text(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();

    if len == 0 {
        return Err(ValidationError::EmptyInput);
    }
    if len < MIN_TODO_LEN {
        return Err(ValidationError::TooShort);
    }
    if len > MAX_TODO_LEN {
        return Err(ValidationError::TooLong);
    }

    Ok(trimmed.to_string())
}
