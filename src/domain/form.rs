//! New-todo form state
//!
//! Holds the text being typed and the last validation error, independent
//! of how it is drawn.

use super::id::TodoId;
use super::todo::TodoStore;
use super::validate::{validate_todo_text, ValidationError};

pub const FORM_PLACEHOLDER: &str = "What do you need to do?";
pub const FORM_LABEL: &str = "New todo item";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoForm {
    input: String,
    error: Option<ValidationError>,
}

impl TodoForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// Types a character; clears any displayed error
    pub fn push(&mut self, c: char) {
        self.input.push(c);
        self.error = None;
    }

    /// Deletes the last character; clears any displayed error
    pub fn pop(&mut self) {
        self.input.pop();
        self.error = None;
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.error = None;
    }

    /// Validates the input and adds it to `store`.
    ///
    /// On success the input and error are cleared. On failure the input is
    /// kept and the error is remembered for display.
    pub fn submit(&mut self, store: &mut TodoStore) -> Result<TodoId, ValidationError> {
        match validate_todo_text(&self.input) {
            Ok(text) => {
                let id = store.add_todo(text);
                self.input.clear();
                self.error = None;
                Ok(id)
            }
            Err(e) => {
                self.error = Some(e);
                Err(e)
            }
        }
    }
}
