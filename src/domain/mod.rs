//! Domain models for Launchpad
//!
//! Contains the business rules (todo store, filtering, validation and the
//! demo session) without any I/O concerns.

mod id;
mod todo;
mod filter;
mod validate;
mod form;
mod auth;

pub use id::{IdError, TodoId};
pub use todo::{Filter, TodoItem, TodoStore};
pub use filter::{visible_todos, FilterView, TodoCounts};
pub use validate::{validate_todo_text, ValidationError, MAX_TODO_LEN, MIN_TODO_LEN};
pub use form::{TodoForm, FORM_LABEL, FORM_PLACEHOLDER};
pub use auth::{Session, User};
