//! Todo domain model
//!
//! A [`TodoStore`] owns the ordered todo collection and the active
//! [`Filter`]. Every mutation is synchronous and visible to the next read.
//! The store never validates text; see [`super::validate`] for the length
//! policy applied at the form boundary.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::TodoId;

/// Which subset of the collection is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// All filters in display order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Returns true if the given item passes this filter
    pub fn matches(&self, todo: &TodoItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }

    /// Cycles All -> Active -> Completed -> All
    pub fn next(self) -> Self {
        match self {
            Filter::All => Filter::Active,
            Filter::Active => Filter::Completed,
            Filter::Completed => Filter::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            other => Err(format!(
                "Unknown filter '{}': expected all, active or completed",
                other
            )),
        }
    }
}

/// A single user-entered task with completion status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,

    /// Text as entered (never edited after creation)
    pub text: String,

    /// Whether the item is done
    pub completed: bool,

    /// When the item was created
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    fn new(id: TodoId, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at,
        }
    }
}

/// In-memory todo collection plus the active filter
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    todos: Vec<TodoItem>,
    filter: Filter,
    /// Mixed into new IDs so identical text added in the same instant differs
    sequence: u64,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new, not completed item and returns its ID
    pub fn add_todo(&mut self, text: impl Into<String>) -> TodoId {
        let text = text.into();
        let created_at = Utc::now();

        let mut id = self.next_id(&text, created_at);
        while self.get(&id).is_some() {
            id = self.next_id(&text, created_at);
        }

        self.todos.push(TodoItem::new(id.clone(), text, created_at));
        id
    }

    /// Flips `completed` for the matching item; returns false if absent
    pub fn toggle_todo(&mut self, id: &TodoId) -> bool {
        match self.todos.iter_mut().find(|t| &t.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                true
            }
            None => false,
        }
    }

    /// Removes the matching item; returns false if absent
    pub fn delete_todo(&mut self, id: &TodoId) -> bool {
        let len_before = self.todos.len();
        self.todos.retain(|t| &t.id != id);
        self.todos.len() != len_before
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Removes every completed item, keeping the order of the rest.
    /// Returns how many items were removed.
    pub fn clear_completed(&mut self) -> usize {
        let len_before = self.todos.len();
        self.todos.retain(|t| !t.completed);
        len_before - self.todos.len()
    }

    /// All items in insertion order
    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|t| &t.id == id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    fn next_id(&mut self, text: &str, created_at: DateTime<Utc>) -> TodoId {
        self.sequence += 1;
        TodoId::new(text, created_at, self.sequence)
    }
}
