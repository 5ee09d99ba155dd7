//! Filtered view over the todo collection
//!
//! Pure functions: results depend only on the items and the filter passed
//! in, so they can be recomputed after every mutation.

use serde::Serialize;

use super::todo::{Filter, TodoItem, TodoStore};

/// Items passing `filter`, in collection order
pub fn visible_todos(todos: &[TodoItem], filter: Filter) -> Vec<&TodoItem> {
    todos.iter().filter(|t| filter.matches(t)).collect()
}

/// Item counts by completion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TodoCounts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

impl TodoCounts {
    pub fn from_todos(todos: &[TodoItem]) -> Self {
        let completed = todos.iter().filter(|t| t.completed).count();
        Self {
            total: todos.len(),
            active: todos.len() - completed,
            completed,
        }
    }

    /// Count shown next to a filter tab
    pub fn for_filter(&self, filter: Filter) -> usize {
        match filter {
            Filter::All => self.total,
            Filter::Active => self.active,
            Filter::Completed => self.completed,
        }
    }
}

/// Everything a todo list renderer needs, computed from a store snapshot
#[derive(Debug, Clone)]
pub struct FilterView<'a> {
    pub filter: Filter,
    pub visible: Vec<&'a TodoItem>,
    pub counts: TodoCounts,
}

impl<'a> FilterView<'a> {
    pub fn new(store: &'a TodoStore) -> Self {
        Self::from_parts(store.todos(), store.filter())
    }

    pub fn from_parts(todos: &'a [TodoItem], filter: Filter) -> Self {
        Self {
            filter,
            visible: visible_todos(todos, filter),
            counts: TodoCounts::from_todos(todos),
        }
    }

    /// Tab label such as `Active (2)`
    pub fn label(&self, filter: Filter) -> String {
        let name = match filter {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        };
        format!("{} ({})", name, self.counts.for_filter(filter))
    }

    /// Message shown when nothing passes the filter
    pub fn empty_message(&self) -> String {
        match self.filter {
            Filter::All => "No todos yet. Add one above!".to_string(),
            other => format!("No {} todos.", other),
        }
    }

    pub fn can_clear_completed(&self) -> bool {
        self.counts.completed > 0
    }
}
