//! Scripted todo sessions and the `validate` command
//!
//! The store is in-memory only, so `todos` runs a whole session from its
//! arguments and prints the resulting view:
//!
//! ```bash
//! launchpad todos "add:Buy milk" "add:Walk dog" toggle:1 filter:active
//! ```

use std::str::FromStr;

use anyhow::Result;
use serde::Serialize;

use super::output::Output;
use crate::domain::{
    validate_todo_text, Filter, FilterView, TodoCounts, TodoForm, TodoId, TodoItem,
    TodoStore,
};

/// One step of a scripted session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoOp {
    /// Submit text through the todo form
    Add(String),
    /// Toggle the item at a 1-based position
    Toggle(usize),
    /// Delete the item at a 1-based position
    Delete(usize),
    Filter(Filter),
    Clear,
}

impl FromStr for TodoOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        match (name.to_lowercase().as_str(), arg) {
            ("add", Some(text)) => Ok(TodoOp::Add(text.to_string())),
            ("toggle", Some(n)) => parse_position(n).map(TodoOp::Toggle),
            ("delete", Some(n)) => parse_position(n).map(TodoOp::Delete),
            ("filter", Some(f)) => f.parse().map(TodoOp::Filter),
            ("clear", None) => Ok(TodoOp::Clear),
            _ => Err(format!(
                "Invalid op '{}': expected add:TEXT, toggle:N, delete:N, filter:NAME or clear",
                s
            )),
        }
    }
}

fn parse_position(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("Invalid position '{}': expected a number starting at 1", s)),
    }
}

/// Applies ops in order; returns the messages of rejected adds
pub fn apply_ops(store: &mut TodoStore, ops: &[TodoOp]) -> Vec<String> {
    let mut form = TodoForm::new();
    let mut rejected = Vec::new();

    for op in ops {
        match op {
            TodoOp::Add(text) => {
                form.set_input(text.as_str());
                if let Err(e) = form.submit(store) {
                    rejected.push(e.to_string());
                }
            }
            TodoOp::Toggle(position) => {
                if let Some(id) = id_at(store, *position) {
                    store.toggle_todo(&id);
                }
            }
            TodoOp::Delete(position) => {
                if let Some(id) = id_at(store, *position) {
                    store.delete_todo(&id);
                }
            }
            TodoOp::Filter(filter) => store.set_filter(*filter),
            TodoOp::Clear => {
                store.clear_completed();
            }
        }
    }

    rejected
}

fn id_at(store: &TodoStore, position: usize) -> Option<TodoId> {
    store
        .todos()
        .get(position.checked_sub(1)?)
        .map(|todo| todo.id.clone())
}

#[derive(Serialize)]
struct SessionReport<'a> {
    filter: Filter,
    counts: TodoCounts,
    todos: Vec<&'a TodoItem>,
    errors: Vec<String>,
}

/// Runs a scripted session and prints the filtered view
pub fn run(output: &Output, ops: &[TodoOp]) -> Result<()> {
    let mut store = TodoStore::new();
    output.verbose_ctx("todos", &format!("Applying {} op(s)", ops.len()));

    let errors = apply_ops(&mut store, ops);
    let view = FilterView::new(&store);

    if output.is_json() {
        output.data(&SessionReport {
            filter: view.filter,
            counts: view.counts,
            todos: view.visible.clone(),
            errors,
        });
        return Ok(());
    }

    for error in &errors {
        output.error(error);
    }

    println!("Todos (filter: {})", view.filter);
    if view.visible.is_empty() {
        println!("  {}", view.empty_message());
    }
    for todo in &view.visible {
        let indicator = if todo.completed { "[x]" } else { "[ ]" };
        println!("  {} {}  {}", indicator, todo.id, todo.text);
    }
    println!();

    let labels: Vec<String> = Filter::ALL.iter().map(|f| view.label(*f)).collect();
    println!("{}", labels.join("  "));

    Ok(())
}

/// Runs the form validator on a single input
pub fn validate(output: &Output, text: &str) -> Result<()> {
    let normalized = validate_todo_text(text)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "valid": true,
            "text": normalized,
        }));
    } else {
        println!("{}", normalized);
    }

    Ok(())
}
