//! # Command-Line Interface
//!
//! User-facing commands, output formatting and the interactive UI.
//!
//! ## Command Groups
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | UI | Interactive pages | `tui`, `tui --route todos` |
//! | Launches | GraphQL launch data | `launches`, `launch <ID>`, `rockets` |
//! | Todos | Scripted todo sessions | `todos "add:Buy milk" toggle:1`, `validate` |
//! | Session | Stored API token | `login --token`, `logout`, `token` |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output:
//! ```bash
//! launchpad --verbose launches
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod launches;
mod output;
mod pages;
mod session;
mod todos;
mod tui;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
pub use todos::{apply_ops, TodoOp};
pub use tui::Route;
