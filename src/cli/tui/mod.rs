//! Interactive TUI for Launchpad
//!
//! Renders the home, todos, launches and about pages in the terminal
//! using ratatui. All state lives on the UI thread; the launches fetch runs
//! on a worker thread and reports back through the event channel.

mod app;
mod event;
mod theme;
mod ui;
mod utils;
mod views;

use std::panic::{self, AssertUnwindSafe};
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{anyhow, Result};

use super::Output;
use crate::graphql::GraphqlClient;
use crate::storage::{Config, TokenStore};
use app::App;
use event::EventHandler;
use ui::TerminalSession;

/// Page shown in the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Todos,
    Launches,
    About,
    /// Reached on demand or after the API rejects the token
    Login,
}

impl Route {
    /// Routes reachable from the navigation bar, in order
    pub const NAV: [Route; 4] = [Route::Home, Route::Todos, Route::Launches, Route::About];

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Todos => "Todos",
            Route::Launches => "SpaceX",
            Route::About => "About",
            Route::Login => "Login",
        }
    }

    fn next(self) -> Self {
        match self {
            Route::Home => Route::Todos,
            Route::Todos => Route::Launches,
            Route::Launches => Route::About,
            Route::About | Route::Login => Route::Home,
        }
    }

    fn prev(self) -> Self {
        match self {
            Route::Home | Route::Login => Route::About,
            Route::Todos => Route::Home,
            Route::Launches => Route::Todos,
            Route::About => Route::Launches,
        }
    }
}

impl FromStr for Route {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" | "1" => Ok(Route::Home),
            "todos" | "2" => Ok(Route::Todos),
            "launches" | "spacex" | "3" => Ok(Route::Launches),
            "about" | "4" => Ok(Route::About),
            "login" => Ok(Route::Login),
            _ => Err(()),
        }
    }
}

/// Launch the TUI
pub fn run(output: &Output, route: &str, config: &Config, tokens: TokenStore) -> Result<()> {
    output.verbose_ctx("tui", "Initializing TUI application");

    let route = route.parse().unwrap_or_default();
    let client = GraphqlClient::new(config.graphql_endpoint.clone())?.with_token_store(tokens);
    output.verbose_ctx("tui", &format!("GraphQL endpoint: {}", client.endpoint()));

    let mut app = App::new(route, config.launches_limit);

    let mut session = TerminalSession::start()?;

    // Create event handler
    let event_handler = EventHandler::new(config.tui.tick_rate_ms);

    // Render panics are caught by the app's error boundary and fetch worker
    // panics come back as events; keep the default hook from printing over
    // the alternate screen meanwhile
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));

    // Run the main loop with panic safety
    // This ensures terminal is restored even if the app panics
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        app.run(session.terminal(), event_handler, Arc::new(client))
    }));

    panic::set_hook(default_hook);

    // Always restore terminal, even on panic
    let restore_result = session.restore();

    match result {
        Ok(inner_result) => {
            restore_result?;
            inner_result
        }
        Err(panic_payload) => {
            let _ = restore_result;
            Err(anyhow!("TUI panicked: {}", app::panic_message(&*panic_payload)))
        }
    }
}
