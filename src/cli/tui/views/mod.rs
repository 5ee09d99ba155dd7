//! Page views
//!
//! Every page shares the navigation bar on top and the status bar below;
//! `draw` picks the page body from the current route.

pub mod about;
pub mod error;
pub mod home;
pub mod launches;
pub mod login;
pub mod nav;
pub mod todos;

use ratatui::prelude::*;

use super::app::App;
use super::Route;

/// Draw the page layout for the current route
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navigation
            Constraint::Min(8),    // Page
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    nav::draw_nav(frame, app, chunks[0]);

    match app.route() {
        Route::Home => home::draw(frame, app, chunks[1]),
        Route::Todos => todos::draw(frame, app, chunks[1]),
        Route::Launches => launches::draw(frame, app, chunks[1]),
        Route::About => about::draw(frame, chunks[1]),
        Route::Login => login::draw(frame, chunks[1]),
    }

    nav::draw_status_bar(frame, app, chunks[2]);
}
