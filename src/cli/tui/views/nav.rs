//! Navigation bar and status bar

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::cli::pages::HOME_TITLE;
use crate::cli::tui::app::{App, InputMode};
use crate::cli::tui::theme::THEME;
use crate::cli::tui::Route;

/// Draw the navigation bar: logo, page tabs and the session widget
pub fn draw_nav(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    let mut spans = vec![Span::styled(format!(" {} ", HOME_TITLE), THEME.heading())];
    for (i, route) in Route::NAV.iter().enumerate() {
        let style = if *route == app.route() {
            THEME.active_tab()
        } else {
            THEME.text()
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("[{}] {}", i + 1, route.label()), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let session = match app.session().user() {
        Some(user) => Line::from(vec![
            Span::styled(user.name.clone(), THEME.text().add_modifier(Modifier::BOLD)),
            Span::styled(format!(" <{}>", user.email), THEME.muted()),
            Span::raw("  "),
            Span::styled("[L] Logout ", THEME.warning()),
        ]),
        None => Line::from(Span::styled("[L] Login (Demo) ", THEME.success())),
    };
    frame.render_widget(Paragraph::new(session).alignment(Alignment::Right), chunks[1]);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (content, style) = match app.status_message() {
        Some(msg) => (msg.to_string(), THEME.warning()),
        None => (default_hint(app).to_string(), THEME.muted()),
    };

    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(12)])
        .split(inner);

    frame.render_widget(Paragraph::new(content).style(style), chunks[0]);
    frame.render_widget(
        Paragraph::new(format!("v{}", env!("CARGO_PKG_VERSION")))
            .style(THEME.muted())
            .alignment(Alignment::Right),
        chunks[1],
    );
}

fn default_hint(app: &App) -> &'static str {
    if app.input_mode() == InputMode::Typing {
        return "[Enter] add  [Esc] done";
    }

    match app.route() {
        Route::Home => "[t] todos  [s] SpaceX  [1-4] pages  [L] login  [?] help  [q] quit",
        Route::Todos => {
            "[i] new  [j/k] move  [space] toggle  [d] delete  [f] filter  [C] clear completed  [q] quit"
        }
        Route::Launches => "[j/k] move  [r] reload  [1-4] pages  [q] quit",
        Route::About => "[1-4] pages  [Tab] next  [L] login  [q] quit",
        Route::Login => "[Enter] log in as demo user  [Esc] back",
    }
}
