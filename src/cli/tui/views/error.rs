//! Fallback screen shown after a view panics while drawing

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::cli::tui::app::App;
use crate::cli::tui::theme::THEME;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let message = app.render_error().unwrap_or("unknown error");

    let paragraph = Paragraph::new(vec![
        Line::from("Sorry! Something unexpected happened while drawing this page."),
        Line::default(),
        Line::from(vec![
            Span::styled("Error: ", THEME.danger()),
            Span::raw(message.to_string()),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("[t] Try Again", THEME.heading()),
            Span::raw("    "),
            Span::styled("[R] Reload", THEME.warning()),
            Span::raw("    "),
            Span::styled("[q] Quit", THEME.muted()),
        ]),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(Span::styled("Something went wrong", THEME.danger()))
            .borders(Borders::ALL)
            .border_style(THEME.danger()),
    );

    frame.render_widget(paragraph, area);
}
