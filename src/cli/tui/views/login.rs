//! Login page, shown on demand or after the API rejects the token

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::cli::tui::theme::THEME;

pub fn draw(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(vec![
        Line::from("You are not logged in, or your session has expired."),
        Line::default(),
        Line::from(vec![
            Span::styled("[Enter] Log in as demo user", THEME.success()),
            Span::raw("    "),
            Span::styled("[Esc] Back", THEME.muted()),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "Use `launchpad login --token <TOKEN>` to store an API token.",
            THEME.muted(),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(Span::styled("Login", THEME.heading()))
            .borders(Borders::ALL)
            .border_style(THEME.border(true)),
    );

    frame.render_widget(paragraph, area);
}
