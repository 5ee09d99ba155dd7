//! About page

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::cli::pages::{ABOUT_TAGLINE, ABOUT_TITLE, ABOUT_WHY, TECHNOLOGIES};
use crate::cli::tui::theme::THEME;

pub fn draw(frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(ABOUT_TITLE, THEME.heading())),
        Line::from(Span::styled(ABOUT_TAGLINE, THEME.muted())),
        Line::default(),
        Line::from(ABOUT_WHY),
        Line::default(),
        Line::from(Span::styled("What's Included", THEME.heading())),
    ];

    for tech in TECHNOLOGIES {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<20}", tech.name),
                THEME.text().add_modifier(Modifier::BOLD),
            ),
            Span::raw(tech.description),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title("About").borders(Borders::ALL))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
