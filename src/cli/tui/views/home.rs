//! Home page: welcome, shortcuts and feature list

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::cli::pages::{FEATURES, HOME_TAGLINE, HOME_TITLE};
use crate::cli::tui::app::App;
use crate::cli::tui::theme::THEME;
use crate::domain::TodoCounts;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(HOME_TITLE, THEME.heading())),
        Line::from(Span::styled(HOME_TAGLINE, THEME.muted())),
        Line::default(),
        Line::from(vec![
            Span::styled("[t] Try the Todo Demo", THEME.success()),
            Span::raw("    "),
            Span::styled("[s] SpaceX Data", THEME.heading()),
        ]),
        Line::default(),
    ];

    // Greeting and quick stats for a logged-in user
    if let Some(user) = app.session().user() {
        let counts = TodoCounts::from_todos(app.todos().todos());
        lines.push(Line::from(Span::styled(
            format!("Hey {}!", user.name),
            THEME.heading(),
        )));
        lines.push(Line::from(vec![
            Span::raw(format!("Total {}", counts.total)),
            Span::raw("   "),
            Span::styled(format!("Active {}", counts.active), THEME.warning()),
            Span::raw("   "),
            Span::styled(format!("Completed {}", counts.completed), THEME.success()),
        ]));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled("Features & Technologies", THEME.heading())));
    for feature in FEATURES {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}: ", feature.title), THEME.text().add_modifier(Modifier::BOLD)),
            Span::raw(feature.description),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", feature.techs.join(", ")),
            THEME.muted(),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title("Home").borders(Borders::ALL))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
