//! SpaceX launches page

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::cli::tui::app::{App, LaunchesState};
use crate::cli::tui::theme::THEME;
use crate::cli::tui::utils::fit_width;
use crate::graphql::{Launch, LaunchOutcome};

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    match app.launches() {
        LaunchesState::Idle | LaunchesState::Loading => draw_loading(frame, area),
        LaunchesState::Failed(message) => draw_failed(frame, message, area),
        LaunchesState::Loaded(launches) => draw_loaded(frame, app, launches, area),
    }
}

fn draw_loading(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled("Loading SpaceX launches...", THEME.muted())),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().title("SpaceX").borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

fn draw_failed(frame: &mut Frame, message: &str, area: Rect) {
    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(message.to_string(), THEME.text())),
        Line::default(),
        Line::from(Span::styled("[r] Try Again", THEME.heading())),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(Span::styled("Failed to Load Data", THEME.danger()))
            .borders(Borders::ALL)
            .border_style(THEME.danger()),
    );

    frame.render_widget(paragraph, area);
}

fn draw_loaded(frame: &mut Frame, app: &App, launches: &[Launch], area: Rect) {
    let block = Block::default()
        .title(Span::styled("Recent SpaceX Launches", THEME.heading()))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(format!("{} launches loaded", launches.len())).style(THEME.muted()),
        chunks[0],
    );

    let width = (chunks[1].width as usize).saturating_sub(6).max(10);
    let items: Vec<ListItem> = launches.iter().map(|l| launch_card(l, width)).collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::TOP))
        .highlight_style(THEME.selection())
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !launches.is_empty() {
        state.select(Some(app.launch_index()));
    }

    frame.render_stateful_widget(list, chunks[1], &mut state);
}

/// Three-line card: mission, date and rocket with the outcome, links
fn launch_card(launch: &Launch, width: usize) -> ListItem<'static> {
    let outcome = launch.outcome();
    let outcome_style = match outcome {
        LaunchOutcome::Success => THEME.success(),
        LaunchOutcome::Failed => THEME.danger(),
        LaunchOutcome::Unknown => THEME.muted(),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            fit_width(&launch.mission_name, width),
            THEME.text().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!("  {}", launch.launch_date()), THEME.muted()),
            Span::raw(format!(
                "  {} ({})  ",
                launch.rocket.rocket_name, launch.rocket.rocket_type
            )),
            Span::styled(outcome.label(), outcome_style),
        ]),
    ];

    if let Some(ref wiki) = launch.links.wikipedia {
        lines.push(Line::from(Span::styled(
            format!("  {}", fit_width(wiki, width)),
            THEME.muted(),
        )));
    }

    ListItem::new(lines)
}
