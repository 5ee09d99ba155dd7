//! Todos page: form, filter tabs and the todo list

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::cli::tui::app::{App, InputMode};
use crate::cli::tui::theme::THEME;
use crate::cli::tui::utils::fit_width;
use crate::domain::{Filter, FilterView, FORM_LABEL, FORM_PLACEHOLDER};

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled("Todo Application", THEME.heading()))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Form
            Constraint::Length(1), // Validation error
            Constraint::Length(1), // Filter tabs
            Constraint::Min(1),    // List
        ])
        .split(inner);

    let view = FilterView::new(app.todos());

    draw_form(frame, app, chunks[0]);
    draw_error(frame, app, chunks[1]);
    draw_filters(frame, &view, chunks[2]);
    draw_list(frame, app, &view, chunks[3]);
}

fn draw_form(frame: &mut Frame, app: &App, area: Rect) {
    let typing = app.input_mode() == InputMode::Typing;
    let input = app.form().input();

    let content = if input.is_empty() {
        Span::styled(FORM_PLACEHOLDER, THEME.muted())
    } else {
        Span::raw(input)
    };

    let title = if typing {
        format!("{} [Enter] Add Todo", FORM_LABEL)
    } else {
        format!("{} [i] to type", FORM_LABEL)
    };

    let paragraph = Paragraph::new(Line::from(content)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(THEME.border(typing)),
    );
    frame.render_widget(paragraph, area);

    if typing {
        let offset = input.chars().count() as u16;
        let x = (area.x + 1 + offset).min(area.right().saturating_sub(2));
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn draw_error(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(error) = app.form().error() {
        frame.render_widget(
            Paragraph::new(error.to_string()).style(THEME.danger()),
            area,
        );
    }
}

fn draw_filters(frame: &mut Frame, view: &FilterView, area: Rect) {
    let mut spans = Vec::new();
    for filter in Filter::ALL {
        let style = if filter == view.filter {
            THEME.active_tab()
        } else {
            THEME.text()
        };
        spans.push(Span::styled(view.label(filter), style));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled("[f] switch", THEME.muted()));

    if view.can_clear_completed() {
        spans.push(Span::raw("   "));
        spans.push(Span::styled("[C] Clear Completed", THEME.danger()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_list(frame: &mut Frame, app: &App, view: &FilterView, area: Rect) {
    if view.visible.is_empty() {
        frame.render_widget(
            Paragraph::new(view.empty_message())
                .style(THEME.muted())
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::TOP)),
            area,
        );
        return;
    }

    let text_width = (area.width as usize).saturating_sub(22).max(10);

    let items: Vec<ListItem> = view
        .visible
        .iter()
        .map(|todo| {
            let (indicator, style) = if todo.completed {
                ("[x]", THEME.completed())
            } else {
                ("[ ]", THEME.text())
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", indicator)),
                Span::styled(fit_width(&todo.text, text_width), style),
                Span::styled(
                    format!("  {}", todo.created_at.format("%Y-%m-%d")),
                    THEME.muted(),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::TOP))
        .highlight_style(THEME.selection())
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if app.input_mode() == InputMode::Normal {
        state.select(Some(app.todo_index()));
    }

    frame.render_stateful_widget(list, area, &mut state);
}
