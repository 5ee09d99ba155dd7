//! Shared styles for every view

use ratatui::style::{Color, Modifier, Style};

/// Named styles; views never pick raw colors themselves
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub primary: Color,
    pub success: Color,
    pub danger: Color,
    pub warning: Color,
    pub muted: Color,
}

pub const THEME: Theme = Theme {
    primary: Color::Cyan,
    success: Color::Green,
    danger: Color::Red,
    warning: Color::Yellow,
    muted: Color::DarkGray,
};

impl Theme {
    pub fn heading(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        Style::default()
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn danger(&self) -> Style {
        Style::default().fg(self.danger)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Border of a panel, highlighted when it has focus
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.primary)
        } else {
            Style::default()
        }
    }

    /// Active navigation tab or filter button
    pub fn active_tab(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn selection(&self) -> Style {
        Style::default().bg(self.muted).add_modifier(Modifier::BOLD)
    }

    /// Completed todos are dimmed and struck through
    pub fn completed(&self) -> Style {
        Style::default()
            .fg(self.muted)
            .add_modifier(Modifier::CROSSED_OUT)
    }
}
