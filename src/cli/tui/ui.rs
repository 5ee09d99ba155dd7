//! Raw-mode terminal session

use std::io::{stdout, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode on the alternate screen for as long as the session lives.
///
/// [`TerminalSession::restore`] hands the terminal back and reports
/// failures; dropping an unrestored session (an early `?` in the caller)
/// restores it too, ignoring errors.
pub struct TerminalSession {
    terminal: CrosstermTerminal,
    active: bool,
}

impl TerminalSession {
    pub fn start() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;

        let entered = execute!(stdout(), EnterAlternateScreen, Hide)
            .map_err(anyhow::Error::from)
            .and_then(|_| Ok(Terminal::new(CrosstermBackend::new(stdout()))?));

        match entered {
            Ok(terminal) => Ok(Self {
                terminal,
                active: true,
            }),
            Err(e) => {
                let _ = leave_screen();
                Err(e.context("Failed to enter the alternate screen"))
            }
        }
    }

    pub fn terminal(&mut self) -> &mut CrosstermTerminal {
        &mut self.terminal
    }

    /// Leaves raw mode and the alternate screen, showing the cursor again
    pub fn restore(mut self) -> Result<()> {
        self.active = false;
        leave_screen().context("Failed to restore the terminal")
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            let _ = leave_screen();
        }
    }
}

fn leave_screen() -> Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}
