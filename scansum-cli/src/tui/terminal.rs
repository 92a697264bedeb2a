//! Terminal session with RAII teardown.

use std::io;

use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Raw-mode + alternate-screen session owning the ratatui terminal.
/// Dropping it restores the terminal, including on panic.
pub struct TuiSession {
    pub term: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TuiSession {
    pub fn open() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        crossterm::execute!(io::stdout(), EnterAlternateScreen)?;
        let mut term = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        term.clear()?;
        Ok(Self { term })
    }
}

impl Drop for TuiSession {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen);
    }
}
