use std::io;

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

type SearchTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns the terminal while the search screen is up.
///
/// Raw mode and the alternate screen are undone exactly once, by `restore`
/// or, on early return or panic, by `Drop`.
pub struct TerminalManager {
    terminal: SearchTerminal,
    active: bool,
}

impl TerminalManager {
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                undo_setup(&mut io::stdout());
                return Err(e).context("Failed to create terminal");
            }
        };

        log::debug!("[TUI] terminal initialised");
        Ok(Self { terminal, active: true })
    }

    pub fn terminal_mut(&mut self) -> &mut SearchTerminal {
        &mut self.terminal
    }

    /// Restore the terminal, reporting failures
    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        self.terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        if self.active {
            // Already unwinding or returning early; nothing useful to do with errors
            undo_setup(self.terminal.backend_mut());
            let _ = self.terminal.show_cursor();
        }
    }
}

/// Best-effort undo of raw mode and the alternate screen
fn undo_setup<W: io::Write>(out: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(out, LeaveAlternateScreen);
}
