//! Raw mode and alternate screen ownership for interactive screens.

use std::io::{self, Stdout};

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, warn};
use ratatui::{Terminal, backend::CrosstermBackend};

/// Terminal drawing to stdout through crossterm.
pub type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal while a select prompt or the storybook is on screen.
///
/// Creating it switches to raw mode and the alternate screen; dropping it
/// switches back, including when the screen exits through an error.
pub struct TerminalApp {
    terminal: TuiTerminal,
}

impl TerminalApp {
    /// # Errors
    ///
    /// Fails if the terminal refuses raw mode or the alternate screen. Raw mode
    /// is switched off again before the error is returned.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;

        let terminal = leave_raw_mode_on_err(open_alternate_screen())?;
        debug!("terminal: raw mode and alternate screen on");

        Ok(Self { terminal })
    }

    pub fn terminal(&mut self) -> &mut TuiTerminal {
        &mut self.terminal
    }
}

fn open_alternate_screen() -> io::Result<TuiTerminal> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    Terminal::new(CrosstermBackend::new(stdout)).inspect_err(|_| {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    })
}

/// Switches raw mode back off when `result` is an error, then hands it back.
fn leave_raw_mode_on_err<T>(result: io::Result<T>) -> io::Result<T> {
    if let Err(e) = &result {
        warn!("terminal: setup failed, leaving raw mode: {e}");
        let _ = disable_raw_mode();
    }
    result
}

impl Drop for TerminalApp {
    fn drop(&mut self) {
        // Best effort: the process may already be unwinding
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen, Show);
        debug!("terminal: raw mode and alternate screen off");
    }
}
