//! Raw-mode terminal session that restores itself.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, warn};

/// Keeps the terminal in raw mode on the alternate screen while alive.
///
/// Dropping the guard leaves the alternate screen, shows the cursor and
/// turns raw mode off. This also runs when the event loop returns an error
/// or panics.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode and switches `out` to the alternate screen.
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        // Raw mode is on, so every exit from here must go through Drop.
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen)?;
        debug!("Terminal in raw mode");
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let raw = disable_raw_mode();
        let screen = execute!(self.out, LeaveAlternateScreen, Show);
        match raw.and(screen) {
            Ok(()) => debug!("Terminal restored"),
            Err(err) => warn!(error = %err, "Failed to restore terminal"),
        }
    }
}
