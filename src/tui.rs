//! Terminal ownership.
//!
//! Raw mode and the alternate screen are undone on every way out of the
//! program: normal return, `?` during setup, and panics.

use std::io::{self, stdout, Stdout};
use std::panic;

use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;

use crate::error::Result;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Holds the terminal in raw mode on the alternate screen until restored or
/// dropped
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    /// Take over the terminal. A failure after raw mode is enabled still
    /// restores it, because the guard already exists.
    pub fn enter() -> Result<(Self, Tui)> {
        enable_raw_mode()?;
        let guard = Self { restored: false };
        stdout().execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        Ok((guard, terminal))
    }

    /// Give the terminal back. Idempotent.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        restore()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::warn!(error = %e, "terminal restore failed");
        }
    }
}

/// Leave the alternate screen and raw mode. Both steps run even if the
/// first fails; the first error is returned.
pub fn restore() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = stdout().execute(LeaveAlternateScreen).map(|_| ());
    raw.and(screen)
}

/// Restore the terminal before the default hook prints the panic message
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore();
        previous(info);
    }));
}

/// The loop's own error wins over a restore failure
pub fn settle(run: Result<()>, restore: io::Result<()>) -> Result<()> {
    run?;
    restore?;
    Ok(())
}
