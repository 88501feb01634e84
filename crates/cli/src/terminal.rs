//! Terminal setup/teardown helpers for the CLI UI.
use std::io;

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};

const WINDOW_TITLE: &str = "Conway's Game of Life";

pub fn init() -> Result<()> {
    enable_raw_mode()?;
    execute!(
        io::stdout(),
        EnterAlternateScreen,
        SetTitle(WINDOW_TITLE),
        Hide
    )?;
    Ok(())
}

pub fn restore() -> Result<()> {
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Restores the terminal on every exit path, including panics.
pub struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore();
    }
}

/// Source of the terminal's current character dimensions.
///
/// A seam so the controller can be exercised in tests without a real
/// terminal behind it.
pub trait SizeSource {
    fn size(&self) -> Result<(u16, u16)>;
}

/// Live terminal dimensions via crossterm.
pub struct CrosstermSize;

impl SizeSource for CrosstermSize {
    fn size(&self) -> Result<(u16, u16)> {
        Ok(crossterm::terminal::size()?)
    }
}
