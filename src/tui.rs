//! Terminal setup and teardown.
//!
//! Raw mode, the alternate screen and mouse capture are enabled together in
//! [`init`] and undone in [`restore`]. A panic hook restores the terminal
//! before the report is printed.

use std::io::{self, Stdout, stdout};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

/// The terminal type the app draws into.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switches the terminal into TUI mode.
///
/// # Errors
///
/// Returns an error if the terminal modes cannot be changed.
pub fn init() -> io::Result<Tui> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    install_panic_hook();

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

/// Returns the terminal to its normal mode.
///
/// # Errors
///
/// Returns an error if the terminal modes cannot be changed.
pub fn restore() -> io::Result<()> {
    execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    disable_raw_mode()
}

fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(err) = restore() {
            tracing::error!("failed to restore terminal: {err}");
        }
        tracing::error!("panic: {panic_info}");
        hook(panic_info);
    }));
}
