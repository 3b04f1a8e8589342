//! Alternate-screen session for the game UI.
//!
//! [`Screen`] owns the ratatui terminal. Dropping it puts the terminal back,
//! whether the event loop returned normally, failed, or unwound.

use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};
use std::panic;
use std::sync::Once;

use crossterm::{
    cursor::{Hide, Show},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub type FlagTerminal = Terminal<CrosstermBackend<Stdout>>;

static PANIC_HOOK: Once = Once::new();

pub struct Screen {
    terminal: FlagTerminal,
    restored: bool,
}

impl Screen {
    /// Switch to raw mode and the alternate screen.
    pub fn enter() -> io::Result<Self> {
        PANIC_HOOK.call_once(install_panic_hook);

        enable_raw_mode()?;
        let terminal = io::stdout()
            .execute(EnterAlternateScreen)
            .and_then(|stdout| stdout.execute(Hide).map(|_| ()))
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));

        match terminal {
            Ok(terminal) => Ok(Self {
                terminal,
                restored: false,
            }),
            Err(err) => {
                let _ = restore();
                Err(err)
            }
        }
    }

    /// Give the terminal back, reporting any failure.
    pub fn leave(mut self) -> io::Result<()> {
        self.restored = true;
        restore()
    }
}

impl Deref for Screen {
    type Target = FlagTerminal;

    fn deref(&self) -> &FlagTerminal {
        &self.terminal
    }
}

impl DerefMut for Screen {
    fn deref_mut(&mut self) -> &mut FlagTerminal {
        &mut self.terminal
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        if !self.restored {
            if let Err(err) = restore() {
                log::warn!("Failed to restore terminal: {}", err);
            }
        }
    }
}

fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(Show)?.execute(LeaveAlternateScreen)?;
    Ok(())
}

// Leave raw mode before the default hook prints the panic message.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}
