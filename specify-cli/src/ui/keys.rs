//! Keypress reading
//!
//! One capability: block until a single logical key event is available.
//! `console::Term` owns the platform-specific raw-mode handling and restores
//! the terminal on every exit path, so nothing here touches terminal state
//! directly.

use std::io;

use console::{Key, Term};

use crate::error::Result;

/// A normalized key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Enter / return
    Enter,
    /// Escape
    Escape,
    /// Ctrl-C
    Interrupt,
    /// Any literal character
    Char(char),
}

/// Source of key events
pub trait KeyInput {
    /// Block until exactly one key event is available
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_key(&mut self) -> Result<KeyEvent>;
}

/// Key events read from a real terminal
pub struct TermInput<'a> {
    term: &'a Term,
}

impl<'a> TermInput<'a> {
    /// Create a reader over the given terminal handle
    #[must_use]
    pub const fn new(term: &'a Term) -> Self {
        Self { term }
    }
}

impl KeyInput for TermInput<'_> {
    fn read_key(&mut self) -> Result<KeyEvent> {
        loop {
            match self.term.read_key() {
                Ok(Key::ArrowUp) => return Ok(KeyEvent::Up),
                Ok(Key::ArrowDown) => return Ok(KeyEvent::Down),
                Ok(Key::Enter) => return Ok(KeyEvent::Enter),
                Ok(Key::Escape) => return Ok(KeyEvent::Escape),
                // Raw mode delivers Ctrl-C as a literal ETX byte
                Ok(Key::Char('\u{3}')) => return Ok(KeyEvent::Interrupt),
                Ok(Key::Char(c)) => return Ok(KeyEvent::Char(c)),
                // Other keys (tab, home, page up, ...) carry no meaning here
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                    return Ok(KeyEvent::Interrupt);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
