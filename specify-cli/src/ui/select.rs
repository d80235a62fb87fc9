//! Arrow-key selection menu
//!
//! Renders an ordered list of options, tracks a highlighted index, and
//! redraws on each key event. Navigation wraps at both ends. Enter confirms;
//! escape or Ctrl-C aborts with [`Error::Cancelled`], which callers must
//! propagate rather than swallow.

use console::{style, Term};

use super::keys::{KeyEvent, KeyInput, TermInput};
use crate::error::{Error, Result};

/// One selectable entry: a short key plus a human-readable label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Short key returned on selection
    pub key: String,
    /// Label shown in the menu
    pub label: String,
}

impl SelectOption {
    /// Create an option
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Highlighted-index arithmetic, kept separate from rendering
#[derive(Debug, Clone, Copy)]
struct Cursor {
    len: usize,
    index: usize,
}

impl Cursor {
    const fn new(len: usize, index: usize) -> Self {
        Self { len, index }
    }

    fn up(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    fn down(&mut self) {
        self.index = (self.index + 1) % self.len;
    }
}

/// Interactive arrow-key menu over an ordered option list
pub struct SelectMenu {
    options: Vec<SelectOption>,
    prompt: String,
    default_key: Option<String>,
}

impl SelectMenu {
    /// Create a menu over the given options
    pub fn new(options: Vec<SelectOption>, prompt: impl Into<String>) -> Self {
        Self {
            options,
            prompt: prompt.into(),
            default_key: None,
        }
    }

    /// Start with the given key highlighted (ignored if not present)
    #[must_use]
    pub fn with_default(mut self, key: impl Into<String>) -> Self {
        self.default_key = Some(key.into());
        self
    }

    /// Run the menu against a real terminal
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] on escape or Ctrl-C, or an IO error if
    /// the terminal cannot be read or written.
    ///
    /// # Panics
    ///
    /// Panics if the menu has no options.
    pub fn interact(&self, term: &Term) -> Result<String> {
        let mut input = TermInput::new(term);
        self.interact_with(term, &mut input)
    }

    /// Run the menu with an explicit key-event source
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cancelled`] on escape or Ctrl-C, or an IO error if
    /// the terminal cannot be written.
    ///
    /// # Panics
    ///
    /// Panics if the menu has no options.
    pub fn interact_with(&self, term: &Term, input: &mut dyn KeyInput) -> Result<String> {
        assert!(!self.options.is_empty(), "selection menu requires options");

        term.hide_cursor()?;
        let outcome = self.run_loop(term, input);
        term.show_cursor()?;

        let index = outcome?;
        let chosen = &self.options[index];
        term.write_line(&format!(
            "{} {}: {}",
            style("✓ Selected:").green().bold(),
            style(&chosen.key).cyan(),
            chosen.label
        ))?;
        Ok(chosen.key.clone())
    }

    fn run_loop(&self, term: &Term, input: &mut dyn KeyInput) -> Result<usize> {
        let mut cursor = Cursor::new(self.options.len(), self.start_index());
        self.draw(term, cursor.index)?;

        loop {
            match input.read_key()? {
                KeyEvent::Up => {
                    cursor.up();
                    self.redraw(term, cursor.index)?;
                }
                KeyEvent::Down => {
                    cursor.down();
                    self.redraw(term, cursor.index)?;
                }
                KeyEvent::Enter => {
                    term.clear_last_lines(self.line_count())?;
                    return Ok(cursor.index);
                }
                KeyEvent::Escape | KeyEvent::Interrupt => {
                    term.clear_last_lines(self.line_count())?;
                    term.write_line(&style("Selection cancelled").yellow().to_string())?;
                    return Err(Error::Cancelled);
                }
                // Literal characters are not state changes; no redraw
                KeyEvent::Char(_) => {}
            }
        }
    }

    fn start_index(&self) -> usize {
        self.default_key
            .as_ref()
            .and_then(|key| self.options.iter().position(|o| &o.key == key))
            .unwrap_or(0)
    }

    const fn line_count(&self) -> usize {
        // prompt + options + hint line
        self.options.len() + 2
    }

    fn draw(&self, term: &Term, highlighted: usize) -> Result<()> {
        term.write_line(&style(&self.prompt).bold().to_string())?;
        for (i, option) in self.options.iter().enumerate() {
            let line = format!("{}: {}", option.key, option.label);
            if i == highlighted {
                term.write_line(&format!(
                    "  {} {}",
                    style("▶").cyan(),
                    style(line).cyan().bright()
                ))?;
            } else {
                term.write_line(&format!("    {line}"))?;
            }
        }
        term.write_line(
            &style("Use ↑/↓ to navigate, Enter to select, Esc to cancel")
                .dim()
                .to_string(),
        )?;
        Ok(())
    }

    fn redraw(&self, term: &Term, highlighted: usize) -> Result<()> {
        term.clear_last_lines(self.line_count())?;
        self.draw(term, highlighted)
    }
}
