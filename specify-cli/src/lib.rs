//! Specify CLI library
//!
//! Scaffolds new Specify projects from the latest template release: resolves
//! a template archive by AI-assistant flavor, downloads it, extracts it into
//! a target directory, and optionally initializes a git repository.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

pub mod banner;
pub mod commands;
pub mod error;
pub mod git;
pub mod install;
pub mod release;
pub mod tools;
pub mod ui;

pub use error::{Error, Result};

use ui::select::SelectOption;

/// AI assistant flavor selecting which template variant to download
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Assistant {
    /// GitHub Copilot (default)
    #[default]
    Copilot,
    /// Claude Code
    Claude,
    /// Gemini CLI
    Gemini,
}

impl Assistant {
    /// All flavors, in presentation order
    pub const ALL: [Self; 3] = [Self::Copilot, Self::Claude, Self::Gemini];

    /// Short key used in CLI flags and asset names
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Copilot => "copilot",
            Self::Claude => "claude",
            Self::Gemini => "gemini",
        }
    }

    /// Human-readable label shown in the selection menu
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Copilot => "GitHub Copilot",
            Self::Claude => "Claude Code",
            Self::Gemini => "Gemini CLI",
        }
    }

    /// Executable and install hint for the assistant's own CLI, if it has one
    #[must_use]
    pub const fn agent_tool(self) -> Option<(&'static str, &'static str)> {
        match self {
            // Copilot ships with supported IDEs; there is no CLI to probe.
            Self::Copilot => None,
            Self::Claude => Some((
                "claude",
                "Install from: https://docs.anthropic.com/en/docs/claude-code/setup",
            )),
            Self::Gemini => Some((
                "gemini",
                "Install from: https://github.com/google-gemini/gemini-cli",
            )),
        }
    }

    /// Parse a flavor key
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSelection`] listing valid choices when the key
    /// is not a known flavor.
    pub fn from_key(key: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.key() == key)
            .ok_or_else(|| Error::invalid_selection(key, Self::available_keys()))
    }

    /// Comma-separated list of valid flavor keys
    #[must_use]
    pub fn available_keys() -> String {
        Self::ALL
            .into_iter()
            .map(Self::key)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Menu entries for interactive selection, in presentation order
    #[must_use]
    pub fn select_options() -> Vec<SelectOption> {
        Self::ALL
            .into_iter()
            .map(|a| SelectOption::new(a.key(), a.label()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_valid() {
        assert_eq!(Assistant::from_key("claude").unwrap(), Assistant::Claude);
        assert_eq!(Assistant::from_key("gemini").unwrap(), Assistant::Gemini);
        assert_eq!(Assistant::from_key("copilot").unwrap(), Assistant::Copilot);
    }

    #[test]
    fn test_from_key_invalid_lists_choices() {
        let err = Assistant::from_key("cursor").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("cursor"));
        assert!(message.contains("copilot"));
        assert!(message.contains("claude"));
        assert!(message.contains("gemini"));
    }

    #[test]
    fn test_select_options_order_matches_all() {
        let options = Assistant::select_options();
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].key, "copilot");
        assert_eq!(options[1].key, "claude");
        assert_eq!(options[2].key, "gemini");
    }

    #[test]
    fn test_copilot_has_no_agent_tool() {
        assert!(Assistant::Copilot.agent_tool().is_none());
        assert!(Assistant::Claude.agent_tool().is_some());
        assert!(Assistant::Gemini.agent_tool().is_some());
    }
}
