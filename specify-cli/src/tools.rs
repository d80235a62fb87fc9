//! External tool availability checks

use std::process::{Command, Stdio};

use console::style;

/// Check whether an executable responds on the search path
///
/// Prints a styled warning with the install hint when the tool is absent.
/// Advisory only; callers decide whether absence is fatal.
pub fn check_tool(tool: &str, install_hint: &str) -> bool {
    if is_tool_available(tool) {
        true
    } else {
        println!("{} {} not found", style("⚠").yellow(), style(tool).bold());
        println!("   Install with: {}", style(install_hint).cyan());
        false
    }
}

/// Probe for an executable by spawning `<tool> --version`
#[must_use]
pub fn is_tool_available(tool: &str) -> bool {
    Command::new(tool)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}
