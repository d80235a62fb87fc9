//! Requirements check command

use std::time::Duration;

use anyhow::Result;
use console::style;

use crate::{banner, release, tools, Assistant};

const CONNECTIVITY_TIMEOUT: Duration = Duration::from_secs(5);

/// Check that required tools are installed
pub struct CheckCommand;

impl CheckCommand {
    /// Execute the command
    ///
    /// Informational only; missing optional tools never fail the command.
    ///
    /// # Errors
    ///
    /// Currently infallible; the signature matches the other commands.
    pub fn execute() -> Result<()> {
        banner::show();
        println!("{}", style("Checking Specify requirements...").bold());
        println!();

        println!("{}", style("Checking internet connectivity...").cyan());
        if release::check_connectivity(CONNECTIVITY_TIMEOUT) {
            println!("{} Internet connection available", style("✓").green());
        } else {
            println!(
                "{} No internet connection - required for downloading templates",
                style("✗").red()
            );
            println!(
                "{}",
                style("Please check your internet connection").yellow()
            );
        }

        println!();
        println!("{}", style("Optional tools:").cyan());
        let git_ok = report_tool("git", "https://git-scm.com/downloads");

        println!();
        println!("{}", style("Optional AI tools:").cyan());
        let mut any_agent = false;
        for assistant in Assistant::ALL {
            if let Some((tool, hint)) = assistant.agent_tool() {
                any_agent |= report_tool(tool, hint);
            }
        }

        println!();
        println!("{}", style("✓ Specify CLI is ready to use!").green());
        if !git_ok {
            println!(
                "{}",
                style("Consider installing git for repository management").yellow()
            );
        }
        if !any_agent {
            println!(
                "{}",
                style("Consider installing an AI assistant for the best experience").yellow()
            );
        }

        Ok(())
    }
}

fn report_tool(tool: &str, hint: &str) -> bool {
    let present = tools::check_tool(tool, hint);
    if present {
        println!("{} {} found", style("✓").green(), style(tool).bold());
    }
    present
}
