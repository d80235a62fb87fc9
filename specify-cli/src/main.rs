//! Specify CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use specify_cli_lib::banner;
use specify_cli_lib::commands::{CheckCommand, InitCommand};

#[derive(Parser)]
#[command(name = "specify")]
#[command(version)]
#[command(about = "Setup tool for Specify spec-driven development projects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new Specify project from the latest template
    Init {
        /// Name for the new project directory (omit when using --here)
        project_name: Option<String>,

        /// AI assistant to use: copilot, claude, or gemini
        #[arg(long = "ai", value_name = "AI")]
        ai: Option<String>,

        /// Skip checks for AI agent tools like Claude Code
        #[arg(long)]
        ignore_agent_tools: bool,

        /// Skip git repository initialization
        #[arg(long)]
        no_git: bool,

        /// Initialize in the current directory instead of creating a new one
        #[arg(long)]
        here: bool,
    },
    /// Check that all required tools are installed
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init {
            project_name,
            ai,
            ignore_agent_tools,
            no_git,
            here,
        }) => {
            let cmd = InitCommand::new(project_name, ai, ignore_agent_tools, no_git, here)?;
            cmd.execute()?;
        }
        Some(Commands::Check) => {
            CheckCommand::execute()?;
        }
        None => {
            banner::show();
            println!(
                "{}",
                style("Run 'specify --help' for usage information").dim()
            );
        }
    }

    Ok(())
}
