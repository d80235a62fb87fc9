//! Project initialization command

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::{style, Term};
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};

use crate::install::{self, InstallTarget};
use crate::ui::SelectMenu;
use crate::{banner, git, release, tools, Assistant, Error};

/// Initialize a new Specify project from the latest template
pub struct InitCommand {
    project_name: Option<String>,
    assistant: Option<String>,
    ignore_agent_tools: bool,
    no_git: bool,
    here: bool,
}

impl InitCommand {
    /// Create a new command instance
    ///
    /// # Errors
    ///
    /// Returns an error when both a project name and `--here` are given, or
    /// when neither is.
    pub fn new(
        project_name: Option<String>,
        assistant: Option<String>,
        ignore_agent_tools: bool,
        no_git: bool,
        here: bool,
    ) -> Result<Self> {
        if here && project_name.is_some() {
            anyhow::bail!("Cannot specify both a project name and the --here flag");
        }
        if !here && project_name.is_none() {
            anyhow::bail!("Must specify either a project name or use the --here flag");
        }

        Ok(Self {
            project_name,
            assistant,
            ignore_agent_tools,
            no_git,
            here,
        })
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error on any fatal validation, download, or extraction
    /// failure. Git initialization failures are soft warnings only.
    pub fn execute(&self) -> Result<()> {
        banner::show();

        let Some((project_path, target)) = self.resolve_target()? else {
            return Ok(());
        };

        println!(
            "{} {}",
            style(if self.here {
                "Initializing in current directory:"
            } else {
                "Creating new project:"
            })
            .bold(),
            style(project_path.display()).green().bold()
        );
        println!();

        // Git is optional; its absence only skips repository initialization
        let mut git_available = true;
        if !self.no_git {
            println!("{}", style("Checking required tools...").bold());
            git_available = tools::check_tool("git", "https://git-scm.com/downloads");
            if !git_available {
                println!(
                    "{}",
                    style("Git not found - will skip repository initialization").yellow()
                );
            }
            println!();
        }

        let assistant = self.choose_assistant()?;
        println!(
            "{} {}",
            style("✓ Selected AI assistant:").green(),
            assistant.label()
        );

        if !self.ignore_agent_tools {
            check_agent_tool(assistant)?;
        }

        println!();
        println!(
            "{}",
            style("Setting up project from latest template...").bold()
        );

        let scratch = tempfile::tempdir().context("Failed to create scratch directory")?;
        let archive = release::resolve_template(assistant.key(), scratch.path())?;

        let spinner = step_spinner("Extracting template...")?;
        let report = install::install_archive(&archive, &target)?;
        spinner.finish_and_clear();

        for name in &report.merged_dirs {
            println!(
                "{} {}",
                style("Merging directory:").yellow(),
                name.display()
            );
        }
        for name in &report.overwritten {
            println!(
                "{} {}",
                style("Overwriting file:").yellow(),
                name.display()
            );
        }
        println!("{} Template installed", style("✓").green());

        self.init_git(&project_path, git_available);

        self.print_success(assistant);
        Ok(())
    }

    /// Work out the install target, prompting before a merge into a
    /// non-empty directory. `None` means the user declined.
    fn resolve_target(&self) -> Result<Option<(PathBuf, InstallTarget)>> {
        if self.here {
            let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
            let existing = fs::read_dir(&cwd)
                .context("Failed to read current directory")?
                .count();

            if existing > 0 {
                println!(
                    "{} Current directory is not empty ({existing} items)",
                    style("Warning:").yellow().bold()
                );
                println!(
                    "{}",
                    style("Template files will be merged with existing content and may overwrite existing files")
                        .yellow()
                );

                let proceed = Confirm::new()
                    .with_prompt("Do you want to continue?")
                    .default(false)
                    .interact()
                    .context("Failed to read confirmation")?;
                if !proceed {
                    println!("{}", style("Operation cancelled").yellow());
                    return Ok(None);
                }
            }

            Ok(Some((cwd.clone(), InstallTarget::MergeInto(cwd))))
        } else {
            // Validated in new(); the name is present on this branch
            let name = self.project_name.clone().unwrap_or_default();
            let path = PathBuf::from(&name);

            // Fatal before any network activity
            if path.exists() {
                return Err(Error::already_exists(name).into());
            }

            Ok(Some((path.clone(), InstallTarget::Create(path))))
        }
    }

    fn choose_assistant(&self) -> Result<Assistant> {
        if let Some(key) = &self.assistant {
            return Ok(Assistant::from_key(key)?);
        }

        let term = Term::stderr();
        let menu = SelectMenu::new(Assistant::select_options(), "Choose your AI assistant:")
            .with_default(Assistant::Copilot.key());
        let key = menu.interact(&term)?;
        Ok(Assistant::from_key(&key)?)
    }

    fn init_git(&self, path: &Path, git_available: bool) {
        println!();

        if self.no_git {
            println!(
                "{} Git initialization skipped (--no-git flag)",
                style("ℹ").cyan()
            );
            return;
        }

        if git::is_git_repo(path) {
            println!("{} Existing git repository detected", style("ℹ").yellow());
            println!("{} Skipping git initialization", style("✓").green());
            return;
        }

        if !git_available {
            println!(
                "{}",
                style("⚠ Git not available - skipping repository initialization").yellow()
            );
            println!(
                "   You can initialize git later with: {}",
                style("git init").cyan()
            );
            return;
        }

        println!("{}", style("Initializing git repository...").cyan());
        match git::init_repository(path) {
            Ok(()) => println!("{} Git repository initialized", style("✓").green()),
            // Never fatal; the project itself was created successfully
            Err(e) => println!(
                "{} Git repository initialization failed ({e}), but project was created successfully",
                style("⚠").yellow()
            ),
        }
    }

    fn print_success(&self, assistant: Assistant) {
        println!();
        println!(
            "{} {}",
            style("✨ Success!").green().bold(),
            "Your Specify project is ready."
        );
        println!();
        println!("{}", style("Next steps:").bold());

        let mut step = 1;
        if self.here {
            println!("{step}. You're already in the project directory!");
        } else if let Some(name) = &self.project_name {
            println!("{step}. {}", style(format!("cd {name}")).cyan());
        }
        step += 1;

        match assistant {
            Assistant::Claude => {
                println!("{step}. Open in VSCode and start using / commands with Claude Code");
                println!("   - Use {} to create specifications", style("/spec").cyan());
                println!(
                    "   - Use {} to create implementation plans",
                    style("/plan").cyan()
                );
                println!("   - Use {} to generate tasks", style("/tasks").cyan());
            }
            Assistant::Gemini => {
                println!("{step}. Use @ commands with Gemini CLI");
                println!(
                    "   - Run {} to create specifications",
                    style("gemini @spec").cyan()
                );
                println!(
                    "   - See {} for all available commands",
                    style("GEMINI.md").cyan()
                );
            }
            Assistant::Copilot => {
                println!(
                    "{step}. Open in VSCode and use natural language with GitHub Copilot"
                );
                println!("   - See .github/copilot-instructions.md for available commands");
            }
        }
        step += 1;

        println!("{step}. Read README.md for project overview");
        println!();
        println!(
            "{}",
            style("Happy coding with Specify! 🚀").yellow().bright().italic()
        );
    }
}

fn check_agent_tool(assistant: Assistant) -> Result<()> {
    let Some((tool, hint)) = assistant.agent_tool() else {
        return Ok(());
    };

    if tools::check_tool(tool, hint) {
        return Ok(());
    }

    println!();
    println!("{}", style("Required AI tool is missing!").red());
    println!(
        "{} Use --ignore-agent-tools to skip this check",
        style("Tip:").yellow()
    );
    Err(Error::tool_missing(tool, hint).into())
}

fn step_spinner(message: &'static str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("Failed to set progress style")?,
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    Ok(spinner)
}
