//! Git repository detection and initialization

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Fixed message for the initial commit
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit from Specify template";

/// Check whether the path is inside a git working tree
#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    if !path.is_dir() {
        return false;
    }

    Command::new("git")
        .current_dir(path)
        .args(["rev-parse", "--is-inside-work-tree"])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Initialize a repository rooted at the path, stage all files, and create
/// the initial commit
///
/// No-ops when the path is already inside a working tree.
///
/// # Errors
///
/// Returns [`Error::RepoInitFailed`] when any git step fails. Callers treat
/// this as a soft warning; it never fails the overall run.
pub fn init_repository(path: &Path) -> Result<()> {
    if is_git_repo(path) {
        return Ok(());
    }

    run_git(path, &["init"])?;
    run_git(path, &["add", "."])?;
    run_git(path, &["commit", "-m", INITIAL_COMMIT_MESSAGE])?;
    Ok(())
}

fn run_git(path: &Path, args: &[&str]) -> Result<()> {
    let output = Command::new("git")
        .current_dir(path)
        .args(args)
        .output()
        .map_err(|e| Error::repo_init_failed(format!("failed to run git: {e}")))?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(Error::repo_init_failed(format!(
            "git {} failed: {}",
            args.join(" "),
            stderr.trim()
        )))
    }
}
