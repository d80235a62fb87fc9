//! Template archive resolution
//!
//! Two interchangeable strategies produce one well-formed archive file in a
//! scratch directory, or fail: a direct HTTP strategy against the GitHub
//! release API, and a delegated strategy that shells out to the `gh` CLI.
//! Neither retries; network calls carry a fixed timeout.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use ureq::Agent;

use crate::error::{Error, Result};

/// GitHub repository hosting the template releases
pub const GITHUB_REPO_SLUG: &str = "localden/sdd";

/// Asset name prefix, completed with the flavor key
pub const ASSET_PREFIX: &str = "template-";

/// Archive extension of template assets
pub const ASSET_EXTENSION: &str = ".zip";

/// Environment variable selecting the resolution strategy
pub const STRATEGY_ENV: &str = "SPECIFY_TEMPLATE_STRATEGY";

const USER_AGENT: &str = "specify-cli";
const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);
const CHUNK_SIZE: usize = 8192;

/// One downloadable release asset
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    /// Asset file name
    pub name: String,
    /// Direct download URL
    pub browser_download_url: String,
    /// Size in bytes (zero when the listing omits it)
    #[serde(default)]
    pub size: u64,
}

/// Latest-release metadata
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Release tag
    pub tag_name: String,
    /// Candidate assets
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// How the template archive is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveStrategy {
    /// HTTP against the release API, streamed download
    Direct,
    /// Delegate to `gh release download`
    GithubCli,
}

impl ResolveStrategy {
    /// Pick the strategy from the environment; direct HTTP is the default
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(STRATEGY_ENV) {
            Ok(value) if value == "gh" => Self::GithubCli,
            _ => Self::Direct,
        }
    }
}

/// Resolve the template archive for a flavor into the scratch directory
///
/// # Errors
///
/// Returns [`Error::NotFound`] when no asset matches the flavor,
/// [`Error::DownloadFailed`] on transport or tool failure.
pub fn resolve_template(flavor: &str, scratch: &Path) -> Result<PathBuf> {
    match ResolveStrategy::from_env() {
        ResolveStrategy::Direct => resolve_direct(flavor, scratch),
        ResolveStrategy::GithubCli => resolve_with_gh(flavor, scratch),
    }
}

fn resolve_direct(flavor: &str, scratch: &Path) -> Result<PathBuf> {
    let agent = http_agent(DOWNLOAD_TIMEOUT);

    println!("{}", style("Fetching latest release information...").cyan());
    let release = fetch_latest_release(&agent)?;
    let asset = select_asset(&release, flavor)?;

    println!("{} {}", style("Found template:").cyan(), asset.name);
    println!("{} {} bytes", style("Size:").cyan(), asset.size);
    println!("{} {}", style("Release:").cyan(), release.tag_name);

    download_asset(&agent, asset, scratch)
}

/// Build a blocking HTTP agent with a fixed global timeout
#[must_use]
pub fn http_agent(timeout: Duration) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(timeout))
        .build()
        .into()
}

/// Probe connectivity against the GitHub API
#[must_use]
pub fn check_connectivity(timeout: Duration) -> bool {
    let agent = http_agent(timeout);
    agent
        .get("https://api.github.com")
        .header("User-Agent", USER_AGENT)
        .call()
        .is_ok()
}

/// Fetch the latest release listing from the GitHub API
///
/// # Errors
///
/// Returns [`Error::DownloadFailed`] on transport failure or an unparsable
/// response body.
pub fn fetch_latest_release(agent: &Agent) -> Result<Release> {
    let url = format!("https://api.github.com/repos/{GITHUB_REPO_SLUG}/releases/latest");
    let response = agent
        .get(&url)
        .header("User-Agent", USER_AGENT)
        .call()
        .map_err(|e| Error::download_failed(format!("failed to fetch release information: {e}")))?;

    let body = response
        .into_body()
        .read_to_string()
        .map_err(|e| Error::download_failed(format!("failed to read release information: {e}")))?;

    Ok(serde_json::from_str(&body)?)
}

/// Pick the asset matching a flavor
///
/// Filters to names containing `template-<flavor>` and ending in `.zip`.
/// With multiple matches, the first listed wins deterministically.
///
/// # Errors
///
/// Returns [`Error::NotFound`] listing the available asset names when
/// nothing matches.
pub fn select_asset<'a>(release: &'a Release, flavor: &str) -> Result<&'a ReleaseAsset> {
    let pattern = format!("{ASSET_PREFIX}{flavor}");
    release
        .assets
        .iter()
        .find(|asset| asset.name.contains(&pattern) && asset.name.ends_with(ASSET_EXTENSION))
        .ok_or_else(|| Error::not_found(flavor, available_names(release)))
}

fn available_names(release: &Release) -> String {
    if release.assets.is_empty() {
        "(none)".to_string()
    } else {
        release
            .assets
            .iter()
            .map(|asset| asset.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Stream an asset to disk, deleting any partial file on failure
///
/// # Errors
///
/// Returns [`Error::DownloadFailed`] on transport error; the partial file is
/// removed before returning.
pub fn download_asset(agent: &Agent, asset: &ReleaseAsset, scratch: &Path) -> Result<PathBuf> {
    let zip_path = scratch.join(&asset.name);
    println!("{}", style("Downloading template...").cyan());

    match stream_to_file(agent, asset, &zip_path) {
        Ok(()) => Ok(zip_path),
        Err(e) => {
            let _ = fs::remove_file(&zip_path);
            Err(e)
        }
    }
}

fn stream_to_file(agent: &Agent, asset: &ReleaseAsset, dest: &Path) -> Result<()> {
    let response = agent
        .get(&asset.browser_download_url)
        .header("User-Agent", USER_AGENT)
        .call()
        .map_err(|e| Error::download_failed(format!("failed to download {}: {e}", asset.name)))?;

    let mut reader = response.into_body().into_reader();
    let mut file = fs::File::create(dest)?;
    let progress = download_progress(asset.size);

    let mut buf = [0_u8; CHUNK_SIZE];
    loop {
        let n = reader
            .read(&mut buf)
            .map_err(|e| Error::download_failed(format!("transfer interrupted: {e}")))?;
        if n == 0 {
            break;
        }
        file.write_all(&buf[..n])?;
        progress.inc(n as u64);
    }

    file.flush()?;
    progress.finish_and_clear();
    println!("{} Downloaded: {}", style("✓").green(), asset.name);
    Ok(())
}

fn download_progress(total: u64) -> ProgressBar {
    if total == 0 {
        // No size reported; show activity only
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {bytes} downloaded")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    } else {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:30.cyan/blue}] {bytes}/{total_bytes}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    }
}

fn resolve_with_gh(flavor: &str, scratch: &Path) -> Result<PathBuf> {
    let pattern = format!("{ASSET_PREFIX}{flavor}-*{ASSET_EXTENSION}");
    println!("{}", style("Downloading template via GitHub CLI...").cyan());

    let output = Command::new("gh")
        .args([
            "release",
            "download",
            "--repo",
            GITHUB_REPO_SLUG,
            "--pattern",
            &pattern,
            "--dir",
        ])
        .arg(scratch)
        .output()
        .map_err(|e| Error::download_failed(format!("failed to run gh: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::download_failed(format!(
            "gh release download failed: {}",
            stderr.trim()
        )));
    }

    find_downloaded_archive(scratch, flavor)
}

/// Locate the one archive the delegated download left in the scratch dir
///
/// # Errors
///
/// Returns [`Error::NotFound`] when no file matches the flavor pattern.
pub fn find_downloaded_archive(scratch: &Path, flavor: &str) -> Result<PathBuf> {
    let prefix = format!("{ASSET_PREFIX}{flavor}-");
    let mut matches: Vec<PathBuf> = Vec::new();
    let mut seen: Vec<String> = Vec::new();

    for entry in fs::read_dir(scratch)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with(&prefix) && name.ends_with(ASSET_EXTENSION) {
            matches.push(entry.path());
        }
        seen.push(name);
    }

    // Deterministic pick when the glob somehow matched more than one
    matches.sort();
    matches.into_iter().next().ok_or_else(|| {
        let available = if seen.is_empty() {
            "(none)".to_string()
        } else {
            seen.join(", ")
        };
        Error::not_found(flavor, available)
    })
}
