//! Template archive installation
//!
//! Extracts the downloaded archive into a disposable staging area, detects
//! whether the archive carries a single wrapping directory (source-hosting
//! exports) or flat content (this project's own release layout), then either
//! populates a freshly created directory or merges into an existing one.
//! Merge mode performs no rollback on partial failure; files already copied
//! stay in place.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use walkdir::WalkDir;
use zip::ZipArchive;

use crate::error::{Error, Result};

/// Where and how the template is installed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallTarget {
    /// Create this directory; it must not exist yet
    Create(PathBuf),
    /// Merge into this existing, possibly non-empty directory
    MergeInto(PathBuf),
}

impl InstallTarget {
    /// The target directory path
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Create(path) | Self::MergeInto(path) => path,
        }
    }
}

/// What the install touched at the destination
#[derive(Debug, Default)]
pub struct InstallReport {
    /// Existing files that were overwritten (merge mode)
    pub overwritten: Vec<PathBuf>,
    /// Existing directories that received merged content (merge mode)
    pub merged_dirs: Vec<PathBuf>,
}

/// Extract the archive and install it at the target
///
/// The staging area and the archive file are removed unconditionally, on
/// success and on failure.
///
/// # Errors
///
/// Returns [`Error::AlreadyExists`] when a create-mode target is occupied
/// (checked before anything is written), or [`Error::ExtractFailed`] on any
/// extraction or copy error. A partially created create-mode target is
/// removed best-effort; merge mode leaves already-merged files in place.
pub fn install_archive(archive: &Path, target: &InstallTarget) -> Result<InstallReport> {
    let outcome = extract_and_install(archive, target);
    let _ = fs::remove_file(archive);
    outcome
}

fn extract_and_install(archive: &Path, target: &InstallTarget) -> Result<InstallReport> {
    // TempDir cleans the staging area up on drop, error paths included
    let staging = TempDir::new()?;
    extract_zip(archive, staging.path())?;
    let source_root = effective_source_root(staging.path())?;

    match target {
        InstallTarget::Create(path) => {
            if path.exists() {
                return Err(Error::already_exists(path.display().to_string()));
            }
            fs::create_dir_all(path)?;
            if let Err(e) = copy_tree(&source_root, path) {
                let _ = fs::remove_dir_all(path);
                return Err(e);
            }
            Ok(InstallReport::default())
        }
        InstallTarget::MergeInto(path) => merge_tree(&source_root, path),
    }
}

/// Determine the effective source root of a staged extraction
///
/// Exactly one top-level entry that is a directory means the archive wraps
/// its content (typical of source-hosting exports); its contents are the
/// source root. Anything else means flat content and the staging area itself
/// is the root.
///
/// # Errors
///
/// Returns an IO error if the staging area cannot be read.
pub fn effective_source_root(staging: &Path) -> Result<PathBuf> {
    let entries: Vec<_> = fs::read_dir(staging)?.collect::<std::io::Result<Vec<_>>>()?;

    if entries.len() == 1 && entries[0].file_type()?.is_dir() {
        Ok(entries[0].path())
    } else {
        Ok(staging.to_path_buf())
    }
}

fn extract_zip(archive: &Path, dest: &Path) -> Result<()> {
    let file = fs::File::open(archive)
        .map_err(|e| Error::extract_failed(format!("cannot open {}: {e}", archive.display())))?;
    let mut zip = ZipArchive::new(file)
        .map_err(|e| Error::extract_failed(format!("unreadable archive: {e}")))?;
    zip.extract(dest)
        .map_err(|e| Error::extract_failed(format!("extraction error: {e}")))
}

/// Recursively copy every entry under `src` into `dest`, preserving
/// relative paths. Existing files are overwritten; nothing is deleted.
fn copy_tree(src: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| Error::extract_failed(format!("walk failed: {e}")))?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| Error::extract_failed(format!("path outside source root: {e}")))?;
        if rel.as_os_str().is_empty() {
            continue;
        }

        let target = dest.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| {
                Error::extract_failed(format!("cannot create {}: {e}", target.display()))
            })?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::extract_failed(format!("cannot create {}: {e}", parent.display()))
                })?;
            }
            fs::copy(entry.path(), &target).map_err(|e| {
                Error::extract_failed(format!("cannot copy to {}: {e}", target.display()))
            })?;
        }
    }
    Ok(())
}

fn merge_tree(source_root: &Path, dest: &Path) -> Result<InstallReport> {
    let mut report = InstallReport::default();

    for entry in fs::read_dir(source_root)? {
        let entry = entry?;
        let name = PathBuf::from(entry.file_name());
        let target = dest.join(&name);

        if entry.file_type()?.is_dir() {
            if target.exists() {
                report.merged_dirs.push(name);
            }
            copy_tree(&entry.path(), &target)?;
        } else {
            if target.exists() {
                report.overwritten.push(name);
            }
            fs::copy(entry.path(), &target).map_err(|e| {
                Error::extract_failed(format!("cannot copy to {}: {e}", target.display()))
            })?;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_single_wrapping_dir_is_source_root() {
        let staging = TempDir::new().unwrap();
        touch(&staging.path().join("wrapper/README.md"), "hi");
        touch(&staging.path().join("wrapper/src/main.rs"), "fn main() {}");

        let root = effective_source_root(staging.path()).unwrap();
        assert_eq!(root, staging.path().join("wrapper"));
    }

    #[test]
    fn test_multiple_entries_use_staging_root() {
        let staging = TempDir::new().unwrap();
        touch(&staging.path().join("README.md"), "hi");
        fs::create_dir_all(staging.path().join("src")).unwrap();

        let root = effective_source_root(staging.path()).unwrap();
        assert_eq!(root, staging.path());
    }

    #[test]
    fn test_single_top_level_file_uses_staging_root() {
        let staging = TempDir::new().unwrap();
        touch(&staging.path().join("README.md"), "hi");

        let root = effective_source_root(staging.path()).unwrap();
        assert_eq!(root, staging.path());
    }

    #[test]
    fn test_merge_overwrites_file_and_records_warning() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        touch(&source.path().join("README.md"), "from template");
        touch(&dest.path().join("README.md"), "pre-existing");

        let report = merge_tree(source.path(), dest.path()).unwrap();

        assert_eq!(report.overwritten, vec![PathBuf::from("README.md")]);
        let content = fs::read_to_string(dest.path().join("README.md")).unwrap();
        assert_eq!(content, "from template");
    }

    #[test]
    fn test_merge_keeps_unrelated_files_in_colliding_dir() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        touch(&source.path().join("docs/guide.md"), "guide");
        touch(&dest.path().join("docs/notes.md"), "my notes");

        let report = merge_tree(source.path(), dest.path()).unwrap();

        assert_eq!(report.merged_dirs, vec![PathBuf::from("docs")]);
        assert_eq!(
            fs::read_to_string(dest.path().join("docs/notes.md")).unwrap(),
            "my notes"
        );
        assert_eq!(
            fs::read_to_string(dest.path().join("docs/guide.md")).unwrap(),
            "guide"
        );
    }

    #[test]
    fn test_merge_copies_fresh_entries_straight_in() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        touch(&source.path().join("new.txt"), "new");
        touch(&source.path().join("dir/file.txt"), "nested");

        let report = merge_tree(source.path(), dest.path()).unwrap();

        assert!(report.overwritten.is_empty());
        assert!(report.merged_dirs.is_empty());
        assert!(dest.path().join("new.txt").exists());
        assert!(dest.path().join("dir/file.txt").exists());
    }

    #[test]
    fn test_copy_tree_preserves_relative_paths() {
        let source = TempDir::new().unwrap();
        let dest = TempDir::new().unwrap();
        touch(&source.path().join("a/b/c.txt"), "deep");

        copy_tree(source.path(), dest.path()).unwrap();

        assert_eq!(
            fs::read_to_string(dest.path().join("a/b/c.txt")).unwrap(),
            "deep"
        );
    }
}
