//! End-to-end install tests over real zip archives

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use specify_cli_lib::install::{install_archive, InstallTarget};
use specify_cli_lib::Error;

/// Build a zip whose entries all sit under one wrapping directory, the way
/// source-hosting exports are laid out
fn wrapped_template_zip(dir: &Path) -> std::path::PathBuf {
    let zip_path = dir.join("template-claude-v1.zip");
    let file = fs::File::create(&zip_path).unwrap();
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    writer.add_directory("sdd-claude/", options).unwrap();
    writer.start_file("sdd-claude/README.md", options).unwrap();
    writer.write_all(b"# Template\n").unwrap();
    writer.add_directory("sdd-claude/docs/", options).unwrap();
    writer
        .start_file("sdd-claude/docs/guide.md", options)
        .unwrap();
    writer.write_all(b"guide\n").unwrap();
    writer.finish().unwrap();

    zip_path
}

/// Build a zip with flat top-level content, the way this project's own
/// release process produces archives
fn flat_template_zip(dir: &Path) -> std::path::PathBuf {
    let zip_path = dir.join("template-claude-v2.zip");
    let file = fs::File::create(&zip_path).unwrap();
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    writer.start_file("README.md", options).unwrap();
    writer.write_all(b"# Flat\n").unwrap();
    writer.add_directory("docs/", options).unwrap();
    writer.start_file("docs/guide.md", options).unwrap();
    writer.write_all(b"flat guide\n").unwrap();
    writer.finish().unwrap();

    zip_path
}

#[test]
fn create_mode_flattens_wrapping_directory() {
    let scratch = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    let archive = wrapped_template_zip(scratch.path());
    let target_path = workspace.path().join("my-project");

    let report = install_archive(&archive, &InstallTarget::Create(target_path.clone())).unwrap();

    // Wrapper contents, not the wrapper itself, land at the target root
    assert!(target_path.join("README.md").exists());
    assert!(target_path.join("docs/guide.md").exists());
    assert!(!target_path.join("sdd-claude").exists());
    assert!(report.overwritten.is_empty());

    // Archive is cleaned up unconditionally
    assert!(!archive.exists());
}

#[test]
fn create_mode_keeps_flat_content_as_is() {
    let scratch = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    let archive = flat_template_zip(scratch.path());
    let target_path = workspace.path().join("my-project");

    install_archive(&archive, &InstallTarget::Create(target_path.clone())).unwrap();

    assert_eq!(
        fs::read_to_string(target_path.join("README.md")).unwrap(),
        "# Flat\n"
    );
    assert!(target_path.join("docs/guide.md").exists());
}

#[test]
fn create_mode_into_existing_path_fails_untouched() {
    let scratch = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    let archive = wrapped_template_zip(scratch.path());
    let target_path = workspace.path().join("occupied");
    fs::create_dir(&target_path).unwrap();
    fs::write(target_path.join("precious.txt"), "keep me").unwrap();

    let err = install_archive(&archive, &InstallTarget::Create(target_path.clone())).unwrap_err();

    assert!(matches!(err, Error::AlreadyExists { .. }));
    assert_eq!(
        fs::read_to_string(target_path.join("precious.txt")).unwrap(),
        "keep me"
    );
    assert!(!target_path.join("README.md").exists());
    // Archive cleanup happens on failure too
    assert!(!archive.exists());
}

#[test]
fn merge_mode_overwrites_files_and_merges_directories() {
    let scratch = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    let archive = wrapped_template_zip(scratch.path());

    fs::write(dest.path().join("README.md"), "old readme").unwrap();
    fs::create_dir(dest.path().join("docs")).unwrap();
    fs::write(dest.path().join("docs/notes.md"), "my notes").unwrap();

    let report = install_archive(
        &archive,
        &InstallTarget::MergeInto(dest.path().to_path_buf()),
    )
    .unwrap();

    // File collision: overwritten, with a recorded warning
    assert_eq!(
        fs::read_to_string(dest.path().join("README.md")).unwrap(),
        "# Template\n"
    );
    assert!(report
        .overwritten
        .iter()
        .any(|p| p.as_os_str() == "README.md"));

    // Directory collision: merged, pre-existing unrelated files survive
    assert!(report.merged_dirs.iter().any(|p| p.as_os_str() == "docs"));
    assert_eq!(
        fs::read_to_string(dest.path().join("docs/notes.md")).unwrap(),
        "my notes"
    );
    assert_eq!(
        fs::read_to_string(dest.path().join("docs/guide.md")).unwrap(),
        "guide\n"
    );
}

#[test]
fn merge_mode_into_empty_directory_copies_everything() {
    let scratch = TempDir::new().unwrap();
    let dest = TempDir::new().unwrap();
    let archive = flat_template_zip(scratch.path());

    let report = install_archive(
        &archive,
        &InstallTarget::MergeInto(dest.path().to_path_buf()),
    )
    .unwrap();

    assert!(report.overwritten.is_empty());
    assert!(report.merged_dirs.is_empty());
    assert!(dest.path().join("README.md").exists());
    assert!(dest.path().join("docs/guide.md").exists());
}

#[test]
fn corrupt_archive_fails_without_creating_target() {
    let scratch = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    let archive = scratch.path().join("template-claude-v1.zip");
    fs::write(&archive, b"this is not a zip file").unwrap();
    let target_path = workspace.path().join("my-project");

    let err = install_archive(&archive, &InstallTarget::Create(target_path.clone())).unwrap_err();

    assert!(matches!(err, Error::ExtractFailed { .. }));
    assert!(!target_path.exists());
    assert!(!archive.exists());
}
