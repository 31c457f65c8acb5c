//! CLI interface tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A `dupdir` command isolated from the user's configuration
fn dupdir(work_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("dupdir").unwrap();
    cmd.current_dir(work_dir)
        .env_remove("DUPDIR_CONFIG")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", work_dir.join(".config"));
    cmd
}

fn project(temp_dir: &TempDir) -> std::path::PathBuf {
    let source = temp_dir.path().join("app");
    fs::create_dir_all(source.join("src")).unwrap();
    fs::create_dir_all(source.join("target/debug")).unwrap();
    fs::write(source.join("src/main.rs"), "fn main() {}\n").unwrap();
    fs::write(source.join("target/debug/app"), "bin").unwrap();
    source
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("dupdir").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dupdir"));
}

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("dupdir").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "A CLI tool for duplicating a folder",
        ));
}

#[test]
fn test_named_duplicate() {
    let temp_dir = TempDir::new().unwrap();
    let source = project(&temp_dir);
    let expected = temp_dir.path().join("app-copy");

    dupdir(temp_dir.path())
        .arg(&source)
        .arg("--name")
        .arg("app-copy")
        .arg("--exclude")
        .arg("target")
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.to_string_lossy().into_owned()))
        .stderr(predicate::str::contains("Folder duplicated successfully: app-copy"));

    assert!(expected.join("src/main.rs").is_file());
    assert!(!expected.join("target").exists());
}

#[test]
fn test_current_directory_is_the_default_source() {
    let temp_dir = TempDir::new().unwrap();
    let source = project(&temp_dir);

    dupdir(&source)
        .arg("--name")
        .arg("from-cwd")
        .assert()
        .success();

    assert!(temp_dir.path().join("from-cwd/src/main.rs").is_file());
}

#[test]
fn test_existing_target_gets_suffix() {
    let temp_dir = TempDir::new().unwrap();
    let source = project(&temp_dir);
    fs::create_dir_all(temp_dir.path().join("app-copy")).unwrap();

    dupdir(temp_dir.path())
        .arg(&source)
        .args(["--name", "app-copy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("app-copy_1"));

    assert!(temp_dir.path().join("app-copy_1/src/main.rs").is_file());
}

#[test]
fn test_local_config_excludes() {
    let temp_dir = TempDir::new().unwrap();
    let source = project(&temp_dir);
    fs::write(temp_dir.path().join(".dupdir.yaml"), "excludePatterns:\n  - target\n").unwrap();

    dupdir(temp_dir.path())
        .arg(&source)
        .args(["--name", "configured"])
        .assert()
        .success();

    let copy = temp_dir.path().join("configured");
    assert!(copy.join("src").is_dir());
    assert!(!copy.join("target").exists());
}

#[test]
fn test_dry_run() {
    let temp_dir = TempDir::new().unwrap();
    let source = project(&temp_dir);

    dupdir(temp_dir.path())
        .arg(&source)
        .args(["--name", "planned", "--dry-run"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Dry run preview"));

    assert!(!temp_dir.path().join("planned").exists());
}

#[test]
fn test_missing_source_error() {
    let temp_dir = TempDir::new().unwrap();

    dupdir(temp_dir.path())
        .arg("missing")
        .args(["--name", "copy"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Failed to duplicate folder"))
        .stderr(predicate::str::contains("Source folder does not exist"));
}

#[test]
fn test_invalid_name_error() {
    let temp_dir = TempDir::new().unwrap();
    let source = project(&temp_dir);

    dupdir(temp_dir.path())
        .arg(&source)
        .args(["--name", "a/b"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Folder name cannot contain"));
}

#[test]
fn test_missing_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let source = project(&temp_dir);

    dupdir(temp_dir.path())
        .arg(&source)
        .args(["--config", "nonexistent.yaml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_invalid_yaml_config() {
    let temp_dir = TempDir::new().unwrap();
    let source = project(&temp_dir);
    let config_path = temp_dir.path().join("invalid.yaml");
    fs::write(&config_path, "excludePatterns: [\n").unwrap();

    dupdir(temp_dir.path())
        .arg(&source)
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse YAML"));
}

#[cfg(unix)]
#[test]
fn test_open_with_failing_command() {
    let temp_dir = TempDir::new().unwrap();
    let source = project(&temp_dir);

    dupdir(temp_dir.path())
        .arg(&source)
        .args(["--name", "opened", "--open-with", "false"])
        .assert()
        .failure()
        .code(5);

    // The copy stays even though opening failed
    assert!(temp_dir.path().join("opened/src/main.rs").is_file());
}

#[test]
fn test_dry_run_with_missing_source_fails() {
    let temp_dir = TempDir::new().unwrap();

    dupdir(temp_dir.path())
        .arg("missing")
        .args(["--name", "copy", "--dry-run"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Source folder does not exist"));
}
