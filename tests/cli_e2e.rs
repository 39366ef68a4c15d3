#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn collector_cmd() -> Command {
    Command::new(cargo_bin("code_collector"))
}

fn config_cmd() -> Command {
    Command::new(cargo_bin("collect_from_config"))
}

fn write_project(root: &Path) {
    fs::create_dir_all(root.join("proj/.git")).unwrap();
    fs::create_dir_all(root.join("proj/build")).unwrap();
    fs::create_dir_all(root.join("proj/src")).unwrap();
    fs::write(root.join("proj/a.py"), "x=1").unwrap();
    fs::write(root.join("proj/.git/config"), "[core]").unwrap();
    fs::write(root.join("proj/build/gen.py"), "generated=True").unwrap();
    fs::write(root.join("proj/src/lib.rs"), "pub fn f() {}").unwrap();
}

#[test]
fn test_cli_collects_matching_files() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path());

    collector_cmd()
        .current_dir(temp.path())
        .args(["proj", "-f", ".py", "-i", "proj/build", "-o", "out.txt"])
        .assert()
        .success();

    let text = fs::read_to_string(temp.path().join("out.txt")).unwrap();
    assert!(text.starts_with("Project Structure:\n"));
    assert!(text.contains("/proj/\n"));
    assert!(text.contains("\n\nCode Files:\n================\n"));
    assert!(text.ends_with("Filepath: proj/a.py\nx=1\n================\n"));
    assert!(!text.contains("Filepath: proj/build/gen.py"));
    assert!(!text.contains("[core]"));
    assert!(!text.contains("lib.rs\npub fn"));
}

#[test]
fn test_cli_defaults_to_all_formats() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path());

    collector_cmd()
        .current_dir(temp.path())
        .arg("proj/src")
        .assert()
        .success();

    let text = fs::read_to_string(temp.path().join("collected_code.txt")).unwrap();
    assert!(text.contains("Filepath: proj/src/lib.rs\npub fn f() {}\n================\n"));
}

#[test]
fn test_cli_keeps_dotfile_listed_by_full_path() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path());
    fs::write(temp.path().join("proj/.env"), "KEY=1").unwrap();

    collector_cmd()
        .current_dir(temp.path())
        .args(["proj", "-i", "proj/.env", "-o", "out.txt"])
        .assert()
        .success();

    let text = fs::read_to_string(temp.path().join("out.txt")).unwrap();
    assert!(text.contains("    ├── .env\n"));
    assert!(!text.contains(".git"));
    assert!(text.contains("Filepath: proj/.env\nKEY=1\n================\n"));
}

#[test]
fn test_cli_single_file_tree_is_basename() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path());

    collector_cmd()
        .current_dir(temp.path())
        .args(["proj/a.py", "-o", "out.txt"])
        .assert()
        .success();

    let text = fs::read_to_string(temp.path().join("out.txt")).unwrap();
    assert_eq!(
        text,
        "Project Structure:\na.py\n\nCode Files:\n================\nFilepath: proj/a.py\nx=1\n================\n"
    );
}

#[test]
fn test_cli_rejects_missing_path() {
    let temp = TempDir::new().unwrap();

    collector_cmd()
        .current_dir(temp.path())
        .arg("does-not-exist")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("does not exist"));

    assert!(!temp.path().join("collected_code.txt").exists());
}

#[test]
fn test_cli_fails_on_undecodable_file() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("proj")).unwrap();
    fs::write(temp.path().join("proj/blob.bin"), [0xff, 0xfe, 0xfd]).unwrap();

    collector_cmd()
        .current_dir(temp.path())
        .arg("proj")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn test_config_variant_collects() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path());
    fs::write(
        temp.path().join("config.yaml"),
        "paths_to_search: [proj]\nfile_formats: ['.py']\nignore_files: []\nignore_dirs: [proj/build]\n",
    )
    .unwrap();

    config_cmd().current_dir(temp.path()).assert().success();

    let text = fs::read_to_string(temp.path().join("collected_code.txt")).unwrap();
    assert_eq!(text, "Filepath: proj/a.py\nx=1\n================\n");
}

#[test]
fn test_config_variant_keeps_dotfiles() {
    let temp = TempDir::new().unwrap();
    write_project(temp.path());
    fs::write(
        temp.path().join("config.yaml"),
        "paths_to_search: [proj]\nfile_formats: [config]\nignore_files: []\nignore_dirs: []\n",
    )
    .unwrap();

    config_cmd().current_dir(temp.path()).assert().success();

    let text = fs::read_to_string(temp.path().join("collected_code.txt")).unwrap();
    assert_eq!(text, "Filepath: proj/.git/config\n[core]\n================\n");
}

#[test]
fn test_config_variant_requires_config_file() {
    let temp = TempDir::new().unwrap();

    config_cmd()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}
