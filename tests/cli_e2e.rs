#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    fn library(&self) -> PathBuf {
        self.dir.path().join("books.json")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("shelf"));
        cmd.env("SHELF_CONFIG_DIR", self.dir.path().join("config"))
            .env("SHELF_DATA_DIR", self.dir.path().join("data"))
            .env_remove("SHELF_LIBRARY_FILE")
            .env_remove("SHELF_LOG")
            .env("NO_COLOR", "1")
            .arg("--file")
            .arg(self.library());
        cmd
    }
}

#[test]
fn test_first_run_shows_seeded_dashboard() {
    let env = Env::new();

    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Books: 10"))
        .stdout(predicate::str::contains("Unique Genres: 4"))
        .stderr(predicate::str::contains("sample books"));

    assert!(env.library().exists());

    // Second run loads quietly
    env.cmd()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Read: 5 (50.0%)"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_add_list_and_duplicate() {
    let env = Env::new();

    env.cmd()
        .args([
            "add",
            "Rust in Action",
            "Tim McNamara",
            "--year",
            "2021",
            "--genre",
            "Rust",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"Rust in Action\" by Tim McNamara has been added",
        ));

    env.cmd()
        .args(["add", "rust in action", "TIM MCNAMARA", "-y", "2020", "-g", "Rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists in your library"));

    env.cmd()
        .args(["list", "--genre", "Rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains("11. Rust in Action"))
        .stdout(predicate::str::contains("Showing 1 of 11 books"));
}

#[test]
fn test_add_rejects_bad_year() {
    let env = Env::new();

    env.cmd()
        .args(["add", "Old", "Someone", "--year", "1700", "--genre", "History"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_search_by_author() {
    let env = Env::new();

    env.cmd()
        .args(["search", "clear", "--by", "author"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Atomic Habits"))
        .stdout(predicate::str::contains("Found 1 books"));

    env.cmd()
        .args(["search", "cobol"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No books found matching 'cobol' in title."));
}

#[test]
fn test_toggle_then_filter_unread() {
    let env = Env::new();

    env.cmd()
        .args(["toggle", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Marked \"Python Crash Course\" by Eric Matthes as unread",
        ));

    env.cmd()
        .args(["ls", "--status", "unread"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Python Crash Course"))
        .stdout(predicate::str::contains("Atomic Habits").not());
}

#[test]
fn test_remove_range() {
    let env = Env::new();

    env.cmd()
        .args(["rm", "1-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed \"Python Crash Course\""))
        .stdout(predicate::str::contains("Removed \"Fluent Python\""));

    env.cmd()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Books: 8"));
}

#[test]
fn test_invalid_index_changes_nothing() {
    let env = Env::new();
    env.cmd().arg("stats").assert().success();
    let before = fs::read_to_string(env.library()).unwrap();

    env.cmd()
        .args(["rm", "1", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("index 99 not found"));

    env.cmd()
        .args(["toggle", "zero"])
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(env.library()).unwrap(), before);
}

#[test]
fn test_corrupt_library_is_recovered() {
    let env = Env::new();
    fs::write(env.library(), "not json at all").unwrap();

    env.cmd()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Books: 10"))
        .stderr(predicate::str::contains("Error loading library"));

    let backups: Vec<_> = fs::read_dir(env.dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().contains(".corrupt-"))
        .collect();
    assert_eq!(backups.len(), 1);
}

#[test]
fn test_genres_recent_and_path() {
    let env = Env::new();

    env.cmd()
        .arg("genres")
        .assert()
        .success()
        .stdout("JavaScript\nMotivational\nNext.js\nPython\n");

    env.cmd()
        .args(["recent", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Python Data Science Handbook"))
        .stdout(predicate::str::contains("Deep Work").not());

    env.cmd()
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("books.json"));
}

#[test]
fn test_config_roundtrip() {
    let env = Env::new();

    env.cmd()
        .args(["config", "recent-count", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("recent-count set to 5"));

    env.cmd()
        .args(["config", "recent-count"])
        .assert()
        .success()
        .stdout(predicate::str::contains("recent-count = 5"));

    env.cmd()
        .args(["config", "colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_huge_range_fails_cleanly() {
    let env = Env::new();
    env.cmd().arg("stats").assert().success();
    let before = fs::read_to_string(env.library()).unwrap();

    env.cmd()
        .args(["rm", "1-99999999999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("library has 10 books"))
        .stderr(predicate::str::contains("panicked").not());

    env.cmd()
        .args(["toggle", "1-18446744073709551615"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("panicked").not());

    assert_eq!(fs::read_to_string(env.library()).unwrap(), before);
}

#[test]
fn test_path_and_config_do_not_create_the_library() {
    let env = Env::new();

    env.cmd()
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("books.json"))
        .stderr(predicate::str::is_empty());
    assert!(!env.library().exists());

    env.cmd()
        .args(["config", "keep-corrupt", "false"])
        .assert()
        .success();
    env.cmd().arg("config").assert().success();
    assert!(!env.library().exists());
}

#[test]
fn test_directory_as_library_is_not_touched() {
    let env = Env::new();
    let documents = env.dir.path().join("Documents");
    fs::create_dir(&documents).unwrap();
    fs::write(documents.join("thesis.txt"), "chapter one").unwrap();

    let mut cmd = Command::new(cargo_bin("shelf"));
    cmd.env("SHELF_CONFIG_DIR", env.dir.path().join("config"))
        .env("SHELF_DATA_DIR", env.dir.path().join("data"))
        .env_remove("SHELF_LIBRARY_FILE")
        .env("NO_COLOR", "1")
        .arg("--file")
        .arg(&documents)
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a regular file"));

    assert!(documents.is_dir());
    assert_eq!(
        fs::read_to_string(documents.join("thesis.txt")).unwrap(),
        "chapter one"
    );
}

