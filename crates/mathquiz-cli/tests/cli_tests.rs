//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mathquiz() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("mathquiz").unwrap()
}

#[test]
fn levels_text_table() {
    mathquiz()
        .arg("levels")
        .assert()
        .success()
        .stdout(predicate::str::contains("0..=1000"))
        .stdout(predicate::str::contains("+ - *"));
}

#[test]
fn levels_json() {
    let output = mathquiz()
        .args(["levels", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let levels: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let levels = levels.as_array().unwrap();
    assert_eq!(levels.len(), 5);
    assert_eq!(levels[0]["level"], 1);
    assert_eq!(levels[3]["pool"]["end"], 100);
    assert_eq!(
        levels[4]["operators"],
        serde_json::json!(["add", "subtract", "multiply"])
    );
}

#[test]
fn levels_unknown_format() {
    mathquiz()
        .args(["levels", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn play_stop_immediately() {
    let dir = TempDir::new().unwrap();
    mathquiz()
        .current_dir(dir.path())
        .args(["play", "--level", "1", "--seed", "4"])
        .write_stdin("stop\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Are you ready for some math fun!"))
        .stdout(predicate::str::contains("what does"))
        .stdout(predicate::str::contains("was not answered"))
        .stdout(predicate::str::contains("percent").not());
}

#[test]
fn play_prompts_for_level_and_taunts() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("mathquiz.toml"),
        "level_failed_responses = [\"one to five, please\"]\n",
    )
    .unwrap();

    mathquiz()
        .current_dir(dir.path())
        .args(["play", "--seed", "1"])
        .write_stdin("seven\n2\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Choose a number between 1 and 5"))
        .stdout(predicate::str::contains("one to five, please"))
        .stdout(predicate::str::contains(" - "));
}

#[test]
fn play_wrong_answer_is_reported() {
    let dir = TempDir::new().unwrap();
    // No level-1 result is negative, so "-1" is always wrong.
    mathquiz()
        .current_dir(dir.path())
        .args(["play", "--level", "1", "--seed", "9"])
        .write_stdin("-1\nstop\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("try again"))
        .stdout(predicate::str::contains(
            "You answered 0 percent correct on the first try.",
        ))
        .stdout(predicate::str::contains("This was a tough one. You gave 1 answers (-1)"));
}

#[test]
fn play_logs_each_equation_status() {
    let dir = TempDir::new().unwrap();
    mathquiz()
        .current_dir(dir.path())
        .env("RUST_LOG", "mathquiz=debug")
        .args(["play", "--level", "1", "--seed", "4"])
        .write_stdin("stop\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("equation result"))
        .stderr(predicate::str::contains("not answered"))
        .stderr(predicate::str::contains("session finished"));
}

#[test]
fn play_is_quiet_by_default() {
    let dir = TempDir::new().unwrap();
    mathquiz()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .args(["play", "--level", "1", "--seed", "4"])
        .write_stdin("stop\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("equation result").not());
}

#[test]
fn play_rejects_invalid_level_flag() {
    mathquiz()
        .args(["play", "--level", "6"])
        .assert()
        .failure();
}

#[test]
fn play_missing_config_file() {
    mathquiz()
        .args(["play", "--level", "1", "--config", "nonexistent.toml"])
        .write_stdin("stop\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    mathquiz()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created mathquiz.toml"));

    assert!(dir.path().join("mathquiz.toml").exists());

    // The generated config must be loadable by `play`.
    mathquiz()
        .current_dir(dir.path())
        .args(["play", "--level", "3", "--seed", "2"])
        .write_stdin("quit\n")
        .assert()
        .success();
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    mathquiz()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    mathquiz()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
