//! Command line validation and exit codes

mod harness;

use assert_cmd::Command;
use predicates::prelude::*;

use harness::TestDir;

fn dotls() -> Command {
    Command::from_std(harness::dotls_command())
}

#[test]
fn test_no_arguments_is_usage_error() {
    dotls()
        .assert()
        .code(255)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty().not());
}

#[test]
fn test_extra_argument_is_usage_error() {
    let dir = TestDir::new();
    dir.add_file(".rc", "");

    dotls()
        .arg(dir.path())
        .args(["-s", "extra"])
        .assert()
        .code(255)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_unknown_flag_is_error() {
    let dir = TestDir::new();
    dir.add_file(".rc", "");

    dotls()
        .arg(dir.path())
        .arg("-x")
        .assert()
        .code(255)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("-x"));
}

#[test]
fn test_non_flag_second_argument_is_error() {
    let dir = TestDir::new();
    dotls()
        .arg(dir.path())
        .arg("sort")
        .assert()
        .code(255)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_sort_flag_accepted() {
    let dir = TestDir::new();
    dir.add_file(".rc", "");

    dotls()
        .arg(dir.path())
        .arg("-s")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(".rc "));
}

#[test]
fn test_missing_directory_exit_code() {
    let dir = TestDir::new();
    dotls()
        .arg(dir.path().join("nope"))
        .assert()
        .code(255)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("nope"));
}

#[test]
fn test_invalid_year_setting_is_error() {
    let dir = TestDir::new();
    dotls()
        .env("DOTLS_YEAR", "medium")
        .arg(dir.path())
        .assert()
        .code(255)
        .stderr(predicate::str::contains("DOTLS_YEAR"));
}

#[test]
fn test_help_exits_successfully() {
    dotls()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("-s"));
}

#[test]
fn test_sort_flag_before_path_is_error() {
    let dir = TestDir::new();
    dir.add_file(".rc", "");

    dotls()
        .arg("-s")
        .arg(dir.path())
        .assert()
        .code(255)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_directory_name_starting_with_hyphen() {
    let dir = TestDir::new();
    dir.add_dir("-d");
    std::fs::write(dir.path().join("-d").join(".inner"), "x").unwrap();

    dotls()
        .current_dir(dir.path())
        .arg("-d")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(".inner "));

    dotls()
        .current_dir(dir.path())
        .args(["-d", "-s"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(".inner "));
}
