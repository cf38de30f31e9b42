//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

// === Help Surface Tests ===

#[test]
fn test_list_help() {
    let mut cmd = Command::cargo_bin("partsctl").unwrap();
    cmd.arg("list").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ordered by name"));
}

#[test]
fn test_add_help() {
    let mut cmd = Command::cargo_bin("partsctl").unwrap();
    cmd.arg("add").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Part name"))
        .stdout(predicate::str::contains("Quantity on hand"));
}

#[test]
fn test_update_help() {
    let mut cmd = Command::cargo_bin("partsctl").unwrap();
    cmd.arg("update").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Part identifier"));
}

#[test]
fn test_rm_help() {
    let mut cmd = Command::cargo_bin("partsctl").unwrap();
    cmd.arg("rm").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Skip the confirmation prompt"));
}

#[test]
fn test_search_help() {
    let mut cmd = Command::cargo_bin("partsctl").unwrap();
    cmd.arg("search").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("case-insensitive"));
}

#[test]
fn test_config_help() {
    let mut cmd = Command::cargo_bin("partsctl").unwrap();
    cmd.arg("config").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

// === Config Resolution Tests ===

#[test]
fn test_list_without_config_is_actionable() {
    let home = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("partsctl").unwrap();
    cmd.arg("list")
        .current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("PARTSCTL_URL")
        .env_remove("PARTSCTL_KEY");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("PARTSCTL_URL"));
}

#[test]
fn test_config_path_prints_location() {
    let home = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("partsctl").unwrap();
    cmd.arg("config")
        .arg("path")
        .env("HOME", home.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(".partsctl"));
}

#[test]
fn test_config_init_then_show() {
    let home = tempfile::tempdir().unwrap();

    let mut init = Command::cargo_bin("partsctl").unwrap();
    init.arg("config")
        .arg("init")
        .current_dir(home.path())
        .env("HOME", home.path());
    init.assert().success();

    // A second init without --force refuses to overwrite
    let mut again = Command::cargo_bin("partsctl").unwrap();
    again
        .arg("config")
        .arg("init")
        .current_dir(home.path())
        .env("HOME", home.path());
    again
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    let mut show = Command::cargo_bin("partsctl").unwrap();
    show.arg("config")
        .arg("show")
        .current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("PARTSCTL_URL")
        .env_remove("PARTSCTL_KEY");

    // Template values resolve; the key is redacted
    show.assert()
        .success()
        .stdout(predicate::str::contains("your-project.supabase.co"))
        .stdout(predicate::str::contains("****"));
}

#[test]
fn test_completions_bash() {
    let mut cmd = Command::cargo_bin("partsctl").unwrap();
    cmd.arg("completions").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("partsctl"));
}
