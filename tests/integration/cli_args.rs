//! Integration tests for CLI argument handling

use assert_cmd::Command;

#[test]
fn test_help_lists_subcommands() {
    let output = Command::cargo_bin("stlouisfed")
        .unwrap()
        .arg("--help")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    assert!(stdout.contains("observations"));
    assert!(stdout.contains("search"));
    assert!(stdout.contains("series"));
}

#[test]
fn test_missing_api_key_fails() {
    Command::cargo_bin("stlouisfed")
        .unwrap()
        .env_remove("STLOUISFED_API_KEY")
        .args(["series", "GNPCA"])
        .assert()
        .failure();
}

#[test]
fn test_invalid_max_calls_is_rejected() {
    Command::cargo_bin("stlouisfed")
        .unwrap()
        .args(["--max-calls", "0", "series", "GNPCA"])
        .assert()
        .failure();
}

#[test]
fn test_unknown_subcommand_is_rejected() {
    Command::cargo_bin("stlouisfed")
        .unwrap()
        .arg("shapes")
        .assert()
        .failure();
}
