use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Token variables cleared so tests never touch the network.
const TOKEN_VARS: [&str; 4] = [
    "GFI_GITHUB_TOKEN",
    "GITHUB_TOKEN",
    "GFI_GITLAB_TOKEN",
    "GITLAB_TOKEN",
];

fn gfi() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("gfi");
    for var in TOKEN_VARS {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_version() {
    gfi()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gfi"));
}

#[test]
fn test_help_contains_all_commands() {
    gfi()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("bookmark"))
        .stdout(predicate::str::contains("auth"))
        .stdout(predicate::str::contains("completion"));
}

#[test]
fn test_search_without_token_reports_inline_error() {
    gfi()
        .arg("search")
        .assert()
        .success()
        .stdout(predicate::str::contains("token is not set"));
}

#[test]
fn test_search_without_token_json_carries_error_field() {
    let output = gfi()
        .arg("search")
        .arg("--output")
        .arg("json")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("search --output json should produce valid JSON");

    assert!(parsed.is_object());
    assert!(
        parsed["error"]
            .as_str()
            .unwrap()
            .contains("GitHub token is not set")
    );
    assert_eq!(parsed["has_next_page"], false);
    assert!(parsed["issues"].as_array().unwrap().is_empty());
}

#[test]
fn test_search_gitlab_without_token_names_gitlab() {
    gfi()
        .arg("search")
        .arg("--service")
        .arg("gitlab")
        .assert()
        .success()
        .stdout(predicate::str::contains("GitLab token is not set"));
}

#[test]
fn test_search_rejects_unknown_service() {
    gfi()
        .arg("search")
        .arg("--service")
        .arg("bitbucket")
        .assert()
        .failure()
        .code(predicate::eq(2));
}

#[test]
fn test_bookmark_toggle_round_trip() {
    let data_dir = tempfile::tempdir().unwrap();

    // First toggle bookmarks the id
    gfi()
        .env("XDG_DATA_HOME", data_dir.path())
        .args(["bookmark", "toggle", "X"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bookmarked"));

    // The list shows it
    gfi()
        .env("XDG_DATA_HOME", data_dir.path())
        .args(["bookmark", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("X"));

    // Second toggle restores the original state
    gfi()
        .env("XDG_DATA_HOME", data_dir.path())
        .args(["bookmark", "toggle", "X"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed bookmark"));

    gfi()
        .env("XDG_DATA_HOME", data_dir.path())
        .args(["bookmark", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No bookmarks yet"));
}

#[test]
fn test_bookmark_list_json_output() {
    let data_dir = tempfile::tempdir().unwrap();

    gfi()
        .env("XDG_DATA_HOME", data_dir.path())
        .args(["bookmark", "toggle", "https://github.com/acme/widget/issues/1"])
        .assert()
        .success();

    let output = gfi()
        .env("XDG_DATA_HOME", data_dir.path())
        .args(["bookmark", "list", "--output", "json"])
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("bookmark list --output json should be valid JSON");

    let bookmarks = parsed["bookmarks"].as_array().unwrap();
    assert_eq!(bookmarks.len(), 1);
    assert_eq!(
        bookmarks[0].as_str().unwrap(),
        "https://github.com/acme/widget/issues/1"
    );
}

#[test]
fn test_bookmark_clear() {
    let data_dir = tempfile::tempdir().unwrap();

    gfi()
        .env("XDG_DATA_HOME", data_dir.path())
        .args(["bookmark", "toggle", "a"])
        .assert()
        .success();
    gfi()
        .env("XDG_DATA_HOME", data_dir.path())
        .args(["bookmark", "toggle", "b"])
        .assert()
        .success();

    gfi()
        .env("XDG_DATA_HOME", data_dir.path())
        .args(["bookmark", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 bookmarks"));
}

#[test]
fn test_auth_status_reports_missing_tokens() {
    gfi()
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub token not set"))
        .stdout(predicate::str::contains("GitLab token not set"));
}

#[test]
fn test_auth_status_reports_present_token_source() {
    gfi()
        .env("GITHUB_TOKEN", "ghp_example")
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub token found in GITHUB_TOKEN"));
}

#[test]
fn test_completion_bash() {
    gfi()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gfi"));
}

#[test]
fn test_invalid_command() {
    gfi().arg("invalidcmd").assert().failure().code(predicate::eq(2));
}

#[test]
fn test_quiet_flag_suppresses_nothing_fatal() {
    gfi()
        .args(["auth", "status", "--quiet"])
        .assert()
        .success();
}
