//! CLI integration tests for Launchpad
//!
//! Every command runs against a temporary config directory; launch data
//! comes from a wiremock GraphQL endpoint.

mod common;

use common::{closed_endpoint, graphql, json_response, MockApi, LAUNCHES_BODY};
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, header};

/// Get a command instance for the launchpad binary, isolated in `dir`
fn launchpad_cmd(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("launchpad"));
    cmd.env("LAUNCHPAD_CONFIG_DIR", dir.path())
        .env("NO_PROXY", "127.0.0.1,localhost")
        .env_remove("LAUNCHPAD_GRAPHQL_ENDPOINT")
        .env_remove("LAUNCHPAD_TOKEN");
    cmd
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// Basics
// =============================================================================

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();

    launchpad_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("launchpad"));
}

#[test]
fn test_about() {
    let dir = TempDir::new().unwrap();

    launchpad_cmd(&dir)
        .arg("about")
        .assert()
        .success()
        .stdout(predicate::str::contains("About This Starter"))
        .stdout(predicate::str::contains("ratatui"));
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_validate_trims_valid_text() {
    let dir = TempDir::new().unwrap();

    launchpad_cmd(&dir)
        .args(["validate", "  Buy milk  "])
        .assert()
        .success()
        .stdout("Buy milk\n");
}

#[test]
fn test_validate_rejects_empty_short_and_long() {
    let dir = TempDir::new().unwrap();

    launchpad_cmd(&dir)
        .args(["validate", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Come on, type something!"));

    launchpad_cmd(&dir)
        .args(["validate", "Hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Make it at least 3 characters"));

    launchpad_cmd(&dir)
        .args(["validate", &"a".repeat(101)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Whoa there, keep it under 100 characters"));
}

#[test]
fn test_validate_json() {
    let dir = TempDir::new().unwrap();

    let output = launchpad_cmd(&dir)
        .args(["--format", "json", "validate", "abc"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["valid"], true);
    assert_eq!(json["text"], "abc");
}

// =============================================================================
// Todo sessions
// =============================================================================

#[test]
fn test_todos_filter_active() {
    let dir = TempDir::new().unwrap();

    launchpad_cmd(&dir)
        .args([
            "todos",
            "add:Active todo",
            "add:Completed todo",
            "toggle:2",
            "filter:active",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ ]"))
        .stdout(predicate::str::contains("Active todo"))
        .stdout(predicate::str::contains("Completed todo").not())
        .stdout(predicate::str::contains("All (2)  Active (1)  Completed (1)"));
}

#[test]
fn test_todos_json_report() {
    let dir = TempDir::new().unwrap();

    let output = launchpad_cmd(&dir)
        .args([
            "-f",
            "json",
            "todos",
            "add:First task",
            "add:Hi",
            "add:Second task",
            "toggle:1",
            "filter:completed",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["filter"], "completed");
    assert_eq!(json["counts"]["total"], 2);
    assert_eq!(json["counts"]["active"], 1);
    assert_eq!(json["counts"]["completed"], 1);
    assert_eq!(json["todos"].as_array().unwrap().len(), 1);
    assert_eq!(json["todos"][0]["text"], "First task");
    assert_eq!(json["todos"][0]["completed"], true);
    assert_eq!(json["errors"][0], "Make it at least 3 characters");
}

#[test]
fn test_todos_rejected_add_continues() {
    let dir = TempDir::new().unwrap();

    launchpad_cmd(&dir)
        .args(["todos", "add:  ", "add:Real todo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Come on, type something!"))
        .stdout(predicate::str::contains("Real todo"));
}

#[test]
fn test_todos_empty_messages() {
    let dir = TempDir::new().unwrap();

    launchpad_cmd(&dir)
        .args(["todos", "add:Only todo", "delete:1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos yet. Add one above!"));

    launchpad_cmd(&dir)
        .args(["todos", "add:Only todo", "filter:completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No completed todos."));
}

#[test]
fn test_todos_clear_completed() {
    let dir = TempDir::new().unwrap();

    launchpad_cmd(&dir)
        .args(["todos", "add:Keep me", "add:Drop me", "toggle:2", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keep me"))
        .stdout(predicate::str::contains("Drop me").not());
}

#[test]
fn test_todos_invalid_op() {
    let dir = TempDir::new().unwrap();

    launchpad_cmd(&dir)
        .args(["todos", "rename:1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid op"));
}

// =============================================================================
// Token management
// =============================================================================

#[test]
fn test_login_token_logout() {
    let dir = TempDir::new().unwrap();

    launchpad_cmd(&dir)
        .args(["login", "--token", "my-secret-token"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in"));
    assert!(dir.path().join("auth-token").is_file());

    launchpad_cmd(&dir)
        .arg("token")
        .assert()
        .success()
        .stdout(predicate::str::contains("***********oken"))
        .stdout(predicate::str::contains("my-secret").not());

    launchpad_cmd(&dir)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));
    assert!(!dir.path().join("auth-token").exists());

    launchpad_cmd(&dir)
        .arg("token")
        .assert()
        .success()
        .stdout(predicate::str::contains("No token stored"));
}

#[test]
fn test_login_rejects_blank_token() {
    let dir = TempDir::new().unwrap();

    launchpad_cmd(&dir)
        .args(["login", "--token", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Token must not be empty"));
}

// =============================================================================
// Launches
// =============================================================================

#[test]
fn test_launches_success_sends_token() {
    let dir = TempDir::new().unwrap();
    let api = MockApi::start();
    api.mount(
        graphql()
            .and(header("authorization", "Bearer secret-token"))
            .and(body_partial_json(json!({
                "operationName": "GetLaunches",
                "variables": { "limit": 5 }
            })))
            .respond_with(json_response(200, LAUNCHES_BODY))
            .expect(1),
    );

    launchpad_cmd(&dir)
        .args(["login", "--token", "secret-token"])
        .assert()
        .success();

    launchpad_cmd(&dir)
        .env("LAUNCHPAD_GRAPHQL_ENDPOINT", api.url())
        .args(["launches", "--limit", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 launches loaded"))
        .stdout(predicate::str::contains("CRS-21"))
        .stdout(predicate::str::contains("2020-12-06"))
        .stdout(predicate::str::contains("Success"));
}

#[test]
fn test_launches_without_token_sends_no_authorization() {
    let dir = TempDir::new().unwrap();
    let api = MockApi::respond(200, LAUNCHES_BODY);

    launchpad_cmd(&dir)
        .env("LAUNCHPAD_GRAPHQL_ENDPOINT", api.url())
        .arg("launches")
        .assert()
        .success();

    let requests = api.requests();
    assert!(requests[0].headers.get("authorization").is_none());
    assert_eq!(api.only_body()["variables"]["limit"], 12);
}

#[test]
fn test_launches_unauthorized_clears_token() {
    let dir = TempDir::new().unwrap();
    let api = MockApi::start();
    api.mount(
        graphql()
            .and(header("authorization", "Bearer expired-token"))
            .respond_with(json_response(401, r#"{"message":"invalid token"}"#))
            .expect(1),
    );

    launchpad_cmd(&dir)
        .args(["login", "--token", "expired-token"])
        .assert()
        .success();

    launchpad_cmd(&dir)
        .env("LAUNCHPAD_GRAPHQL_ENDPOINT", api.url())
        .arg("launches")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unauthorized"))
        .stderr(predicate::str::contains("launchpad login"));

    assert!(!dir.path().join("auth-token").exists());
}

#[test]
fn test_launches_graphql_errors_are_logged() {
    let dir = TempDir::new().unwrap();
    let api = MockApi::respond(
        200,
        r#"{"data":null,"errors":[{"message":"Cannot query field","locations":[{"line":1,"column":2}],"path":["launches"]}]}"#,
    );

    launchpad_cmd(&dir)
        .env("LAUNCHPAD_GRAPHQL_ENDPOINT", api.url())
        .args(["--verbose", "launches"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to Load Data: GraphQL error: Cannot query field"))
        .stderr(predicate::str::contains(
            "[verbose:graphql] GraphQL error: Cannot query field at 1:2 (launches)",
        ));
}

#[test]
fn test_launches_server_error() {
    let dir = TempDir::new().unwrap();
    let api = MockApi::respond(500, "{}");

    launchpad_cmd(&dir)
        .env("LAUNCHPAD_GRAPHQL_ENDPOINT", api.url())
        .arg("launches")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Network error"))
        .stderr(predicate::str::contains("500"));
}

#[test]
fn test_launches_unreachable_endpoint() {
    let dir = TempDir::new().unwrap();

    launchpad_cmd(&dir)
        .env("LAUNCHPAD_GRAPHQL_ENDPOINT", closed_endpoint())
        .arg("launches")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to Load Data: Network error"));
}

#[test]
fn test_launch_not_found() {
    let dir = TempDir::new().unwrap();
    let api = MockApi::start();
    api.mount(
        graphql()
            .and(body_partial_json(json!({ "variables": { "id": "999" } })))
            .respond_with(json_response(200, r#"{"data":{"launch":null}}"#))
            .expect(1),
    );

    launchpad_cmd(&dir)
        .env("LAUNCHPAD_GRAPHQL_ENDPOINT", api.url())
        .args(["launch", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Launch not found: 999"));
}

#[test]
fn test_launches_json_output() {
    let dir = TempDir::new().unwrap();
    let api = MockApi::respond(200, LAUNCHES_BODY);

    let output = launchpad_cmd(&dir)
        .env("LAUNCHPAD_GRAPHQL_ENDPOINT", api.url())
        .args(["--format", "json", "launches"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json[0]["mission_name"], "CRS-21");
    assert_eq!(json[0]["rocket"]["rocket_name"], "Falcon 9");
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_config_file_endpoint_and_limit() {
    let dir = TempDir::new().unwrap();
    let api = MockApi::respond(200, LAUNCHES_BODY);

    std::fs::write(
        dir.path().join("config.toml"),
        format!("graphql_endpoint = \"{}\"\nlaunches_limit = 3\n", api.url()),
    )
    .unwrap();

    launchpad_cmd(&dir).arg("launches").assert().success();

    assert_eq!(api.only_body()["variables"]["limit"], 3);
}

#[test]
fn test_config_default_format_json() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "default_format = \"json\"\n").unwrap();

    let output = launchpad_cmd(&dir).args(["validate", "abc"]).output().unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["valid"], true);
    assert_eq!(json["text"], "abc");
}

#[test]
fn test_format_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "default_format = \"json\"\n").unwrap();

    launchpad_cmd(&dir)
        .args(["--format", "text", "validate", "abc"])
        .assert()
        .success()
        .stdout("abc\n");
}

#[test]
fn test_config_unknown_format_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "default_format = \"yaml\"\n").unwrap();

    launchpad_cmd(&dir)
        .args(["validate", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}
