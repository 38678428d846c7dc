use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Command isolated from the user's credentials and config directory.
///
/// The default config location points into an empty directory, so only
/// `--config-file` and the environment set by each test are consulted.
fn merakictl() -> Command {
    let home = std::env::temp_dir().join("merakictl-cli-tests-home");
    let mut cmd = Command::cargo_bin("merakictl").unwrap();
    cmd.env_remove("MERAKI_DASHBOARD_API_KEY")
        .env_remove("MERAKI_DASHBOARD_API_BASE_URL")
        .env_remove("MERAKICTL_PROFILE")
        .env_remove("MERAKICTL_CONFIG_FILE")
        .env_remove("RUST_LOG")
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

fn write_profile(dir: &TempDir, base_url: &str) -> String {
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            r#"
default_profile = "lab"

[profiles.lab]
api_key = "lab-key"
base_url = "{}"
caller = "merakictl-tests"
"#,
            base_url
        ),
    )
    .unwrap();
    config_path.to_string_lossy().to_string()
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// ---------------------------------------------------------------------------
// Help and version
// ---------------------------------------------------------------------------

#[test]
fn test_help_flag() {
    merakictl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Meraki Dashboard API"))
        .stdout(predicate::str::contains("EXAMPLES:"));
}

#[test]
fn test_version_flag() {
    merakictl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("merakictl"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_command_json() {
    let output = merakictl()
        .args(["version", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!({"version": env!("CARGO_PKG_VERSION"), "name": "merakictl"})
    );
}

#[test]
fn test_no_args_shows_help() {
    merakictl()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    merakictl()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_call_help() {
    merakictl()
        .args(["call", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--total-pages"))
        .stdout(predicate::str::contains("--direction"));
}

#[test]
fn test_completions_bash() {
    merakictl()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("merakictl"));
}

// ---------------------------------------------------------------------------
// Operation catalog
// ---------------------------------------------------------------------------

#[test]
fn test_operations_list_by_tag() {
    let output = merakictl()
        .args(["operations", "list", "--tag", "devices", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows = stdout_json(&output);
    let rows = rows.as_array().unwrap();
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|row| row["tag"] == "devices"));
    assert!(rows.iter().any(|row| row["operationId"] == "getDevice"));
}

#[test]
fn test_operations_show_event_log_defaults_to_prev() {
    let output = merakictl()
        .args(["operations", "show", "get-network-events", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let op = stdout_json(&output);
    assert_eq!(op["name"], "get_network_events");
    assert_eq!(op["pagination"], json!({"total_pages": 1, "direction": "prev"}));
}

#[test]
fn test_operations_show_unknown() {
    merakictl()
        .args(["operations", "show", "getDevise"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown operation 'getDevise'"));
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[test]
fn test_profile_lifecycle() {
    let dir = TempDir::new().unwrap();
    let config_file = dir.path().join("config.toml");
    let config_file = config_file.to_str().unwrap();

    merakictl()
        .args(["--config-file", config_file])
        .args(["profile", "set", "work", "--api-key", "0123456789abcdef"])
        .args(["--organization-id", "549236"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile 'work' created"));

    let output = merakictl()
        .args(["--config-file", config_file, "profile", "list", "-o", "json"])
        .output()
        .unwrap();
    let profiles = stdout_json(&output);
    assert_eq!(profiles[0]["name"], "work");
    assert_eq!(profiles[0]["default"], true);
    assert_eq!(profiles[0]["organization_id"], "549236");

    merakictl()
        .args(["--config-file", config_file, "profile", "show", "work", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("****cdef"))
        .stdout(predicate::str::contains("0123456789abcdef").not());

    merakictl()
        .args(["--config-file", config_file, "profile", "remove", "work"])
        .assert()
        .success();

    merakictl()
        .args(["--config-file", config_file, "profile", "show", "work"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profile 'work' not found"));
}

#[test]
fn test_profile_default_requires_existing_profile() {
    let dir = TempDir::new().unwrap();
    let config_file = dir.path().join("config.toml");

    merakictl()
        .arg("--config-file")
        .arg(&config_file)
        .args(["profile", "default", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Profile 'missing' not found"));
}

#[test]
fn test_profile_path_with_config_file() {
    let dir = TempDir::new().unwrap();
    let config_file = dir.path().join("custom.toml");

    merakictl()
        .arg("--config-file")
        .arg(&config_file)
        .args(["profile", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn test_corrupt_config_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let config_file = dir.path().join("config.toml");
    fs::write(&config_file, "[[[broken").unwrap();

    merakictl()
        .arg("--config-file")
        .arg(&config_file)
        .args(["profile", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

// ---------------------------------------------------------------------------
// Calls
// ---------------------------------------------------------------------------

#[test]
fn test_call_without_credentials() {
    merakictl()
        .args(["call", "get_device", "Q2XX-AAAA-AAAA"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No profile configured"));
}

#[test]
fn test_call_unknown_operation() {
    merakictl()
        .args(["call", "get_devise", "Q2XX-AAAA-AAAA"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("operations list"));
}

#[test]
fn test_call_with_wrong_argument_count() {
    merakictl()
        .env("MERAKI_DASHBOARD_API_KEY", "unused")
        .args(["call", "get_network_client", "L_1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("takes 2 required argument(s)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_call_from_environment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/devices/Q2XX-AAAA-AAAA"))
        .and(header("authorization", "Bearer env-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "serial": "Q2XX-AAAA-AAAA",
            "model": "MR46",
            "name": "lobby-ap"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = merakictl()
        .env("MERAKI_DASHBOARD_API_KEY", "env-key")
        .env("MERAKI_DASHBOARD_API_BASE_URL", format!("{}/api/v1", server.uri()))
        .args(["call", "getDevice", "Q2XX-AAAA-AAAA"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(stdout_json(&output)["model"], "MR46");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_call_api_error_prints_error_mapping() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/devices/Q2XX-0000-0000"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"errors": ["Device not found"]})),
        )
        .mount(&server)
        .await;

    let output = merakictl()
        .env("MERAKI_DASHBOARD_API_KEY", "env-key")
        .env("MERAKI_DASHBOARD_API_BASE_URL", format!("{}/api/v1", server.uri()))
        .args(["call", "get_device", "Q2XX-0000-0000"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_json(&output),
        json!({"error": "devices, getDevice - 404 Not Found, Device not found"})
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("API Error in get_device: devices, getDevice - 404 Not Found"),
        "{}",
        stderr
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_call_with_profile_params_and_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/organizations/549236/devices"))
        .and(header("authorization", "Bearer lab-key"))
        .and(query_param("perPage", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"serial": "Q2AA-0001", "model": "MR46"},
            {"serial": "Q2BB-0002", "model": "MS120-8"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config_file = write_profile(&dir, &format!("{}/api/v1", server.uri()));

    let output = merakictl()
        .args(["--config-file", &config_file])
        .args(["call", "get-organization-devices", "549236"])
        .args(["--param", "perPage=2"])
        .args(["-q", "[?model==`MR46`].serial"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(stdout_json(&output), json!(["Q2AA-0001"]));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_call_post_sends_arguments_in_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/organizations/549236/networks"))
        .and(body_json(json!({
            "name": "HQ",
            "productTypes": ["wireless", "switch"],
            "timeZone": "Europe/Berlin"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "N_1",
            "name": "HQ"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config_file = write_profile(&dir, &format!("{}/api/v1", server.uri()));

    let output = merakictl()
        .args(["--config-file", &config_file])
        .args(["call", "create_organization_network", "549236", "HQ"])
        .arg(r#"["wireless","switch"]"#)
        .args(["--data", r#"{"timeZone": "Europe/Berlin"}"#])
        .output()
        .unwrap();

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(stdout_json(&output)["id"], "N_1");
}
