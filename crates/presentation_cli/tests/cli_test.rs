//! Integration tests for the CLI binary
//!
//! These tests run the compiled `weathercast` binary in an isolated
//! environment and check its output and exit status.

use std::path::Path;
use std::process::{Command, Output};

use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// Run the binary with a clean environment inside `dir`
fn run(dir: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_weathercast"));
    cmd.env_clear().current_dir(dir).args(args);
    for (key, value) in env {
        cmd.env(key, value);
    }
    #[allow(clippy::expect_used)]
    cmd.output().expect("Failed to run weathercast")
}

async fn run_async(dir: &Path, args: Vec<String>, env: Vec<(String, String)>) -> Output {
    let dir = dir.to_path_buf();
    tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        let env: Vec<(&str, &str)> = env.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        run(&dir, &args, &env)
    })
    .await
    .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn write_config(dir: &Path, base_url: &str) -> std::path::PathBuf {
    let path = dir.join("weathercast.toml");
    std::fs::write(
        &path,
        format!(
            "[openweather]\nbase_url = \"{base_url}\"\napi_key = \"cli-test-key\"\n\n[forecast]\ntimezone = \"utc\"\n"
        ),
    )
    .unwrap();
    path
}

// ============================================================================
// Offline behaviour
// ============================================================================

#[test]
fn help_lists_search_command() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["--help"], &[]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("search"));
}

#[test]
fn missing_api_key_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["search", "Oslo"], &[]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("WEATHERCAST_OPENWEATHER__API_KEY"));
}

#[test]
fn empty_query_prints_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(
        dir.path(),
        &["search", "  "],
        &[("WEATHERCAST_OPENWEATHER__API_KEY", "key")],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Please enter a city name."));
    assert!(stdout(&output).is_empty());
}

#[test]
fn empty_query_json_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(
        dir.path(),
        &["search", "--json"],
        &[("WEATHERCAST_OPENWEATHER__API_KEY", "key")],
    );

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Please enter a city name.");
}

#[test]
fn empty_query_without_api_key_prints_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["search", ""], &[]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("Please enter a city name."), "stderr: {err}");
    assert!(!err.contains("API_KEY"));
}

#[test]
fn no_city_without_api_key_json_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), &["search", "--json"], &[]);

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["message"], "Please enter a city name.");
}

#[test]
fn invalid_timezone_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(
        dir.path(),
        &["search", "Oslo", "--timezone", "Mars/Olympus"],
        &[("WEATHERCAST_OPENWEATHER__API_KEY", "key")],
    );

    assert!(!output.status.success());
}

// ============================================================================
// Against a mock provider
// ============================================================================

#[tokio::test]
async fn search_prints_report() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
            "main": {"temp": 21.5},
            "dt": 1_770_249_600,
            "timezone": 0,
            "name": "Lisbon"
        })))
        .mount(&mock_server)
        .await;
    let list: Vec<_> = (0..40_i64)
        .map(|i| {
            serde_json::json!({
                "dt": 1_770_249_600 + i * 10_800,
                "main": {"temp": 15},
                "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}]
            })
        })
        .collect();
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cod": "200",
            "list": list,
            "city": {"name": "Lisbon", "timezone": 0}
        })))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), &mock_server.uri());
    let output = run_async(dir.path(), vec!["search".into(), "Lisbon".into()], vec![]).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Lisbon"));
    assert!(out.contains("Temperature: 21.5°C"));
    assert!(out.contains("5-Day Forecast"));
    assert!(out.contains("05/02/2026"));
    assert!(out.contains("09/02/2026"));
    assert!(stderr(&output).contains("Searching Lisbon..."));
}

#[tokio::test]
async fn search_unknown_city_prints_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"cod": "404", "message": "city not found"})),
        )
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &mock_server.uri());
    let output = run_async(
        dir.path(),
        vec![
            "--config".into(),
            config.to_string_lossy().into_owned(),
            "search".into(),
            "Atlantis".into(),
        ],
        vec![],
    )
    .await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("City not found."));
    assert!(stdout(&output).is_empty());
}

#[tokio::test]
async fn search_server_error_prints_generic_message() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), &mock_server.uri());
    let output = run_async(dir.path(), vec!["search".into(), "Lisbon".into()], vec![]).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error fetching weather data."));
}
