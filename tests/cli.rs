// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

//! End-to-end runs of the binary against a mocked GitHub API.

mod helpers;

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use helpers::{mount_languages, repo_json};
use langstats::services::splicer::{END_MARKER, START_MARKER};

/// Binary isolated from the caller's config, keychain and GitHub env
fn langstats(dir: &TempDir, server_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("langstats").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env("NO_COLOR", "1")
        .env("GITHUB_TOKEN", "test-token")
        .env("LANGSTATS_API_BASE_URL", server_url)
        .env_remove("GITHUB_USERNAME")
        .env_remove("LANGSTATS_README")
        .env_remove("RUST_LOG");
    cmd
}

async fn mount_listing(server: &MockServer, repos: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repos))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(server)
        .await;
}

#[test]
fn help_describes_tool() {
    Command::cargo_bin("langstats")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub language statistics"));
}

#[tokio::test(flavor = "multi_thread")]
async fn writes_stats_into_readme() {
    let server = MockServer::start().await;
    let uri = server.uri();
    mount_listing(
        &server,
        serde_json::json!([repo_json(&uri, "app", false), repo_json(&uri, "upstream", true)]),
    )
    .await;
    mount_languages(&server, "app", serde_json::json!({"Rust": 3072, "Shell": 1024})).await;

    let dir = TempDir::new().unwrap();
    let readme = dir.path().join("README.md");
    fs::write(&readme, "# Hi\n<!-- intro -->\nBye\n").unwrap();

    langstats(&dir, &uri)
        .arg("octocat")
        .arg("--output")
        .arg(&readme)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Rust                  75.00%")
                .and(predicate::str::contains("Shell                 25.00%"))
                .and(predicate::str::contains("Updated")),
        );

    let written = fs::read_to_string(&readme).unwrap();
    assert!(written.starts_with(&format!("# Hi\n<!-- intro -->\n\n{START_MARKER}")));
    assert!(written.ends_with(&format!("{END_MARKER}\nBye\n")));
    assert!(written.contains("| Rust | 75.00% ███████████████░░░░░ | 3.00 KB |"));
    assert!(written.contains("| Shell | 25.00% █████░░░░░░░░░░░░░░░ | 1.00 KB |"));
}

#[tokio::test(flavor = "multi_thread")]
async fn github_username_env_beats_positional_user() {
    let server = MockServer::start().await;
    let uri = server.uri();
    mount_listing(&server, serde_json::json!([repo_json(&uri, "app", false)])).await;
    mount_languages(&server, "app", serde_json::json!({"Rust": 10})).await;
    Mock::given(method("GET"))
        .and(path("/users/arguser/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();

    langstats(&dir, &uri)
        .env("GITHUB_USERNAME", "octocat")
        .args(["arguser", "--dry-run"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("GitHub user: octocat")
                .and(predicate::str::contains("| Rust | 100.00%")),
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_github_username_falls_back_to_positional_user() {
    let server = MockServer::start().await;
    let uri = server.uri();
    mount_listing(&server, serde_json::json!([repo_json(&uri, "app", false)])).await;
    mount_languages(&server, "app", serde_json::json!({"Go": 10})).await;

    let dir = TempDir::new().unwrap();

    langstats(&dir, &uri)
        .env("GITHUB_USERNAME", "")
        .args(["octocat", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GitHub user: octocat"));
}

#[test]
fn empty_github_username_keeps_configured_user() {
    let dir = TempDir::new().unwrap();

    langstats(&dir, "http://127.0.0.1:1")
        .env("GITHUB_USERNAME", "")
        .env("LANGSTATS_USERNAME", "from-env-config")
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Username: from-env-config"));
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_stats_exit_zero_without_writing() {
    let server = MockServer::start().await;
    let uri = server.uri();
    mount_listing(&server, serde_json::json!([repo_json(&uri, "upstream", true)])).await;

    let dir = TempDir::new().unwrap();

    langstats(&dir, &uri)
        .arg("octocat")
        .assert()
        .success()
        .stdout(predicate::str::contains("No language data found."));

    assert!(!dir.path().join("README.md").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn listing_failure_exits_nonzero_with_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"message":"Not Found"}"#))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();

    langstats(&dir, &server.uri())
        .arg("octocat")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Not Found"));

    assert!(!dir.path().join("README.md").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn dry_run_prints_section_only() {
    let server = MockServer::start().await;
    let uri = server.uri();
    mount_listing(&server, serde_json::json!([repo_json(&uri, "app", false)])).await;
    mount_languages(&server, "app", serde_json::json!({"Go": 100})).await;

    let dir = TempDir::new().unwrap();

    langstats(&dir, &uri)
        .args(["octocat", "--dry-run"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(START_MARKER)
                .and(predicate::str::contains("| Go | 100.00% ████████████████████ | 100 bytes |")),
        );

    assert!(!dir.path().join("README.md").exists());
}

#[test]
fn config_subcommand_shows_effective_values() {
    let dir = TempDir::new().unwrap();

    langstats(&dir, "http://127.0.0.1:1")
        .env("GITHUB_USERNAME", "ferris")
        .arg("config")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Username: ferris")
                .and(predicate::str::contains("Token: set"))
                .and(predicate::str::contains("API base URL: http://127.0.0.1:1")),
        );
}

#[test]
fn project_config_file_is_honoured() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".langstats.toml"),
        "username = \"from-file\"\nper_page = 25\n",
    )
    .unwrap();

    langstats(&dir, "http://127.0.0.1:1")
        .arg("config")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Username: from-file")
                .and(predicate::str::contains("Per page: 25")),
        );
}

#[test]
fn invalid_config_exits_nonzero() {
    let dir = TempDir::new().unwrap();

    langstats(&dir, "http://127.0.0.1:1")
        .env("LANGSTATS_PER_PAGE", "0")
        .arg("config")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("per_page"));
}
