// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use langstats::config::Config;
use langstats::domain::{LanguageBytes, Repository};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Config pointed at a mock API server
#[allow(dead_code)]
pub fn test_config(server_url: &str) -> Config {
    Config {
        username: "octocat".into(),
        api_base_url: server_url.to_string(),
        timeout_secs: 5,
        ..Config::default()
    }
}

/// Build a LanguageBytes map from literal pairs
#[allow(dead_code)]
pub fn bytes(pairs: &[(&str, u64)]) -> LanguageBytes {
    pairs.iter().map(|(l, b)| (l.to_string(), *b)).collect()
}

/// Repository record whose languages endpoint lives on `server_url`
#[allow(dead_code)]
pub fn make_repo(server_url: &str, name: &str, fork: bool) -> Repository {
    Repository {
        name: name.to_string(),
        fork,
        languages_url: languages_url(server_url, name),
    }
}

#[allow(dead_code)]
pub fn languages_url(server_url: &str, name: &str) -> String {
    format!("{server_url}/repos/octocat/{name}/languages")
}

/// Listing JSON entry as the API returns it (with extra fields we ignore)
#[allow(dead_code)]
pub fn repo_json(server_url: &str, name: &str, fork: bool) -> serde_json::Value {
    serde_json::json!({
        "id": 1,
        "name": name,
        "full_name": format!("octocat/{name}"),
        "fork": fork,
        "private": false,
        "languages_url": languages_url(server_url, name),
    })
}

/// Mount a 200 response for one repository's languages endpoint
#[allow(dead_code)]
pub async fn mount_languages(server: &MockServer, name: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/octocat/{name}/languages")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
