// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use url::Url;

use crate::cli::Cli;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// GitHub user whose owned repositories are scanned
    #[serde(default = "default_username")]
    pub username: String,

    /// Personal access token, sent as a bearer token when present
    #[serde(default, skip_serializing)]
    pub token: Option<String>,

    /// REST API root (default: https://api.github.com)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Document that receives the stats section
    #[serde(default = "default_readme_path")]
    pub readme_path: PathBuf,

    /// Repositories requested per listing page (GitHub caps this at 100)
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Request timeout in seconds (default 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_username() -> String {
    "octocat".into()
}
fn default_api_base_url() -> String {
    "https://api.github.com".into()
}
fn default_readme_path() -> PathBuf {
    PathBuf::from("README.md")
}
fn default_per_page() -> u32 {
    100
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: default_username(),
            token: None,
            api_base_url: default_api_base_url(),
            readme_path: default_readme_path(),
            per_page: default_per_page(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// `GITHUB_USERNAME` beats the positional argument; empty values fall through.
fn preferred_username(env_user: Option<&str>, cli_user: Option<&str>) -> Option<String> {
    [env_user, cli_user]
        .into_iter()
        .flatten()
        .find(|user| !user.is_empty())
        .map(str::to_string)
}

impl Config {
    /// Load with priority: CLI > ENV > user config > project config > defaults.
    /// The user name is the exception: a non-empty GITHUB_USERNAME beats `[USER]`.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Project-level config (.langstats.toml in the working directory)
        if let Ok(cwd) = std::env::current_dir() {
            let project_config = cwd.join(".langstats.toml");
            if project_config.exists() {
                figment = figment.merge(Toml::file(&project_config));
            }
        }

        if let Some(path) = Self::config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        // LANGSTATS_USERNAME, LANGSTATS_TOKEN, LANGSTATS_PER_PAGE, ...
        figment = figment.merge(Env::prefixed("LANGSTATS_").split("__"));

        let mut config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        #[cfg(feature = "secure-storage")]
        if config.token.is_none() && cli.token.is_none() {
            if let Ok(entry) = keyring::Entry::new("langstats", "github") {
                match entry.get_password() {
                    Ok(token) => config.token = Some(token),
                    Err(e) => tracing::debug!(error = %e, "no token in keychain"),
                }
            }
        }

        config.apply_cli(cli);
        let env_user = std::env::var("GITHUB_USERNAME").ok();
        if let Some(user) = preferred_username(env_user.as_deref(), cli.user.as_deref()) {
            config.username = user;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "langstats").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref token) = cli.token {
            self.token = Some(token.clone());
        }
        if let Some(ref output) = cli.output {
            self.readme_path = output.clone();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(Error::Config("username cannot be empty".into()));
        }

        let base = Url::parse(&self.api_base_url).map_err(|e| {
            Error::Config(format!(
                "api_base_url is not a valid URL ('{}'): {e}",
                self.api_base_url
            ))
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "api_base_url must start with http:// or https://, got '{}'",
                self.api_base_url
            )));
        }

        if !(1..=100).contains(&self.per_page) {
            return Err(Error::Config(format!(
                "per_page must be 1–100, got {}",
                self.per_page
            )));
        }

        if !(1..=3600).contains(&self.timeout_secs) {
            return Err(Error::Config(format!(
                "timeout_secs must be 1–3600, got {}",
                self.timeout_secs
            )));
        }

        Ok(())
    }

    /// Create default config file with secure permissions
    pub fn create_default() -> Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            return Err(Error::Config("Cannot determine config directory".into()));
        };

        fs::create_dir_all(&dir)?;

        let path = dir.join("config.toml");
        let content = r#"# langstats configuration

# GitHub user whose owned repositories are scanned
username = "octocat"

# Personal access token (prefer GITHUB_TOKEN or the system keychain)
# token = "ghp_..."

# REST API root, change for GitHub Enterprise Server
api_base_url = "https://api.github.com"

# Document that receives the stats section
readme_path = "README.md"

# Repositories requested per listing page (max 100)
per_page = 100

# Request timeout in seconds
timeout_secs = 30
"#;

        fs::write(&path, content)?;

        // The file may end up holding a token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)?;
        }

        Ok(path)
    }
}
