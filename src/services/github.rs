// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::domain::{LanguageBytes, Repository};
use crate::error::{Error, Result};

const USER_AGENT: &str = concat!("langstats/", env!("CARGO_PKG_VERSION"));
const API_VERSION: &str = "2022-11-28";

/// Thin client over the two REST endpoints the stats pipeline needs.
pub struct GitHubClient {
    client: Client,
    base_url: Url,
    token: Option<SecretString>,
    per_page: u32,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.api_base_url).map_err(|e| {
            Error::Config(format!("invalid api_base_url '{}': {e}", config.api_base_url))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));

        // GitHub rejects requests without a User-Agent
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url,
            token: config.token.clone().map(SecretString::from),
            per_page: config.per_page,
        })
    }

    /// Lazy page-by-page view of the repositories `user` owns.
    ///
    /// Nothing is fetched until [`RepoPager::next_page`] is called. Calling
    /// `pages` again starts over from the first page.
    pub fn pages(&self, user: &str) -> RepoPager<'_> {
        RepoPager {
            github: self,
            user: user.to_string(),
            page: 1,
            exhausted: false,
        }
    }

    /// Drain every listing page. Any failed page aborts the whole listing.
    pub async fn list_repositories(&self, user: &str) -> Result<Vec<Repository>> {
        let mut pager = self.pages(user);
        let mut repos = Vec::new();
        while let Some(page) = pager.next_page().await? {
            repos.extend(page);
        }
        debug!(user, count = repos.len(), "repositories listed");
        Ok(repos)
    }

    /// Fetch the language byte map of one repository.
    ///
    /// A non-success status or an undecodable body yields `Ok(None)`: the
    /// repository simply contributes nothing. Transport failures still
    /// propagate.
    pub async fn languages(&self, repo: &Repository) -> Result<Option<LanguageBytes>> {
        let response = self.get(repo.languages_url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!(repo = %repo.name, %status, "language fetch failed, counting as empty");
            return Ok(None);
        }

        match response.json::<LanguageBytes>().await {
            Ok(languages) => Ok(Some(languages)),
            Err(e) => {
                warn!(repo = %repo.name, error = %e, "unreadable language data, counting as empty");
                Ok(None)
            }
        }
    }

    fn listing_url(&self, user: &str, page: u32) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                Error::Config(format!("api_base_url '{}' cannot be a base", self.base_url))
            })?
            .pop_if_empty()
            .extend(["users", user, "repos"]);
        url.query_pairs_mut()
            .append_pair("per_page", &self.per_page.to_string())
            .append_pair("type", "owner")
            .append_pair("page", &page.to_string());
        Ok(url)
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let request = self.client.get(url);
        match &self.token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }
}

/// Page cursor over `/users/{user}/repos`, ends at the first empty page.
pub struct RepoPager<'a> {
    github: &'a GitHubClient,
    user: String,
    page: u32,
    exhausted: bool,
}

impl RepoPager<'_> {
    /// Fetch the next page, or `Ok(None)` once the listing is exhausted.
    pub async fn next_page(&mut self) -> Result<Option<Vec<Repository>>> {
        if self.exhausted {
            return Ok(None);
        }

        let url = self.github.listing_url(&self.user, self.page)?;
        debug!(user = %self.user, page = self.page, "fetching repository page");

        let response = self.github.get(url.as_str()).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            self.exhausted = true;
            return Err(Error::Remote { status, body });
        }

        let repos: Vec<Repository> = response.json().await?;
        if repos.is_empty() {
            self.exhausted = true;
            return Ok(None);
        }

        self.page += 1;
        Ok(Some(repos))
    }

    /// Number of the page the next call will request.
    pub fn page(&self) -> u32 {
        self.page
    }
}
