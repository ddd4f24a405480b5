// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use indicatif::ProgressBar;
use tracing::debug;

use crate::domain::{LanguageBytes, Repository};
use crate::error::Result;
use crate::services::github::GitHubClient;

/// Sum the language byte maps of every non-fork repository.
///
/// Forks are skipped without a request. A repository whose language data
/// cannot be fetched contributes nothing.
pub async fn aggregate(
    github: &GitHubClient,
    repos: &[Repository],
    progress: &ProgressBar,
) -> Result<LanguageBytes> {
    let mut totals = LanguageBytes::new();

    for repo in repos {
        progress.inc(1);

        if repo.fork {
            debug!(repo = %repo.name, "skipping fork");
            continue;
        }

        progress.set_message(repo.name.clone());
        if let Some(languages) = github.languages(repo).await? {
            accumulate(&mut totals, &languages);
        }
    }

    progress.finish_and_clear();
    Ok(totals)
}

/// Add every count in `languages` into `totals`.
pub fn accumulate(totals: &mut LanguageBytes, languages: &LanguageBytes) {
    for (language, bytes) in languages {
        let entry = totals.entry(language.clone()).or_insert(0);
        *entry = entry.saturating_add(*bytes);
    }
}
