// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("GitHub API returned HTTP {status} while listing repositories\n{body}")]
    #[diagnostic(
        code(langstats::github::remote),
        help("Check the user name, and set GITHUB_TOKEN if you are rate limited")
    )]
    Remote { status: u16, body: String },

    #[error("Stats markers in {} are incomplete or out of order", path.display())]
    #[diagnostic(
        code(langstats::splice::markers),
        help(
            "Keep exactly one <!-- LANGUAGE_STATS_START --> followed by <!-- LANGUAGE_STATS_END -->, or remove both"
        )
    )]
    MalformedMarkers { path: PathBuf },

    #[error("Configuration error: {0}")]
    #[diagnostic(code(langstats::config::error))]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
