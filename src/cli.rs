// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "langstats")]
#[command(version)]
#[command(about = "Write your GitHub language statistics into a README", long_about = None)]
pub struct Cli {
    /// GitHub user whose owned repositories are scanned (GITHUB_USERNAME takes precedence)
    pub user: Option<String>,

    /// Personal access token (raises the API rate limit)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Document to update
    #[arg(short, long, env = "LANGSTATS_README")]
    pub output: Option<PathBuf>,

    /// Print the generated section only, don't touch the document
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Initialize config file
    Init,
    /// Show current configuration
    Config,
}
