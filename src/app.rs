// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Commercial

use std::io::IsTerminal;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::error::Result;
use crate::services::{aggregator, github::GitHubClient, ranker, renderer, splicer};

pub struct App {
    cli: Cli,
    config: Config,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = Config::load(&cli)?;
        debug!(
            username = %config.username,
            api_base_url = %config.api_base_url,
            readme = %config.readme_path.display(),
            token = config.token.is_some(),
            "config loaded"
        );
        Ok(Self { cli, config })
    }

    pub async fn run(&self) -> Result<()> {
        if let Some(ref cmd) = self.cli.command {
            return self.handle_command(cmd);
        }

        self.update_stats().await
    }

    async fn update_stats(&self) -> Result<()> {
        let user = &self.config.username;
        self.print_info(&format!("GitHub user: {user}"));

        // Step 1: List owned repositories
        self.print_status("Fetching repositories...");
        let github = GitHubClient::new(&self.config)?;
        let repos = github.list_repositories(user).await?;

        let forks = repos.iter().filter(|r| r.fork).count();
        self.print_info(&format!(
            "{} repositories found ({} forks skipped)",
            repos.len(),
            forks
        ));

        // Step 2: Sum language bytes
        self.print_status("Fetching language statistics...");
        let progress = Self::progress_bar(repos.len());
        let languages = aggregator::aggregate(&github, &repos, &progress).await?;
        debug!(languages = languages.len(), "languages aggregated");

        // Step 3: Rank
        let ranked = ranker::rank(&languages);
        if ranked.is_empty() {
            println!("No language data found.");
            return Ok(());
        }

        println!("\n{}", style("Language usage:").bold());
        println!("{}", "=".repeat(50));
        for entry in &ranked {
            println!("{:20} {:6.2}%", entry.language, entry.percent);
        }

        // Step 4: Render and splice
        let table = renderer::render_table(&ranked);

        if self.cli.dry_run {
            println!("\n{}", splicer::build_section(&table));
            return Ok(());
        }

        let path = &self.config.readme_path;
        splicer::update_document(path, &table)?;

        println!("\n{} Updated {}", style("✓").green().bold(), path.display());
        Ok(())
    }

    fn handle_command(&self, cmd: &Commands) -> Result<()> {
        match cmd {
            Commands::Init => {
                let path = Config::create_default()?;
                println!("Created config: {}", path.display());
                Ok(())
            }
            Commands::Config => {
                println!("Username: {}", self.config.username);
                println!(
                    "Token: {}",
                    if self.config.token.is_some() {
                        "set"
                    } else {
                        "not set"
                    }
                );
                println!("API base URL: {}", self.config.api_base_url);
                println!("README path: {}", self.config.readme_path.display());
                println!("Per page: {}", self.config.per_page);
                println!("Timeout: {}s", self.config.timeout_secs);
                if let Some(path) = Config::config_path() {
                    println!("Config file: {}", path.display());
                }
                Ok(())
            }
        }
    }

    fn progress_bar(len: usize) -> ProgressBar {
        if !std::io::stdout().is_terminal() {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        if let Ok(bar_style) =
            ProgressStyle::with_template("{spinner} {pos}/{len} repos {wide_bar} {msg}")
        {
            pb.set_style(bar_style.tick_chars("⠁⠃⠇⠋⠙⠸⢰⣠⣄⡆"));
        }
        pb
    }

    fn print_status(&self, msg: &str) {
        println!("{} {}", style("→").cyan(), msg);
    }

    fn print_info(&self, msg: &str) {
        println!("{} {}", style("info:").cyan(), msg);
    }
}
