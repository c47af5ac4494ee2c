//! CLI for urlorg.

mod commands;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use clap_complete::Shell;
use std::path::PathBuf;
use urlorg_core::config::{self, UrlorgConfig};
use urlorg_core::logging::LogOptions;
use urlorg_core::session::{SessionRequest, Source};

pub use commands::print_completions;
use commands::{check_updates, run_organize};

/// Normalize, merge, deduplicate, and optionally validate a bookmark URL list.
#[derive(Debug, Parser)]
#[command(name = "urlorg", version)]
#[command(about = "Organize bookmark URLs: normalize, deduplicate, sort, and check reachability", long_about = None)]
#[command(group(ArgGroup::new("input").args(["read_file", "url"]).multiple(false)))]
pub struct Cli {
    /// File with the resulting URL list (created if missing).
    #[arg(
        short = 's',
        long,
        value_name = "PATH",
        required_unless_present = "completions"
    )]
    pub save_file: Option<PathBuf>,

    /// File with the URLs to add, one per line. Required if --url is not used.
    #[arg(
        short = 'r',
        long,
        value_name = "PATH",
        required_unless_present_any = ["url", "completions"]
    )]
    pub read_file: Option<PathBuf>,

    /// Single URL to add. Required if --read-file is not used.
    #[arg(short = 'u', long, value_name = "URL")]
    pub url: Option<String>,

    /// Check every URL with N workers (capped at 2x CPU cores). Off by default.
    #[arg(short = 'w', long, value_name = "N", value_parser = parse_positive)]
    pub workers: Option<usize>,

    /// File that accumulates invalid URLs (overrides the config value).
    #[arg(short = 'i', long, value_name = "PATH")]
    pub invalid_file: Option<PathBuf>,

    /// Skip the check for a newer release.
    #[arg(long)]
    pub no_update_check: bool,

    /// Show log messages on screen.
    #[arg(short, long)]
    pub verbose: bool,

    /// Activate debug logs.
    #[arg(short, long)]
    pub debug: bool,

    /// Print a shell completion script and exit.
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,
}

fn parse_positive(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{value} is not a valid value (expected a positive integer)")),
    }
}

impl Cli {
    pub fn log_options(&self) -> LogOptions {
        LogOptions {
            verbose: self.verbose,
            debug: self.debug,
        }
    }

    /// Build the session request, filling unset values from `cfg`.
    pub fn session_request(&self, cfg: &UrlorgConfig) -> Result<SessionRequest> {
        let source = match (&self.read_file, &self.url) {
            (Some(path), _) => Source::File(path.clone()),
            (None, Some(url)) => Source::Url(url.clone()),
            (None, None) => anyhow::bail!("no source file or URL specified"),
        };
        let save_file = self
            .save_file
            .clone()
            .context("no destination file specified")?;
        Ok(SessionRequest {
            source,
            save_file,
            invalid_file: self
                .invalid_file
                .clone()
                .unwrap_or_else(|| cfg.invalid_urls_file.clone()),
            workers: self.workers.unwrap_or(0),
        })
    }

    pub async fn run(self) -> Result<()> {
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        if cfg.check_updates && !self.no_update_check {
            check_updates(&cfg.update_repo).await;
        }

        let request = self.session_request(&cfg)?;
        run_organize(&cfg, &request).await
    }
}

#[cfg(test)]
mod tests;
