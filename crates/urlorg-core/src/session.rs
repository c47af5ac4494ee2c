//! One organizer session, end to end.
//!
//! input -> normalize -> merge with saved file -> (optional) validate ->
//! merge invalid URLs into the invalid file -> write the saved file.
//!
//! Nothing is written until the input has been read, so a missing source
//! file aborts without touching the saved or invalid files.

use anyhow::Result;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::control::ValidationControl;
use crate::merge;
use crate::normalize::Normalizer;
use crate::pool::{self, PoolProgress};
use crate::url_file;
use crate::validate::{validation_input, UrlCheck};

/// Where new URLs come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A text file, one raw URL per line.
    File(PathBuf),
    /// A single URL given on the command line.
    Url(String),
}

#[derive(Debug, Clone)]
pub struct SessionRequest {
    pub source: Source,
    /// Saved URL list; created if missing, overwritten at the end.
    pub save_file: PathBuf,
    /// Accumulated invalid URLs; created if missing, merged into.
    pub invalid_file: PathBuf,
    /// Validation workers; 0 disables validation.
    pub workers: usize,
}

/// Counts reported at the end of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// URLs read from the source.
    pub input_count: usize,
    /// URLs after merging with the saved file.
    pub merged_count: usize,
    /// URLs written to the saved file.
    pub saved_count: usize,
    /// URLs found invalid in this run.
    pub invalid_found: usize,
    /// Entries in the invalid file after merging.
    pub invalid_total: usize,
    /// Whether validation ran.
    pub validated: bool,
    /// Whether validation was interrupted.
    pub cancelled: bool,
}

impl SessionSummary {
    /// Duplicates found, when the merged list came out shorter than the input.
    pub fn duplicates(&self) -> Option<usize> {
        (self.input_count > self.merged_count).then(|| self.input_count - self.merged_count)
    }
}

/// Reads the new URLs named by `source`.
pub fn read_source(source: &Source, normalizer: &Normalizer) -> Result<Vec<String>> {
    match source {
        Source::File(path) => url_file::read_urls(path, normalizer),
        Source::Url(raw) => {
            let url = normalizer.normalize(raw);
            tracing::debug!("the new URL is {}", url);
            Ok(if url.is_empty() { Vec::new() } else { vec![url] })
        }
    }
}

/// Drops every entry whose validation input is in `invalid`.
pub fn without_invalid(urls: Vec<String>, invalid: &HashSet<String>) -> Vec<String> {
    urls.into_iter()
        .filter(|u| !invalid.contains(validation_input(u)))
        .collect()
}

/// Runs a full session. Validation uses `checker` when `request.workers > 0`.
pub async fn run_session<C>(
    request: &SessionRequest,
    normalizer: &Normalizer,
    checker: Arc<C>,
    control: Arc<ValidationControl>,
    progress_tx: Option<mpsc::Sender<PoolProgress>>,
) -> Result<SessionSummary>
where
    C: UrlCheck + 'static,
{
    tracing::info!("starting session");
    let mut summary = SessionSummary::default();

    let new_urls = read_source(&request.source, normalizer)?;
    summary.input_count = new_urls.len();

    url_file::ensure_file(&request.invalid_file)?;
    url_file::ensure_file(&request.save_file)?;

    let mut data = merge::merge(new_urls, &request.save_file, normalizer)?;
    summary.merged_count = data.len();

    if request.workers > 0 {
        summary.validated = true;
        let outcome = pool::validate_all(
            &data,
            request.workers,
            checker,
            Arc::clone(&control),
            progress_tx,
        )
        .await;
        summary.cancelled = outcome.cancelled;
        summary.invalid_found = outcome.invalid.len();

        if !outcome.invalid.is_empty() {
            tracing::info!(
                "invalid URLs found, check the file {}",
                request.invalid_file.display()
            );
            let invalid = merge::merge(outcome.invalid, &request.invalid_file, normalizer)?;
            url_file::save_urls(&invalid, &request.invalid_file)?;
            summary.invalid_total = invalid.len();

            let invalid: HashSet<String> = invalid.into_iter().collect();
            data = without_invalid(data, &invalid);
        }
    }

    url_file::save_urls(&data, &request.save_file)?;
    summary.saved_count = data.len();

    match summary.duplicates() {
        Some(n) => tracing::info!(
            "found {} duplicate URLs out of {} total URLs",
            n,
            summary.input_count
        ),
        None => tracing::info!("no duplicate URLs found"),
    }

    Ok(summary)
}
