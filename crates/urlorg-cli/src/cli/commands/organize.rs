//! Default command: merge new URLs into the saved list, optionally validating.

use anyhow::Result;
use std::sync::Arc;
use std::time::{Duration, Instant};
use urlorg_core::cache::VisitCache;
use urlorg_core::config::UrlorgConfig;
use urlorg_core::control::ValidationControl;
use urlorg_core::normalize::Normalizer;
use urlorg_core::pool::PoolProgress;
use urlorg_core::session::{self, SessionRequest, SessionSummary};
use urlorg_core::validate::{CurlProbe, StatusPolicy, Validator};

const PROGRESS_INTERVAL_MS: u64 = 200;

pub async fn run_organize(cfg: &UrlorgConfig, request: &SessionRequest) -> Result<()> {
    let normalizer = Normalizer::new(cfg.keep_params.clone());
    let cache = Arc::new(VisitCache::open_default()?);
    tracing::debug!("visited cache at {}", cache.dir().display());
    let validator = Arc::new(Validator::new(
        cache,
        CurlProbe::new(Duration::from_secs(cfg.request_timeout_secs)),
        StatusPolicy::new(cfg.accepted_status.clone()),
    ));

    // Ctrl-C is handled here only; workers keep running until detached.
    let control = Arc::new(ValidationControl::new());
    let interrupt_handle = {
        let control = Arc::clone(&control);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("caught interrupt, terminating workers");
                control.cancel();
            }
        })
    };

    let (progress_tx, progress_handle) = if request.workers > 0 {
        let (tx, rx) = tokio::sync::mpsc::channel::<PoolProgress>(64);
        (Some(tx), Some(tokio::spawn(print_progress(rx))))
    } else {
        (None, None)
    };

    let result =
        session::run_session(request, &normalizer, validator, control, progress_tx).await;

    interrupt_handle.abort();
    if let Some(handle) = progress_handle {
        let _ = handle.await;
    }

    report(request, &result?);
    Ok(())
}

async fn print_progress(mut rx: tokio::sync::mpsc::Receiver<PoolProgress>) {
    let mut last_print: Option<Instant> = None;
    while let Some(p) = rx.recv().await {
        let now = Instant::now();
        let due = last_print
            .map(|t| now.duration_since(t).as_millis() as u64 >= PROGRESS_INTERVAL_MS)
            .unwrap_or(true);
        if due || p.checked >= p.total {
            eprint!(
                "\r  checked {} / {} ({:.0}%)  invalid {}  ",
                p.checked,
                p.total,
                p.fraction() * 100.0,
                p.invalid
            );
            last_print = Some(now);
        }
    }
    if last_print.is_some() {
        eprintln!();
    }
}

fn report(request: &SessionRequest, summary: &SessionSummary) {
    if summary.cancelled {
        println!("Validation interrupted; partial results were saved.");
    }
    if summary.invalid_found > 0 {
        println!(
            "Invalid URLs found! Check the file {}",
            request.invalid_file.display()
        );
    }
    println!("\nOperation finished!\n");
    match summary.duplicates() {
        Some(n) => println!(
            "Found {} duplicate URLs out of {} total URLs",
            n, summary.input_count
        ),
        None => println!("No duplicate URLs found"),
    }
    if summary.validated {
        println!(
            "Found {} invalid URLs out of {}",
            summary.invalid_found, summary.merged_count
        );
    }
    println!(
        "Saved {} URLs to {}",
        summary.saved_count,
        request.save_file.display()
    );
}
