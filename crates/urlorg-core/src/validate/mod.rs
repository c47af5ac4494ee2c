//! URL validation: one GET per URL, backed by the visited cache.
//!
//! Order of checks for a URL:
//! 1. strip a trailing `" (title)"` annotation (the validation input),
//! 2. in-memory result for this run,
//! 3. on-disk cache marker (skip network entirely),
//! 4. well-formedness,
//! 5. a single GET with a fixed timeout. No retries.

mod classify;
mod error;
mod probe;
mod status;

pub use classify::{classify, classify_curl_error, FailureKind};
pub use error::ProbeError;
pub use probe::{CurlProbe, Probe};
pub use status::StatusPolicy;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::cache::VisitCache;

/// Outcome of validating one URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid,
}

/// Blocking per-URL check driven by the worker pool.
pub trait UrlCheck: Send + Sync {
    fn check(&self, url: &str) -> ValidationResult;
}

/// The URL used for cache keys and network checks: everything before the
/// first `" ("`, i.e. without a trailing title annotation.
pub fn validation_input(url: &str) -> &str {
    match url.split_once(" (") {
        Some((head, _)) => head,
        None => url,
    }
}

/// Absolute `http`/`https` URL with a host.
pub fn is_well_formed(url: &str) -> bool {
    match url::Url::parse(url) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// Validator for one run. The in-memory results map lives as long as the
/// validator; build a fresh one per run.
pub struct Validator<P: Probe = CurlProbe> {
    cache: Arc<VisitCache>,
    probe: P,
    status: StatusPolicy,
    seen: Mutex<HashMap<String, ValidationResult>>,
}

impl<P: Probe> Validator<P> {
    pub fn new(cache: Arc<VisitCache>, probe: P, status: StatusPolicy) -> Self {
        Self {
            cache,
            probe,
            status,
            seen: Mutex::new(HashMap::new()),
        }
    }

    /// Validates `url`, returning the outcome and (for invalid URLs) the reason.
    pub fn validate(&self, url: &str) -> (ValidationResult, Option<FailureKind>) {
        let input = validation_input(url);
        tracing::debug!("validating URL: <{}>", input);

        if let Some(result) = self.remembered(input) {
            return (result, None);
        }

        let key = VisitCache::key_for(input);
        if self.cache.has_cached(&key) {
            tracing::debug!("link {} already visited, skipping", input);
            self.remember(input, ValidationResult::Valid);
            return (ValidationResult::Valid, None);
        }

        let outcome = if !is_well_formed(input) {
            tracing::error!("invalid URL: {}", input);
            Err(FailureKind::Malformed)
        } else {
            match self.fetch(input) {
                Ok(code) => {
                    if let Err(e) = self.cache.mark_cached(&key) {
                        tracing::warn!("could not cache {}: {:#}", input, e);
                    }
                    tracing::debug!("{} answered HTTP {}", input, code);
                    Ok(())
                }
                Err(e) => {
                    let kind = classify(&e);
                    match kind {
                        FailureKind::HttpStatus(code) => {
                            tracing::info!("invalid URL: {} with status code {}", input, code)
                        }
                        FailureKind::Timeout | FailureKind::Connection => {
                            tracing::error!("error connecting to {}: {}", input, e)
                        }
                        FailureKind::Malformed | FailureKind::Other => {
                            tracing::error!("error making GET request to {}: {}", input, e)
                        }
                    }
                    Err(kind)
                }
            }
        };

        let (result, reason) = match outcome {
            Ok(()) => (ValidationResult::Valid, None),
            Err(kind) => (ValidationResult::Invalid, Some(kind)),
        };
        self.remember(input, result);
        (result, reason)
    }

    fn fetch(&self, url: &str) -> Result<u32, ProbeError> {
        let code = self.probe.get_status(url)?;
        if self.status.accepts(code) {
            Ok(code)
        } else {
            Err(ProbeError::Http(code))
        }
    }

    fn remembered(&self, input: &str) -> Option<ValidationResult> {
        self.seen
            .lock()
            .ok()
            .and_then(|seen| seen.get(input).copied())
    }

    fn remember(&self, input: &str, result: ValidationResult) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.insert(input.to_string(), result);
        }
    }
}

impl<P: Probe> UrlCheck for Validator<P> {
    fn check(&self, url: &str) -> ValidationResult {
        self.validate(url).0
    }
}
