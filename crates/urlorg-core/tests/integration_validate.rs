//! Integration test: real curl probe against a local status server.
//!
//! Covers status classification, redirects, timeouts, refused connections,
//! the on-disk cache short-circuit, and the worker pool over a mixed list.

mod common;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tempfile::tempdir;
use urlorg_core::cache::VisitCache;
use urlorg_core::control::ValidationControl;
use urlorg_core::pool;
use urlorg_core::validate::{CurlProbe, FailureKind, StatusPolicy, ValidationResult, Validator};

fn validator(cache: Arc<VisitCache>) -> Validator<CurlProbe> {
    Validator::new(cache, CurlProbe::new(Duration::from_secs(2)), StatusPolicy::default())
}

#[test]
fn ok_and_error_statuses() {
    let server = common::status_server::start();
    let dir = tempdir().unwrap();
    let v = validator(Arc::new(VisitCache::open(dir.path()).unwrap()));

    assert_eq!(v.validate(&server.url("200")), (ValidationResult::Valid, None));
    assert_eq!(v.validate(&server.url("204")), (ValidationResult::Valid, None));
    assert_eq!(
        v.validate(&server.url("404")),
        (ValidationResult::Invalid, Some(FailureKind::HttpStatus(404)))
    );
    assert_eq!(
        v.validate(&server.url("503")),
        (ValidationResult::Invalid, Some(FailureKind::HttpStatus(503)))
    );
}

#[test]
fn redirect_is_followed() {
    let server = common::status_server::start();
    let dir = tempdir().unwrap();
    let v = validator(Arc::new(VisitCache::open(dir.path()).unwrap()));
    assert_eq!(v.validate(&server.url("redirect")), (ValidationResult::Valid, None));
    assert_eq!(server.hits(), 2);
}

#[test]
fn accepted_status_counts_as_valid() {
    let server = common::status_server::start();
    let dir = tempdir().unwrap();
    let v = Validator::new(
        Arc::new(VisitCache::open(dir.path()).unwrap()),
        CurlProbe::new(Duration::from_secs(2)),
        StatusPolicy::new(vec![403]),
    );
    assert_eq!(v.validate(&server.url("403")), (ValidationResult::Valid, None));
}

#[test]
fn slow_server_times_out() {
    let server = common::status_server::start();
    let dir = tempdir().unwrap();
    let v = Validator::new(
        Arc::new(VisitCache::open(dir.path()).unwrap()),
        CurlProbe::new(Duration::from_secs(1)),
        StatusPolicy::default(),
    );
    assert_eq!(
        v.validate(&server.url("slow")),
        (ValidationResult::Invalid, Some(FailureKind::Timeout))
    );
}

#[test]
fn refused_connection_is_invalid() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let dir = tempdir().unwrap();
    let v = validator(Arc::new(VisitCache::open(dir.path()).unwrap()));
    assert_eq!(
        v.validate(&format!("http://127.0.0.1:{}/", port)),
        (ValidationResult::Invalid, Some(FailureKind::Connection))
    );
}

#[test]
fn cached_url_skips_network_across_runs() {
    let server = common::status_server::start();
    let dir = tempdir().unwrap();
    let cache = Arc::new(VisitCache::open(dir.path()).unwrap());
    let url = server.url("200");

    assert_eq!(validator(Arc::clone(&cache)).validate(&url).0, ValidationResult::Valid);
    assert_eq!(server.hits(), 1);

    // Fresh validator: no in-memory results, only the on-disk marker.
    assert_eq!(validator(Arc::clone(&cache)).validate(&url).0, ValidationResult::Valid);
    assert_eq!(server.hits(), 1);
    assert!(cache.has_cached(&VisitCache::key_for(&url)));
}

#[test]
fn failed_url_is_retried_next_run() {
    let server = common::status_server::start();
    let dir = tempdir().unwrap();
    let cache = Arc::new(VisitCache::open(dir.path()).unwrap());
    let url = server.url("500");

    assert_eq!(validator(Arc::clone(&cache)).validate(&url).0, ValidationResult::Invalid);
    assert_eq!(validator(Arc::clone(&cache)).validate(&url).0, ValidationResult::Invalid);
    assert_eq!(server.hits(), 2);
}

#[tokio::test]
async fn pool_collects_failures_from_real_probe() {
    let server = common::status_server::start();
    let dir = tempdir().unwrap();
    let checker = Arc::new(validator(Arc::new(VisitCache::open(dir.path()).unwrap())));

    let urls: Vec<String> = ["200", "404", "301", "500", "201", "not-a-code"]
        .iter()
        .map(|p| server.url(p))
        .chain(std::iter::once("mailto:someone@example.com".to_string()))
        .collect();

    let out = pool::validate_all(&urls, 3, checker, Arc::new(ValidationControl::new()), None).await;

    let invalid: HashSet<String> = out.invalid.into_iter().collect();
    let expected: HashSet<String> = [
        server.url("404"),
        server.url("500"),
        "mailto:someone@example.com".to_string(),
    ]
    .into_iter()
    .collect();
    assert_eq!(invalid, expected);
    assert_eq!(out.checked, urls.len());
}
