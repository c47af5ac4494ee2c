//! Check GitHub for a newer release.
//!
//! Best effort: any failure is reported to the caller, which logs and moves on.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Timeout for the releases API call.
const UPDATE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
}

/// Releases API URL for `owner/name`.
pub fn latest_release_url(repo: &str) -> String {
    format!("https://api.github.com/repos/{}/releases/latest", repo.trim_matches('/'))
}

/// Extract `tag_name` from a releases API response body.
pub fn parse_latest_tag(body: &[u8]) -> Result<String> {
    let release: Release = serde_json::from_slice(body).context("parse release JSON")?;
    Ok(release.tag_name)
}

/// True if `latest` names a different version than `current` (a leading `v` is ignored).
pub fn is_different(latest: &str, current: &str) -> bool {
    latest.trim().trim_start_matches('v') != current.trim().trim_start_matches('v')
}

/// Fetches the latest release tag of `repo`; returns `Some(tag)` when it
/// differs from `current`. Blocking; call from `spawn_blocking` in async code.
pub fn check_for_update(repo: &str, current: &str) -> Result<Option<String>> {
    let url = latest_release_url(repo);
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(&url).context("invalid update URL")?;
    easy.follow_location(true)?;
    easy.connect_timeout(UPDATE_TIMEOUT)?;
    easy.timeout(UPDATE_TIMEOUT)?;
    easy.useragent(concat!("urlorg/", env!("CARGO_PKG_VERSION")))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform().context("release check request failed")?;
    }

    let code = easy.response_code().context("no response code")?;
    if !(200..300).contains(&code) {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    let latest = parse_latest_tag(&body)?;
    Ok(is_different(&latest, current).then_some(latest))
}
