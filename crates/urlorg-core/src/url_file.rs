//! Line-oriented URL files: saved list, source list, invalid list.
//!
//! Files are UTF-8, one entry per line, written with a single final newline.

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::error::SessionError;
use crate::normalize::Normalizer;

/// Reads non-blank lines from `path`. A missing file is `SessionError::NotFound`.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let data = fs::read_to_string(path).map_err(|e| SessionError::from_io(path, e))?;
    Ok(data
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// Reads `path` and normalizes every line.
pub fn read_urls(path: &Path, normalizer: &Normalizer) -> Result<Vec<String>> {
    tracing::debug!("reading URLs from {}", path.display());
    let urls = read_lines(path)?
        .iter()
        .map(|line| normalizer.normalize(line))
        .filter(|url| !url.is_empty())
        .collect();
    Ok(urls)
}

/// Overwrites `path` with one URL per line.
pub fn save_urls(urls: &[String], path: &Path) -> Result<()> {
    tracing::debug!("saving {} URLs to {}", urls.len(), path.display());
    let mut body = urls.join("\n");
    if !body.is_empty() {
        body.push('\n');
    }
    fs::write(path, body).map_err(|e| SessionError::from_io(path, e))?;
    Ok(())
}

/// Creates `path` (and its parent directories) if it does not exist yet.
pub fn ensure_file(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SessionError::from_io(parent, e))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| SessionError::from_io(path, e))?;
    tracing::debug!("created empty {}", path.display());
    Ok(())
}
