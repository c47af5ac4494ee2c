//! On-disk visited cache.
//!
//! One zero-byte marker file per URL that was confirmed reachable, named by
//! a 128-bit content hash of the URL. Presence is the only signal; entries
//! never expire. Workers only ever create markers, so concurrent use needs no
//! locking beyond the filesystem's own guarantees.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use crate::APP_NAME;

/// Bytes of the SHA-256 digest kept for the key (128 bits).
const KEY_BYTES: usize = 16;

/// Marker-file cache rooted at a directory.
#[derive(Debug, Clone)]
pub struct VisitCache {
    dir: PathBuf,
}

impl VisitCache {
    /// Opens (creating if needed) a cache rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("create cache dir {}", dir.display()))?;
        Ok(Self { dir })
    }

    /// Opens the per-user cache under `~/.cache/urlorg`.
    pub fn open_default() -> Result<Self> {
        Self::open(default_dir()?)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Filesystem-safe key for `url`: lowercase hex of a truncated SHA-256.
    pub fn key_for(url: &str) -> String {
        let digest = Sha256::digest(url.as_bytes());
        hex::encode(&digest[..KEY_BYTES])
    }

    pub fn has_cached(&self, key: &str) -> bool {
        self.dir.join(key).is_file()
    }

    /// Records `key` as confirmed reachable. Calling it twice is harmless.
    pub fn mark_cached(&self, key: &str) -> Result<()> {
        let path = self.dir.join(key);
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("create cache marker {}", path.display()))?;
        Ok(())
    }
}

/// Default cache directory (`$XDG_CACHE_HOME/urlorg`).
pub fn default_dir() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_NAME)?;
    Ok(xdg_dirs.get_cache_home().join(APP_NAME))
}
