use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SessionError;
use crate::APP_NAME;

/// Global configuration loaded from `~/.config/urlorg/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlorgConfig {
    /// Query parameter prefixes that survive normalization (e.g. `viewkey`).
    pub keep_params: Vec<String>,
    /// Timeout in seconds for the single GET issued per URL.
    pub request_timeout_secs: u64,
    /// Extra HTTP status codes (>= 400) that still count as a valid page.
    pub accepted_status: Vec<u32>,
    /// File that accumulates invalid URLs across runs.
    pub invalid_urls_file: PathBuf,
    /// Ask GitHub for a newer release at startup.
    pub check_updates: bool,
    /// `owner/name` of the GitHub repository used for the update check.
    pub update_repo: String,
}

impl Default for UrlorgConfig {
    fn default() -> Self {
        Self {
            keep_params: vec![crate::normalize::DEFAULT_KEEP_PARAM.to_string()],
            request_timeout_secs: 10,
            accepted_status: Vec::new(),
            invalid_urls_file: PathBuf::from("invalid_urls_tmp.txt"),
            check_updates: true,
            update_repo: "yisuschrist/urls_organizer".to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_NAME)?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlorgConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlorgConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Parse a config file. Missing keys fall back to defaults; a zero request
/// timeout is an error (curl treats 0 as no timeout).
pub fn load_from_path(path: &Path) -> Result<UrlorgConfig> {
    let data = fs::read_to_string(path).map_err(|e| SessionError::from_io(path, e))?;
    let cfg: UrlorgConfig = toml::from_str(&data).map_err(|e| SessionError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    if cfg.request_timeout_secs == 0 {
        return Err(SessionError::Config {
            path: path.to_path_buf(),
            message: "request_timeout_secs must be at least 1".to_string(),
        }
        .into());
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = UrlorgConfig::default();
        assert_eq!(cfg.keep_params, vec!["viewkey".to_string()]);
        assert_eq!(cfg.request_timeout_secs, 10);
        assert!(cfg.accepted_status.is_empty());
        assert_eq!(cfg.invalid_urls_file, PathBuf::from("invalid_urls_tmp.txt"));
        assert!(cfg.check_updates);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UrlorgConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UrlorgConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.keep_params, cfg.keep_params);
        assert_eq!(parsed.request_timeout_secs, cfg.request_timeout_secs);
        assert_eq!(parsed.update_repo, cfg.update_repo);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let toml = r#"
            keep_params = ["viewkey", "v"]
            accepted_status = [403, 429]
        "#;
        let cfg: UrlorgConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.keep_params, vec!["viewkey".to_string(), "v".to_string()]);
        assert_eq!(cfg.accepted_status, vec![403, 429]);
        assert_eq!(cfg.request_timeout_secs, 10);
        assert!(cfg.check_updates);
    }

    #[test]
    fn load_from_path_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "request_timeout_secs = \"ten\"").unwrap();
        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SessionError>(),
            Some(SessionError::Config { .. })
        ));
    }

    #[test]
    fn load_from_path_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_path(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SessionError>(),
            Some(SessionError::NotFound { .. })
        ));
    }

    #[test]
    fn load_from_path_rejects_zero_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "request_timeout_secs = 0").unwrap();
        let err = load_from_path(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SessionError>(),
            Some(SessionError::Config { .. })
        ));
    }
}
