//! URL normalization.
//!
//! Turns a raw bookmark line into its canonical form: tracking query data
//! stripped (except allow-listed parameters), mobile/locale host prefixes
//! dropped, and `http:` upgraded to `https:`. Pure string work, no I/O.

mod host;
mod query;

pub use host::{canonical_host, canonical_scheme, HOST_PREFIXES};
pub use query::{retain_params, truncate_at_separators, SEPARATORS};

/// Query parameter prefix kept by default.
pub const DEFAULT_KEEP_PARAM: &str = "viewkey";

/// Normalizer configured with the allow-list of query parameter prefixes.
#[derive(Debug, Clone)]
pub struct Normalizer {
    keep_params: Vec<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(vec![DEFAULT_KEEP_PARAM.to_string()])
    }
}

impl Normalizer {
    pub fn new(keep_params: Vec<String>) -> Self {
        let keep_params = keep_params
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        Self { keep_params }
    }

    pub fn keep_params(&self) -> &[String] {
        &self.keep_params
    }

    /// Canonicalizes `raw`.
    ///
    /// The single pass is repeated until the output stops changing, so
    /// `normalize(normalize(x)) == normalize(x)` holds even for odd inputs
    /// such as `"a##"` or `"x #"`. Real URLs settle after one pass.
    pub fn normalize(&self, raw: &str) -> String {
        let mut current = self.normalize_once(raw);
        loop {
            let next = self.normalize_once(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    fn normalize_once(&self, raw: &str) -> String {
        let url = raw.trim();

        let mut url = if self.mentions_kept_param(url) {
            url.to_string()
        } else {
            truncate_at_separators(url).to_string()
        };

        if let Some(rebuilt) = retain_params(&url, &self.keep_params) {
            url = rebuilt;
        }

        if url.ends_with('#') {
            url.pop();
        }

        canonical_scheme(&canonical_host(&url))
    }

    fn mentions_kept_param(&self, url: &str) -> bool {
        self.keep_params.iter().any(|p| url.contains(p.as_str()))
    }
}

/// Normalizes with the default allow-list (`viewkey`).
pub fn normalize(raw: &str) -> String {
    Normalizer::default().normalize(raw)
}
