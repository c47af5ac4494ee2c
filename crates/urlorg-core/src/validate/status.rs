//! Which HTTP status codes count as a reachable page.

/// Success is any non-error status (< 400) plus an explicit extra set, for
/// sites known to answer a working page with e.g. 403 or 429.
#[derive(Debug, Clone, Default)]
pub struct StatusPolicy {
    extra: Vec<u32>,
}

impl StatusPolicy {
    pub fn new(extra: Vec<u32>) -> Self {
        Self { extra }
    }

    pub fn accepts(&self, code: u32) -> bool {
        (200..400).contains(&code) || self.extra.contains(&code)
    }
}
