//! Single HTTP GET used to decide reachability.

use std::time::Duration;

use super::error::ProbeError;

/// Something that can fetch a URL once and report the final status code.
pub trait Probe: Send + Sync {
    fn get_status(&self, url: &str) -> Result<u32, ProbeError>;
}

/// Curl-backed probe. Follows redirects; the body is read and discarded.
#[derive(Debug, Clone, Copy)]
pub struct CurlProbe {
    pub timeout: Duration,
}

impl CurlProbe {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for CurlProbe {
    fn default() -> Self {
        Self::new(Duration::from_secs(10))
    }
}

impl Probe for CurlProbe {
    /// Runs in the current thread; call from `spawn_blocking` if used from async code.
    fn get_status(&self, url: &str) -> Result<u32, ProbeError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.timeout)?;
        easy.timeout(self.timeout)?;
        easy.useragent(concat!("urlorg/", env!("CARGO_PKG_VERSION")))?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| Ok(data.len()))?;
            transfer.perform()?;
        }

        Ok(easy.response_code()?)
    }
}
