//! Per-URL probe error type.

use std::fmt;

/// Why a single GET did not confirm a URL. Never escapes the validator.
#[derive(Debug)]
pub enum ProbeError {
    /// Curl reported an error (timeout, connection refused, DNS, TLS...).
    Curl(curl::Error),
    /// Server answered with a status outside the accepted set.
    Http(u32),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Curl(e) => write!(f, "{}", e),
            ProbeError::Http(code) => write!(f, "HTTP {}", code),
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProbeError::Curl(e) => Some(e),
            ProbeError::Http(_) => None,
        }
    }
}

impl From<curl::Error> for ProbeError {
    fn from(e: curl::Error) -> Self {
        ProbeError::Curl(e)
    }
}
