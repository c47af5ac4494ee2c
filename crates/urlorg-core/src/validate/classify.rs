//! Classify probe failures for logging and summary counts.

use super::error::ProbeError;

/// Coarse reason a URL was marked invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Not a syntactically valid absolute http(s) URL.
    Malformed,
    /// Server answered with an error status.
    HttpStatus(u32),
    /// Connect or transfer timed out.
    Timeout,
    /// Connection refused, reset, DNS failure.
    Connection,
    /// Any other transport failure (TLS, protocol...).
    Other,
}

/// Classify a curl error.
pub fn classify_curl_error(e: &curl::Error) -> FailureKind {
    if e.is_operation_timedout() {
        return FailureKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return FailureKind::Connection;
    }
    FailureKind::Other
}

pub fn classify(e: &ProbeError) -> FailureKind {
    match e {
        ProbeError::Curl(ce) => classify_curl_error(ce),
        ProbeError::Http(code) => FailureKind::HttpStatus(*code),
    }
}
