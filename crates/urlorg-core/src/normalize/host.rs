//! Host prefix and scheme canonicalization.

/// Host prefixes collapsed to the bare domain, applied in this order.
pub const HOST_PREFIXES: [&str; 3] = ["/www.", "/m.", "/es."];

/// Replaces the first occurrence of each prefix in [`HOST_PREFIXES`] with `/`.
pub fn canonical_host(url: &str) -> String {
    HOST_PREFIXES
        .iter()
        .fold(url.to_string(), |acc, prefix| acc.replacen(*prefix, "/", 1))
}

/// Upgrades a leading `http:` to `https:`.
pub fn canonical_scheme(url: &str) -> String {
    match url.strip_prefix("http:") {
        Some(rest) => format!("https:{rest}"),
        None => url.to_string(),
    }
}
