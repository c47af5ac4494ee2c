//! Query-string trimming.

/// Cut points tried in order when no kept parameter appears in the URL.
pub const SEPARATORS: [&str; 4] = ["&", "?", "/?", "/#"];

/// Cuts `url` at each separator in [`SEPARATORS`] in turn, keeping the prefix.
pub fn truncate_at_separators(url: &str) -> &str {
    SEPARATORS.iter().fold(url, |acc, sep| match acc.split_once(*sep) {
        Some((prefix, _)) => prefix,
        None => acc,
    })
}

/// Rebuilds `url` keeping only query parameters whose name starts with one of
/// `keep`. Returns `None` when the URL has no `?`.
///
/// Only the text between the first and second `?` is treated as the query.
/// When nothing is kept the result ends in a bare `?`.
pub fn retain_params(url: &str, keep: &[String]) -> Option<String> {
    let mut parts = url.split('?');
    let base = parts.next()?;
    let query = parts.next()?;

    let kept: Vec<&str> = query
        .split('&')
        .filter(|param| keep.iter().any(|k| param.starts_with(k.as_str())))
        .collect();

    Some(format!("{}?{}", base, kept.join("&")))
}
