//! Merge freshly parsed URLs with an existing URL file.
//!
//! Union with exact-string set semantics, then natural sort.

mod natural;

pub use natural::{natural_cmp, natural_sort};

use anyhow::Result;
use std::collections::HashSet;
use std::path::Path;

use crate::normalize::Normalizer;
use crate::url_file;

/// Unions `new_items` with `existing`, dropping exact duplicates, in natural order.
pub fn merge_sorted<I, J>(new_items: I, existing: J) -> Vec<String>
where
    I: IntoIterator<Item = String>,
    J: IntoIterator<Item = String>,
{
    let unique: HashSet<String> = new_items.into_iter().chain(existing).collect();
    let mut merged: Vec<String> = unique.into_iter().collect();
    natural_sort(&mut merged);
    merged
}

/// Reads (and normalizes) the lines of `existing_file` and merges them with
/// `new_items`. A missing file is an error (`SessionError::NotFound`).
pub fn merge(
    new_items: Vec<String>,
    existing_file: &Path,
    normalizer: &Normalizer,
) -> Result<Vec<String>> {
    tracing::debug!("merging content from {}", existing_file.display());
    let existing = url_file::read_urls(existing_file, normalizer)?;
    Ok(merge_sorted(new_items, existing))
}
