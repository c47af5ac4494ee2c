//! Natural (alphanumeric-aware) string ordering.
//!
//! Strings are read as alternating text and digit chunks. Digit runs compare
//! by numeric value, text compares by character, and where a digit run lines
//! up with a non-digit character the digit side sorts first (its text chunk
//! ended earlier). Digit runs of any length are supported; numbers are compared
//! as strings after stripping leading zeros, never parsed into integers.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Total order over strings: natural comparison first, plain byte order as the
/// tie-break (e.g. `"a01"` vs `"a1"`), so distinct strings never compare equal.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    natural_key_cmp(a, b).then_with(|| a.cmp(b))
}

/// Sorts `items` in natural order.
pub fn natural_sort(items: &mut [String]) {
    items.sort_by(|a, b| natural_cmp(a, b));
}

fn natural_key_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let ln = take_digits(&mut left);
                let rn = take_digits(&mut right);
                match compare_numeric(&ln, &rn) {
                    Ordering::Equal => {}
                    other => return other,
                }
            }
            (Some(l), Some(_)) if l.is_ascii_digit() => return Ordering::Less,
            (Some(_), Some(r)) if r.is_ascii_digit() => return Ordering::Greater,
            (Some(l), Some(r)) => {
                match l.cmp(&r) {
                    Ordering::Equal => {}
                    other => return other,
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(it: &mut Peekable<Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = it.peek().copied().filter(char::is_ascii_digit) {
        digits.push(c);
        it.next();
    }
    digits
}

fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
