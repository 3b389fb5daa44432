//! Amount normalization for the `1.234,56` locale format.
//!
//! Cleanup is an ordered list of regex rewrites, each applied to the whole
//! string before the next one runs:
//!
//! 1. drop every `.` (thousands separator),
//! 2. turn every `,` into `.` (decimal separator),
//! 3. replace a letter-led value with `0`.
//!
//! Whatever still fails to parse becomes `0.0`. A malformed cell is therefore
//! indistinguishable from a genuine zero.

use once_cell::sync::Lazy;
use regex::Regex;

static CLEANUP_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"\.", ""),
        (",", "."),
        (r"(?s)^[a-zA-Z].*$", "0"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (Regex::new(pattern).expect("valid cleanup rule"), replacement)
    })
    .collect()
});

/// Apply the cleanup rules in order, without parsing.
pub fn clean_amount(raw: &str) -> String {
    CLEANUP_RULES
        .iter()
        .fold(raw.to_string(), |value, (re, replacement)| {
            re.replace_all(&value, *replacement).into_owned()
        })
}

/// Convert a locale-formatted amount into a finite `f64`.
///
/// Never fails: blank, letter-led or otherwise malformed input yields `0.0`.
pub fn normalize_amount(raw: &str) -> f64 {
    match clean_amount(raw).trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}
