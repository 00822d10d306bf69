use crate::weak_error;
use once_cell::sync;
use regex::Regex;

/// Parse a floating point number from the longest numeric prefix of `text`.
///
/// Leading whitespace is skipped and trailing garbage is ignored, text without any numeric
/// prefix is treated as zero. Single underscores between digits are accepted (`1_000`).
/// Only ASCII digits form a number.
pub fn parse_lenient(text: &str) -> f64 {
    let Some(literal) = numeric_prefix(text) else {
        return 0.0;
    };
    // prefix grammar is a subset of `f64::from_str` grammar
    weak_error!(literal.parse::<f64>(), "numeric prefix not parsed:").unwrap_or_default()
}

/// Return numeric prefix of `text` without underscores.
fn numeric_prefix(text: &str) -> Option<String> {
    static NUM_RE: sync::Lazy<Regex> = sync::Lazy::new(|| {
        Regex::new(
            r"^[ \t\n\x0B\x0C\r]*([+-]?(?:[0-9]+(?:_[0-9]+)*(?:\.[0-9]+(?:_[0-9]+)*)?|\.[0-9]+(?:_[0-9]+)*)(?:[eE][+-]?[0-9]+(?:_[0-9]+)*)?)",
        )
        .expect("must compile")
    });

    let prefix = NUM_RE.captures(text)?.get(1)?;
    Some(prefix.as_str().replace('_', ""))
}
