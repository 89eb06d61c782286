//! Duration-expression parsing.
//!
//! Turns a human-supplied duration string into a whole second count.
//! Three grammars are recognized, in this precedence order:
//!
//! 1. `H:M:S` — colon-separated triple, e.g. `01:30:00`
//! 2. unit suffix — `90s` / `90 sec`, `30m` / `30 min`, `2h` / `2 hr` / `2 hour`
//! 3. bare integer seconds — `5400`
//!
//! Matching is case-insensitive and surrounding whitespace is ignored.
//! Fractional seconds are not supported by any grammar.

use crate::error::{Error, Result};

/// Parse a duration expression into seconds.
///
/// # Errors
///
/// Returns [`Error::InvalidDuration`] when the expression matches none of
/// the recognized grammars, or when an arithmetic overflow would occur.
///
/// # Leniency
///
/// In the unit-suffix grammar, digit extraction takes only the numeric
/// characters present in the string: `"3xm"` parses the same as `"3m"`.
/// A suffix with no digits at all is still rejected.
pub fn parse_duration(expr: &str) -> Result<u64> {
    let s = expr.trim().to_ascii_lowercase();

    if s.is_empty() {
        return Err(Error::InvalidDuration(expr.to_string()));
    }

    // H:M:S — any expression containing a colon takes this branch only.
    if s.contains(':') {
        return parse_colon_triple(expr, &s);
    }

    // Unit-suffixed.
    if let Some(multiplier) = suffix_multiplier(&s) {
        let value = extract_digits(expr, &s)?;
        return value
            .checked_mul(multiplier)
            .ok_or_else(|| Error::InvalidDuration(expr.to_string()));
    }

    // Bare integer seconds.
    if s.bytes().all(|b| b.is_ascii_digit()) {
        return s
            .parse::<u64>()
            .map_err(|_| Error::InvalidDuration(expr.to_string()));
    }

    Err(Error::InvalidDuration(expr.to_string()))
}

/// Parse `H:M:S` where each component is a non-negative integer. There is
/// no upper bound on the hour component.
fn parse_colon_triple(original: &str, s: &str) -> Result<u64> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        return Err(Error::InvalidDuration(original.to_string()));
    }

    let mut fields = [0u64; 3];
    for (field, part) in fields.iter_mut().zip(&parts) {
        *field = part
            .trim()
            .parse::<u64>()
            .map_err(|_| Error::InvalidDuration(original.to_string()))?;
    }
    let [h, m, sec] = fields;

    h.checked_mul(3600)
        .and_then(|acc| acc.checked_add(m.checked_mul(60)?))
        .and_then(|acc| acc.checked_add(sec))
        .ok_or_else(|| Error::InvalidDuration(original.to_string()))
}

/// Map a trailing unit to its seconds multiplier, or `None` when the
/// expression carries no recognized unit.
fn suffix_multiplier(s: &str) -> Option<u64> {
    if s.ends_with("sec") || s.ends_with('s') {
        Some(1)
    } else if s.ends_with("min") || s.ends_with('m') {
        Some(60)
    } else if s.ends_with("hour") || s.ends_with("hr") || s.ends_with('h') {
        Some(3600)
    } else {
        None
    }
}

/// Collect the numeric characters of `s` into an integer, rejecting
/// expressions containing no digits at all.
fn extract_digits(original: &str, s: &str) -> Result<u64> {
    let digits: String = s.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(Error::InvalidDuration(original.to_string()));
    }
    digits
        .parse::<u64>()
        .map_err(|_| Error::InvalidDuration(original.to_string()))
}
