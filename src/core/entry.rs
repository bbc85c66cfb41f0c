//! Lenient parsing of user-typed numbers and row entries.
//!
//! Numeric fields never fail: anything that does not start with a decimal number is read as
//! `0`, and trailing garbage after a valid prefix is ignored (`"12abc"` reads as `12`).

use std::str::FromStr;

use super::error::EntryError;

/// Field separator used by [`RowEntry`].
pub const ENTRY_SEPARATOR: char = '|';

/// Parses the longest leading decimal number of `text`, coercing anything else to `0`.
///
/// # Examples
/// ```rust
/// use integral_risk::core::parse_numeric_entry;
///
/// assert_eq!(parse_numeric_entry(" 0.25 "), 0.25);
/// assert_eq!(parse_numeric_entry("12abc"), 12.0);
/// assert_eq!(parse_numeric_entry("n/a"), 0.0);
/// ```
pub fn parse_numeric_entry(text: &str) -> f64 {
    let trimmed = text.trim();
    let end = numeric_prefix_len(trimmed.as_bytes());
    trimmed[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

// Length of `[+-]?digits*(.digits*)?([eE][+-]?digits+)?` with at least one mantissa digit.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        if mantissa_digits > 0 {
            i = j;
        }
    }

    if mantissa_digits == 0 {
        return 0;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

/// A row typed as `situation|loss|probability`.
#[derive(Debug, Clone, PartialEq)]
pub struct RowEntry {
    pub situation: String,
    pub loss: f64,
    pub probability: f64,
}

impl FromStr for RowEntry {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(ENTRY_SEPARATOR).collect();
        let [situation, loss, probability] = fields.as_slice() else {
            return Err(EntryError::FieldCount {
                entry: s.to_string(),
                found: fields.len(),
            });
        };

        Ok(Self {
            situation: situation.trim().to_string(),
            loss: parse_numeric_entry(loss),
            probability: parse_numeric_entry(probability),
        })
    }
}
