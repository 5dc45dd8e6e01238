//! Text normalization utilities
//!
//! Canonical forms for strings crossing provider boundaries: URL slugs,
//! currency amounts, display formatting. Every outward call in the crate
//! passes its string arguments through [`slug`] first.

mod similarity;

pub use similarity::{best_match, closest, similarity, Match};

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Text parsing errors
#[derive(Debug, Error)]
pub enum FormatError {
    /// No digits left after stripping currency decoration
    #[error("no digits in amount: {0:?}")]
    NoDigits(String),
    /// Digits present but the amount does not fit a Decimal
    #[error("amount out of range: {0:?}")]
    OutOfRange(String),
}

/// Lowercase `text` and replace every non-alphanumeric character with `-`.
///
/// Length and character positions are preserved, which keeps slugs stable
/// for URL path segments and comparison keys. Idempotent.
pub fn slug(text: &str) -> String {
    slug_with(text, "-")
}

/// [`slug`] with a custom placeholder (may be empty, e.g. for condition
/// values where the provider expects "verygood" rather than "very-good").
pub fn slug_with(text: &str, placeholder: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
        } else {
            out.push_str(placeholder);
        }
    }
    out
}

/// Parse a currency string like "$9,800.00" into a whole-dollar amount.
///
/// The fractional part (everything from the last `.` on) is dropped, then
/// all non-digit characters are stripped.
pub fn parse_currency(text: &str) -> Result<Decimal, FormatError> {
    let whole = match text.rfind('.') {
        Some(idx) => &text[..idx],
        None => text,
    };

    let digits: String = whole.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(FormatError::NoDigits(text.to_string()));
    }

    Decimal::from_str(&digits).map_err(|_| FormatError::OutOfRange(text.to_string()))
}

/// Render the integer part of an amount with `,` group separators.
pub fn thousands<T: Into<Decimal>>(n: T) -> String {
    let truncated = n.into().trunc().to_string();
    let unsigned = truncated.strip_prefix('-');
    let (sign, digits) = match unsigned {
        Some(d) => ("-", d),
        None => ("", truncated.as_str()),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("{sign}{out}")
}

/// Capitalize each word: first letter upper, rest lower.
///
/// Used to canonicalize shouting decoder output ("HONDA") for catalog
/// lookups and display.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            // An apostrophe continues the word ("o'clock" -> "O'clock")
            word_start = c != '\'';
            out.push(c);
        }
    }
    out
}

/// Clean a scraped field value: trim, strip wrapping punctuation, title-case.
pub fn clean_field(text: &str) -> String {
    let trimmed = text
        .trim()
        .trim_matches(|c: char| "~`{}[]!%^*-=+_|\\/@:;<>?.,#&$()".contains(c));
    title_case(trimmed)
}
