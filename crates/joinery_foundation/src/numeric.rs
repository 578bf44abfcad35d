//! Parsing of numeric command parameters.
//!
//! Prices and dimensions are exact decimals; leg counts are non-negative
//! integers. Both parsers name the field in their error so the result line
//! says which parameter was wrong.

use std::str::FromStr;

pub use rust_decimal::Decimal;

use crate::{Error, Result};

/// Parses a decimal parameter such as a price or a dimension.
///
/// Accepts plain decimal notation (`99.99`, `75`, `-0.5`): an optional sign,
/// digits, and at most one point. The scale of the token is preserved, so
/// `1.20` renders back as `1.20`.
///
/// # Errors
///
/// Returns [`crate::ErrorKind::InvalidNumber`] if the token is not a decimal.
pub fn parse_decimal(field: &str, token: &str) -> Result<Decimal> {
    if !is_plain_decimal(token) {
        return Err(Error::invalid_number(field, token));
    }
    Decimal::from_str(token).map_err(|_| Error::invalid_number(field, token))
}

/// `Decimal::from_str` also takes `_` separators and exponents; those would
/// not render back as typed.
fn is_plain_decimal(token: &str) -> bool {
    let unsigned = token.strip_prefix(['-', '+']).unwrap_or(token);
    let (int, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    !(int.is_empty() && frac.is_empty())
        && int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit())
}

/// Parses a count parameter such as the number of legs on a chair.
///
/// # Errors
///
/// Returns [`crate::ErrorKind::InvalidNumber`] if the token is not a
/// non-negative integer that fits in a `u32`.
pub fn parse_count(field: &str, token: &str) -> Result<u32> {
    token
        .parse::<u32>()
        .map_err(|_| Error::invalid_number(field, token))
}
