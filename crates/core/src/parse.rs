//! Raw amount parsing.
//!
//! Pulls a magnitude and a currency token out of loosely formatted input such
//! as `"100"`, `"USD 5"` or `"1,234.5 BSV"`. When no token is present, a bare
//! integer is read as satoshis and a bare decimal as whole BSV.

use std::sync::LazyLock;

use regex::Regex;

use crate::currency::{BSV, SATS};
use crate::types::{ParsedAmount, RawAmount};

/// Leading decimal literal of the digit/dot/minus residue.
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?(?:\d+(?:\.\d*)?|\.\d+)").expect("valid regex"));

/// Parse a raw amount into a magnitude and currency token.
///
/// Returns `None` when no finite magnitude can be extracted; callers should
/// fall back to a precomputed display value instead of showing garbage.
///
/// # Examples
///
/// ```
/// use amountfmt_core::parse::parse_input_amount;
/// use amountfmt_core::RawAmount;
///
/// let parsed = parse_input_amount(&RawAmount::from("USD 5")).unwrap();
/// assert_eq!(parsed.magnitude, 5.0);
/// assert_eq!(parsed.currency, "USD");
///
/// let parsed = parse_input_amount(&RawAmount::from(100u64)).unwrap();
/// assert_eq!(parsed.currency, "SATS");
///
/// assert!(parse_input_amount(&RawAmount::from("lots")).is_none());
/// ```
#[must_use]
pub fn parse_input_amount(raw: &RawAmount) -> Option<ParsedAmount> {
    let text = raw.to_string();

    let magnitude = parse_magnitude(&text)?;
    let currency = extract_currency(&text);

    tracing::trace!(input = %text, magnitude, currency = %currency, "parsed amount");

    Some(ParsedAmount {
        magnitude,
        currency,
    })
}

/// Keep digits, `.` and `-`, then read the leading decimal literal.
fn parse_magnitude(text: &str) -> Option<f64> {
    let residue: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    let literal = LEADING_NUMBER.find(&residue)?.as_str();
    let value: f64 = literal.parse().ok()?;

    value.is_finite().then_some(value)
}

/// Drop digits, `.`, `,` and whitespace; whatever is left is the token.
fn extract_currency(text: &str) -> String {
    let token: String = text
        .chars()
        .filter(|c| !(c.is_ascii_digit() || *c == '.' || *c == ',' || c.is_whitespace()))
        .collect();
    let token = token.trim().to_uppercase();

    if !token.is_empty() {
        token
    } else if text.contains('.') {
        BSV.to_string()
    } else {
        SATS.to_string()
    }
}
