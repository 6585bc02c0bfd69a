//! Currency tables.
//!
//! One fixed set of symbol conventions. `SATS` and `BSV` are first-class units
//! with their own suffixes; everything else is prefixed with a symbol from
//! [`SYMBOLS`], or with the uppercased code and a space when unknown.

/// Satoshis per whole BSV.
pub const SATS_PER_BSV: f64 = 100_000_000.0;

/// Satoshi unit token.
pub const SATS: &str = "SATS";

/// Whole-coin unit token.
pub const BSV: &str = "BSV";

/// Decimal places a BSV amount gets when nothing else applies.
pub const BSV_DECIMALS: u32 = 8;

/// Decimal places every other non-zero-decimal currency gets by default.
pub const FIAT_DECIMALS: u32 = 2;

/// Units that never show fractional digits.
pub const ZERO_DECIMAL_CURRENCIES: &[&str] = &[SATS, "JPY"];

/// Currency code to display symbol. Symbols are prefixed with no extra space,
/// so codes like `CHF` carry their own trailing space.
pub const SYMBOLS: &[(&str, &str)] = &[
    ("USD", "$"),
    ("GBP", "£"),
    ("EUR", "€"),
    ("JPY", "¥"),
    ("CNY", "¥"),
    ("INR", "₹"),
    ("AUD", "A$"),
    ("CAD", "C$"),
    ("CHF", "CHF "),
    ("HKD", "HK$"),
    ("SGD", "S$"),
    ("NZD", "NZ$"),
    ("SEK", "SEK "),
    ("NOK", "NOK "),
    ("MXN", "MX$"),
];

/// Check whether a currency renders without fractional digits.
#[must_use]
pub fn is_zero_decimal(code: &str) -> bool {
    ZERO_DECIMAL_CURRENCIES
        .iter()
        .any(|c| c.eq_ignore_ascii_case(code))
}

/// Look up the display symbol for a currency code.
#[must_use]
pub fn symbol(code: &str) -> Option<&'static str> {
    SYMBOLS
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, s)| *s)
}

/// Attach the currency marker to an already formatted numeric portion.
#[must_use]
pub fn affix(code: &str, numeric: &str) -> String {
    let code = code.to_uppercase();
    match code.as_str() {
        SATS => format!("{} satoshis", numeric),
        BSV => format!("{} BSV", numeric),
        _ => match symbol(&code) {
            Some(s) => format!("{}{}", s, numeric),
            None => format!("{} {}", code, numeric),
        },
    }
}
