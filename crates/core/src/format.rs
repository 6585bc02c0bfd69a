//! Amount formatting.
//!
//! Renders a numeric amount in a currency as a display string. Precision is
//! picked per currency and per magnitude:
//!
//! - Zero-decimal units (`SATS`, `JPY`) never show fractional digits.
//! - Sub-unit amounts get 2-4 decimals, more the smaller they are, so they
//!   don't collapse to `0.00`.
//! - Otherwise `BSV` gets 8 decimals and everything else 2.
//!
//! Automatically chosen precision has its trailing zeros trimmed; an explicit
//! decimal count is always rendered in full.

use crate::currency::{self, BSV, BSV_DECIMALS, FIAT_DECIMALS};
use crate::types::FormatOptions;

/// Highest number of fractional digits [`to_fixed`] will render.
pub const MAX_DECIMALS: u32 = 100;

/// Pick the decimal count for an amount when the caller hasn't forced one.
///
/// # Examples
///
/// ```
/// use amountfmt_core::format::default_decimal_places;
///
/// assert_eq!(default_decimal_places(1500.0, "SATS"), 0);
/// assert_eq!(default_decimal_places(0.05, "USD"), 3);
/// assert_eq!(default_decimal_places(12.0, "BSV"), 8);
/// ```
#[must_use]
pub fn default_decimal_places(amount: f64, currency: &str) -> u32 {
    if currency::is_zero_decimal(currency) {
        return 0;
    }

    let abs_amount = amount.abs();

    if abs_amount < 1.0 && abs_amount != 0.0 {
        let places = -abs_amount.log10().floor() + 1.0;
        return places.clamp(2.0, 4.0) as u32;
    }

    if currency.eq_ignore_ascii_case(BSV) {
        BSV_DECIMALS
    } else {
        FIAT_DECIMALS
    }
}

/// Render an amount with exactly `decimals` fractional digits.
///
/// Works on the exact binary value, so `0.15` (stored as 0.1499...) renders
/// as `0.1` at one decimal. Exact ties round away from zero (`2.5` → `3`).
/// Negative zero renders without a sign.
#[must_use]
pub fn to_fixed(amount: f64, decimals: u32) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    // -0.0 would otherwise keep its sign
    let amount = if amount == 0.0 { 0.0 } else { amount };

    if amount.is_finite() {
        // A tie at `decimals` digits needs amount * 2^(decimals+1) to be integral
        let scaled = amount * 2f64.powi(decimals as i32 + 1);
        if scaled.is_finite() && scaled.fract() == 0.0 {
            let wide = format!("{:.*}", decimals as usize + 1, amount);
            if let Some(head) = wide.strip_suffix('5') {
                let head = head.strip_suffix('.').unwrap_or(head);
                return increment_last_digit(head);
            }
        }
    }

    format!("{:.*}", decimals as usize, amount)
}

/// Add one unit in the last place to a rendered decimal, carrying leftwards.
fn increment_last_digit(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();

    for i in (0..chars.len()).rev() {
        match chars[i] {
            '9' => chars[i] = '0',
            c @ '0'..='8' => {
                chars[i] = (c as u8 + 1) as char;
                return chars.into_iter().collect();
            }
            _ => {}
        }
    }

    // Every digit carried over (9.95 -> 10.0)
    let at = usize::from(chars.first() == Some(&'-'));
    chars.insert(at, '1');
    chars.into_iter().collect()
}

/// Insert `separator` every three digits from the right.
///
/// A leading `-` is kept out of the grouping. Anything that isn't a plain run
/// of digits (`NaN`, `inf`) is returned unchanged.
#[must_use]
pub fn group_digits(integer_part: &str, separator: char) -> String {
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return integer_part.to_string();
    }

    let grouped: String = digits
        .chars()
        .rev()
        .collect::<Vec<_>>()
        .chunks(3)
        .map(|c| c.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(&separator.to_string())
        .chars()
        .rev()
        .collect();

    format!("{}{}", sign, grouped)
}

/// Strip trailing fractional zeros, dropping the fraction if nothing remains.
fn trim_trailing_zeros(fixed: &str) -> &str {
    if !fixed.contains('.') {
        return fixed;
    }
    fixed.trim_end_matches('0').trim_end_matches('.')
}

/// Render the numeric part of an amount: fixed point, optional trimming, then
/// grouping of the integer part. Underscores take precedence over commas.
#[must_use]
pub fn format_numeric_portion(
    amount: f64,
    decimals: u32,
    use_commas: bool,
    use_underscores: bool,
    trim_zeros: bool,
) -> String {
    let fixed = to_fixed(amount, decimals);
    let fixed = if trim_zeros && decimals > 0 {
        trim_trailing_zeros(&fixed)
    } else {
        fixed.as_str()
    };

    let (integer_part, decimal_part) = match fixed.split_once('.') {
        Some((int, dec)) => (int, dec),
        None => (fixed, ""),
    };

    let integer_part = if use_underscores {
        group_digits(integer_part, '_')
    } else if use_commas {
        group_digits(integer_part, ',')
    } else {
        integer_part.to_string()
    };

    if decimal_part.is_empty() {
        integer_part
    } else {
        format!("{}.{}", integer_part, decimal_part)
    }
}

/// Format an amount in a currency for display.
///
/// `forced_decimal_places` overrides both the caller's options and the
/// automatic choice; zero-decimal units override everything.
///
/// # Examples
///
/// ```
/// use amountfmt_core::format::format_currency_amount;
/// use amountfmt_core::FormatOptions;
///
/// let opts = FormatOptions::default();
/// assert_eq!(format_currency_amount(100.0, "SATS", &opts, None), "100 satoshis");
/// assert_eq!(format_currency_amount(1234567.89, "BSV", &opts, None), "1,234,567.89 BSV");
/// assert_eq!(format_currency_amount(0.00034, "usd", &opts, None), "$0.0003");
/// ```
#[must_use]
pub fn format_currency_amount(
    amount: f64,
    currency: &str,
    options: &FormatOptions,
    forced_decimal_places: Option<u32>,
) -> String {
    let currency = currency.to_uppercase();
    let no_decimals = currency::is_zero_decimal(&currency);

    let decimal_places = if no_decimals {
        0
    } else {
        forced_decimal_places
            .or(options.decimal_places)
            .unwrap_or_else(|| default_decimal_places(amount, &currency))
    };

    let auto_precision =
        options.decimal_places.is_none() && forced_decimal_places.is_none() && !no_decimals;

    let numeric = format_numeric_portion(
        amount,
        decimal_places,
        options.commas(),
        options.underscores(),
        auto_precision,
    );

    currency::affix(&currency, &numeric)
}

/// Decimal count for the hover rendering of an amount.
///
/// Tiny amounts get two digits past their leading significant digit, within
/// 4..=12. Zero gets 2.
///
/// # Examples
///
/// ```
/// use amountfmt_core::format::hover_precision;
///
/// assert_eq!(hover_precision(0.0000042), 8);
/// assert_eq!(hover_precision(250.0), 4);
/// assert_eq!(hover_precision(0.0), 2);
/// ```
#[must_use]
pub fn hover_precision(amount: f64) -> u32 {
    let abs_amount = amount.abs();
    if abs_amount == 0.0 {
        return 2;
    }

    let magnitude = abs_amount.log10().floor();
    let precision = if magnitude < 0.0 { -magnitude + 2.0 } else { 2.0 };
    precision.clamp(4.0, 12.0) as u32
}
