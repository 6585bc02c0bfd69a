//! Core types for amountfmt.
//!
//! These types carry an amount from raw caller input through parsing and
//! formatting to the final display strings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw amount as handed over by a caller.
///
/// Either a plain number or a string that may embed a currency code or symbol
/// and grouping punctuation (`"100"`, `"USD 5"`, `"1,234.5 BSV"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64's Display never switches to exponent notation
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for RawAmount {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// Integers above 2^53 in magnitude round to the nearest representable `f64`.
impl From<i64> for RawAmount {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

/// Values above 2^53 round to the nearest representable `f64`.
impl From<u64> for RawAmount {
    fn from(n: u64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for RawAmount {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawAmount {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// A raw amount reduced to a finite magnitude and an uppercased currency token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedAmount {
    pub magnitude: f64,
    pub currency: String,
}

/// Caller-controlled formatting knobs.
///
/// Unset fields fall back to defaults: automatic decimal places, commas on,
/// underscores off. Underscores win when both separators are requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimal_places: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_commas: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_underscores: Option<bool>,
}

impl FormatOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a fixed number of decimal places.
    #[must_use]
    pub fn with_decimal_places(mut self, places: u32) -> Self {
        self.decimal_places = Some(places);
        self
    }

    #[must_use]
    pub fn with_commas(mut self, enabled: bool) -> Self {
        self.use_commas = Some(enabled);
        self
    }

    #[must_use]
    pub fn with_underscores(mut self, enabled: bool) -> Self {
        self.use_underscores = Some(enabled);
        self
    }

    /// Whether comma grouping is on (default `true`).
    #[must_use]
    pub fn commas(&self) -> bool {
        self.use_commas.unwrap_or(true)
    }

    /// Whether underscore grouping is on (default `false`).
    #[must_use]
    pub fn underscores(&self) -> bool {
        self.use_underscores.unwrap_or(false)
    }
}

/// Final output: the primary display string plus optional high-precision
/// hover text for the same value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayAmount {
    pub formatted_amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_text: Option<String>,
}

impl DisplayAmount {
    #[must_use]
    pub fn new(formatted_amount: impl Into<String>) -> Self {
        Self {
            formatted_amount: formatted_amount.into(),
            hover_text: None,
        }
    }

    #[must_use]
    pub fn with_hover(mut self, hover_text: impl Into<String>) -> Self {
        self.hover_text = Some(hover_text.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_raw_amount_string_form() {
        assert_eq!(RawAmount::from(100u64).to_string(), "100");
        assert_eq!(RawAmount::from(1.5).to_string(), "1.5");
        assert_eq!(RawAmount::from(1e21).to_string(), "1000000000000000000000");
        assert_eq!(RawAmount::from("USD 5").to_string(), "USD 5");
    }

    #[test]
    fn test_large_integers_round_to_f64() {
        let exact = RawAmount::from(9_007_199_254_740_992u64);
        assert_eq!(RawAmount::from(9_007_199_254_740_993u64), exact);
        assert_eq!(RawAmount::from(-9_007_199_254_740_993i64).to_string(), "-9007199254740992");
    }

    #[test]
    fn test_format_options_defaults() {
        let opts = FormatOptions::default();
        assert!(opts.commas());
        assert!(!opts.underscores());
        assert_eq!(opts.decimal_places, None);

        let opts = FormatOptions::new().with_commas(false).with_underscores(true);
        assert!(!opts.commas());
        assert!(opts.underscores());
    }

    #[test]
    fn test_display_amount_json_shape() {
        let plain = DisplayAmount::new("$1.00");
        assert_eq!(
            serde_json::to_string(&plain).unwrap(),
            r#"{"formattedAmount":"$1.00"}"#
        );

        let hovered = DisplayAmount::new("$0.00").with_hover("$0.00000420");
        assert_eq!(
            serde_json::to_string(&hovered).unwrap(),
            r#"{"formattedAmount":"$0.00","hoverText":"$0.00000420"}"#
        );
    }

    #[test]
    fn test_format_options_from_json() {
        let opts: FormatOptions =
            serde_json::from_str(r#"{"decimalPlaces":3,"useUnderscores":true}"#).unwrap();
        assert_eq!(opts.decimal_places, Some(3));
        assert_eq!(opts.use_commas, None);
        assert_eq!(opts.use_underscores, Some(true));
    }

    #[test]
    fn test_raw_amount_untagged() {
        let n: RawAmount = serde_json::from_str("42").unwrap();
        assert_eq!(n, RawAmount::Number(42.0));
        let s: RawAmount = serde_json::from_str(r#""42 USD""#).unwrap();
        assert_eq!(s, RawAmount::Text("42 USD".to_string()));
    }
}
