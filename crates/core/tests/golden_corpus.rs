//! Golden corpus tests for amount display.
//!
//! Each case runs a raw input through a table-backed converter session and
//! checks the exact display strings. The goal is to catch regressions in
//! currency inference, precision selection and grouping.

use amountfmt_core::{ConverterSession, DisplayAmount, FormatOptions, RateTable, TableConverter};

/// A golden test case: input, options, preferred currency and expected display.
struct GoldenCase {
    input: &'static str,
    preferred: &'static str,
    options: FormatOptions,
    expected: &'static str,
    expected_hover: Option<&'static str>,
    description: &'static str,
}

impl GoldenCase {
    const fn plain(
        input: &'static str,
        preferred: &'static str,
        expected: &'static str,
        desc: &'static str,
    ) -> Self {
        Self {
            input,
            preferred,
            options: FormatOptions {
                decimal_places: None,
                use_commas: None,
                use_underscores: None,
            },
            expected,
            expected_hover: None,
            description: desc,
        }
    }

    const fn hover(mut self, hover: &'static str) -> Self {
        self.expected_hover = Some(hover);
        self
    }

    const fn options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }
}

/// 1 USD = 0.02 BSV (1 BSV = $50), 0.8 GBP, 150 JPY.
fn rates() -> RateTable {
    RateTable::new("USD")
        .with_rate("BSV", 0.02)
        .with_rate("GBP", 0.8)
        .with_rate("JPY", 150.0)
}

// =============================================================================
// Golden Corpus: same-currency display (no conversion)
// =============================================================================

const IDENTITY_CASES: &[GoldenCase] = &[
    GoldenCase::plain("100", "SATS", "100 satoshis", "bare integer is satoshis"),
    GoldenCase::plain("1234567", "SATS", "1,234,567 satoshis", "sats grouping"),
    GoldenCase::plain("1234567.89", "BSV", "1,234,567.89 BSV", "bare decimal is BSV"),
    GoldenCase::plain("2.0", "BSV", "2 BSV", "whole BSV trims to integer"),
    GoldenCase::plain("USD 5", "USD", "$5", "code before amount"),
    GoldenCase::plain("1,234.5 usd", "USD", "$1,234.5", "lowercase code with commas"),
    GoldenCase::plain("GBP 0.5", "GBP", "£0.5", "sub-unit gets two decimals, trimmed"),
    GoldenCase::plain("USD 0.00034", "USD", "$0.0003", "sub-unit capped at four decimals")
        .hover("$0.000340"),
    GoldenCase::plain("JPY 1234.5", "JPY", "¥1,235", "yen has no decimals"),
];

// =============================================================================
// Golden Corpus: conversion into the preferred currency
// =============================================================================

const CONVERSION_CASES: &[GoldenCase] = &[
    GoldenCase::plain("1.0", "USD", "$50", "1 BSV in dollars"),
    GoldenCase::plain("100000000", "GBP", "£40", "1 BSV of sats in pounds"),
    GoldenCase::plain("0.5", "JPY", "¥3,750", "half a coin in yen"),
    GoldenCase::plain("0.5", "SATS", "50,000,000 satoshis", "BSV to sats"),
    GoldenCase::plain("USD 1", "SATS", "2,000,000 satoshis", "dollars to sats"),
    GoldenCase::plain("240", "USD", "$0.0001", "a few sats in dollars").hover("$0.000120"),
    GoldenCase::plain("1", "USD", "$0", "one sat in dollars").hover("$0.000000500"),
];

// =============================================================================
// Golden Corpus: caller options
// =============================================================================

const OPTION_CASES: &[GoldenCase] = &[
    GoldenCase::plain("1234567", "SATS", "1_234_567 satoshis", "underscores win")
        .options(FormatOptions {
            decimal_places: None,
            use_commas: Some(true),
            use_underscores: Some(true),
        }),
    GoldenCase::plain("1234567", "SATS", "1234567 satoshis", "grouping off").options(
        FormatOptions {
            decimal_places: None,
            use_commas: Some(false),
            use_underscores: None,
        },
    ),
    GoldenCase::plain("USD 5", "USD", "$5.00", "forced decimals are kept").options(
        FormatOptions {
            decimal_places: Some(2),
            use_commas: None,
            use_underscores: None,
        },
    ),
    GoldenCase::plain("1500", "SATS", "1,500 satoshis", "sats ignore forced decimals").options(
        FormatOptions {
            decimal_places: Some(4),
            use_commas: None,
            use_underscores: None,
        },
    ),
];

// =============================================================================
// Golden Corpus: degraded input
// =============================================================================

const FALLBACK_CASES: &[GoldenCase] = &[
    GoldenCase::plain("lots", "USD", "lots", "no digits echoes input"),
    GoldenCase::plain("5 XYZ", "USD", "5 XYZ", "unknown code echoes input"),
    GoldenCase::plain("XYZ123", "USD", "XYZ123", "letters stay in the token"),
];

async fn check(cases: &[GoldenCase]) {
    let mut failures = Vec::new();

    for case in cases {
        let session = ConverterSession::open(TableConverter::new(rates(), case.preferred))
            .await
            .expect("rate table is valid");
        let shown = session
            .format(&case.input.into(), &case.options)
            .await
            .expect("table converter does not fail once initialized");

        let expected = DisplayAmount {
            formatted_amount: case.expected.to_string(),
            hover_text: case.expected_hover.map(str::to_string),
        };

        if shown != expected {
            failures.push(format!(
                "{:?} -> {} ({}): expected {:?}, got {:?}",
                case.input, case.preferred, case.description, expected, shown
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "{} golden case(s) failed:\n{}",
        failures.len(),
        failures.join("\n")
    );
}

#[tokio::test]
async fn test_golden_identity() {
    check(IDENTITY_CASES).await;
}

#[tokio::test]
async fn test_golden_conversion() {
    check(CONVERSION_CASES).await;
}

#[tokio::test]
async fn test_golden_options() {
    check(OPTION_CASES).await;
}

#[tokio::test]
async fn test_golden_fallback() {
    check(FALLBACK_CASES).await;
}
