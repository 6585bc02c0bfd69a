//! Display amount normalization.
//!
//! Combines the collaborator's converted baseline with a local re-parse of
//! the raw input. The local path only ever improves on the baseline:
//!
//! - zero-decimal preferred currencies get a re-rendered amount with no
//!   fractional digits,
//! - non-zero amounts below 0.01 keep the baseline text but gain hover text
//!   at higher precision.
//!
//! Anything the local path can't handle falls back to the baseline as-is.

use crate::converter::CurrencyConverter;
use crate::currency;
use crate::error::Result;
use crate::format::{format_currency_amount, hover_precision};
use crate::parse::parse_input_amount;
use crate::types::{DisplayAmount, FormatOptions, RawAmount};

/// Amounts below this (in the preferred currency) get hover text.
pub const HOVER_THRESHOLD: f64 = 0.01;

/// Outcome of refining a raw amount against a collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refinement {
    /// Nothing to improve; show the baseline unchanged.
    Baseline,
    /// Show this instead of the baseline.
    Replace(DisplayAmount),
    /// Keep the baseline text and attach this hover text.
    Hover(String),
}

impl Refinement {
    /// Resolve against the collaborator's baseline.
    #[must_use]
    pub fn apply(self, baseline: DisplayAmount) -> DisplayAmount {
        match self {
            Self::Baseline => baseline,
            Self::Replace(display) => display,
            Self::Hover(hover_text) => DisplayAmount {
                formatted_amount: baseline.formatted_amount,
                hover_text: Some(hover_text),
            },
        }
    }
}

/// Decide how to improve on the baseline for `amount`, without the baseline
/// itself. Never fails; anything unresolvable is [`Refinement::Baseline`].
#[must_use]
pub fn refine<C>(converter: &C, amount: &RawAmount, options: &FormatOptions) -> Refinement
where
    C: CurrencyConverter + ?Sized,
{
    let Some(parsed) = parse_input_amount(amount) else {
        tracing::debug!(input = %amount, "unparseable input, using baseline");
        return Refinement::Baseline;
    };

    let preferred = converter.preferred_currency().to_uppercase();
    let converted = converter
        .convert_currency(parsed.magnitude, &parsed.currency, &preferred)
        .filter(|value| value.is_finite());

    let Some(converted) = converted else {
        tracing::debug!(
            from = %parsed.currency,
            to = %preferred,
            "no local conversion, using baseline"
        );
        return Refinement::Baseline;
    };

    if currency::is_zero_decimal(&preferred) {
        return Refinement::Replace(DisplayAmount::new(format_currency_amount(
            converted,
            &preferred,
            options,
            Some(0),
        )));
    }

    let abs_amount = converted.abs();
    if abs_amount > 0.0 && abs_amount < HOVER_THRESHOLD {
        let precision = hover_precision(converted);
        tracing::trace!(converted, precision, "attaching hover text");
        return Refinement::Hover(format_currency_amount(
            converted,
            &preferred,
            options,
            Some(precision),
        ));
    }

    Refinement::Baseline
}

/// Turn a raw amount into what the UI should display.
///
/// Asks the collaborator for its baseline, then refines it locally. Errors
/// from the collaborator propagate; local failures never do.
pub async fn normalize_display_amount<C>(
    converter: &C,
    amount: &RawAmount,
    options: &FormatOptions,
) -> Result<DisplayAmount>
where
    C: CurrencyConverter + ?Sized,
{
    let baseline = converter.convert_amount(amount, options).await?;
    Ok(refine(converter, amount, options).apply(baseline))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    /// Collaborator returning a canned baseline and a fixed conversion.
    struct Canned {
        baseline: Result<DisplayAmount>,
        converted: Option<f64>,
        preferred: &'static str,
    }

    impl Canned {
        fn new(baseline: &str, converted: Option<f64>, preferred: &'static str) -> Self {
            Self {
                baseline: Ok(DisplayAmount::new(baseline)),
                converted,
                preferred,
            }
        }
    }

    #[async_trait]
    impl CurrencyConverter for Canned {
        async fn initialize(&self) -> Result<()> {
            Ok(())
        }

        fn dispose(&self) {}

        async fn convert_amount(
            &self,
            _amount: &RawAmount,
            _options: &FormatOptions,
        ) -> Result<DisplayAmount> {
            self.baseline.clone()
        }

        fn convert_currency(&self, _amount: f64, _from: &str, _to: &str) -> Option<f64> {
            self.converted
        }

        fn preferred_currency(&self) -> String {
            self.preferred.to_string()
        }
    }

    async fn run(conv: &Canned, input: &str) -> DisplayAmount {
        normalize_display_amount(conv, &RawAmount::from(input), &FormatOptions::default())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_tiny_amount_gets_hover() {
        let conv = Canned::new("$0.00", Some(0.0000042), "usd");
        let shown = run(&conv, "1").await;
        assert_eq!(shown, DisplayAmount::new("$0.00").with_hover("$0.00000420"));
    }

    #[tokio::test]
    async fn test_negative_tiny_amount_gets_hover() {
        let conv = Canned::new("$-0.00", Some(-0.004), "USD");
        let shown = run(&conv, "1").await;
        assert_eq!(shown.hover_text.as_deref(), Some("$-0.00400"));
    }

    #[tokio::test]
    async fn test_regular_amount_keeps_baseline() {
        let conv = Canned::new("$12.34", Some(12.34), "USD");
        assert_eq!(run(&conv, "1").await, DisplayAmount::new("$12.34"));

        // Exactly at the threshold: no hover
        let conv = Canned::new("$0.01", Some(0.01), "USD");
        assert_eq!(run(&conv, "1").await, DisplayAmount::new("$0.01"));
    }

    #[tokio::test]
    async fn test_zero_amount_has_no_hover() {
        let conv = Canned::new("$0", Some(0.0), "USD");
        assert_eq!(run(&conv, "0").await, DisplayAmount::new("$0"));
    }

    #[tokio::test]
    async fn test_zero_decimal_preferred_replaces_baseline() {
        let conv = Canned::new("1,234.56 satoshis", Some(1234.56), "SATS");
        assert_eq!(
            run(&conv, "0.0000123456").await,
            DisplayAmount::new("1,235 satoshis")
        );

        // No hover for zero-decimal units even when tiny
        let conv = Canned::new("¥0.004", Some(0.004), "JPY");
        assert_eq!(run(&conv, "1").await, DisplayAmount::new("¥0"));
    }

    #[tokio::test]
    async fn test_unparseable_input_uses_baseline() {
        let conv = Canned::new("whatever", Some(0.001), "USD");
        assert_eq!(run(&conv, "no digits").await, DisplayAmount::new("whatever"));
    }

    #[tokio::test]
    async fn test_missing_conversion_uses_baseline() {
        let conv = Canned::new("$0.00", None, "USD");
        assert_eq!(run(&conv, "1").await, DisplayAmount::new("$0.00"));

        let conv = Canned::new("$0.00", Some(f64::NAN), "USD");
        assert_eq!(run(&conv, "1").await, DisplayAmount::new("$0.00"));
    }

    #[tokio::test]
    async fn test_collaborator_error_propagates() {
        let conv = Canned {
            baseline: Err(Error::Collaborator("rates offline".to_string())),
            converted: Some(1.0),
            preferred: "USD",
        };
        let err = normalize_display_amount(
            &conv,
            &RawAmount::from("1"),
            &FormatOptions::default(),
        )
        .await
        .unwrap_err();
        assert_eq!(err, Error::Collaborator("rates offline".to_string()));
    }

    #[test]
    fn test_refine_without_baseline() {
        let conv = Canned::new("unused", Some(0.005), "EUR");
        let opts = FormatOptions::default();
        assert_eq!(
            refine(&conv, &RawAmount::from("1"), &opts),
            Refinement::Hover("€0.00500".to_string())
        );
        assert_eq!(
            refine(&conv, &RawAmount::from(""), &opts),
            Refinement::Baseline
        );
    }

    #[test]
    fn test_hover_respects_grouping_options() {
        let conv = Canned::new("unused", Some(0.0000042), "XYZ");
        let opts = FormatOptions::new().with_decimal_places(2);
        // Hover precision overrides the caller's decimal places
        assert_eq!(
            refine(&conv, &RawAmount::from("1"), &opts),
            Refinement::Hover("XYZ 0.00000420".to_string())
        );
    }
}
