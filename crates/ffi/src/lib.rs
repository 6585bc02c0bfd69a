//! UniFFI bindings for amountfmt.
//!
//! Exposes the parser and formatter to Swift, Kotlin and Python. The
//! orchestrator needs an async collaborator supplied by the host, so hosts
//! run that part themselves on top of these primitives.

mod types;

pub use types::*;

use amountfmt_core::RawAmount;

uniffi::setup_scaffolding!();

// =============================================================================
// Exported Functions
// =============================================================================

/// Get the library version string.
#[uniffi::export]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Split a raw amount into magnitude and inferred currency.
///
/// Returns `None` when the input has no leading number.
#[uniffi::export]
pub fn parse_input_amount(input: String) -> Option<FfiParsedAmount> {
    amountfmt_core::parse_input_amount(&RawAmount::Text(input)).map(Into::into)
}

/// Render an amount in `currency`, with optional precision override.
#[uniffi::export]
pub fn format_currency_amount(
    amount: f64,
    currency: String,
    options: FfiFormatOptions,
    precision_override: Option<u32>,
) -> String {
    amountfmt_core::format_currency_amount(amount, &currency, &options.into(), precision_override)
}

/// Decimal places needed to show a tiny amount with three significant digits.
#[uniffi::export]
pub fn hover_precision(amount: f64) -> u32 {
    amountfmt_core::hover_precision(amount)
}

/// Decimal places used for `amount` in `currency` when none are forced.
#[uniffi::export]
pub fn default_decimal_places(amount: f64, currency: String) -> u32 {
    amountfmt_core::default_decimal_places(amount, &currency)
}
