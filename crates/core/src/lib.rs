//! amountfmt Core
//!
//! Turns raw wallet amounts (`100`, `"0.5"`, `"USD 5"`) into display strings
//! in the user's preferred currency, with high-precision hover text for
//! amounts that would otherwise show as zero.
//!
//! # Quick Start
//!
//! ```
//! use amountfmt_core::{format_currency_amount, parse_input_amount, FormatOptions, RawAmount};
//!
//! // Bare integers are satoshis, bare decimals are BSV
//! let parsed = parse_input_amount(&RawAmount::from("1234567.89")).unwrap();
//! assert_eq!(parsed.currency, "BSV");
//!
//! let shown = format_currency_amount(
//!     parsed.magnitude,
//!     &parsed.currency,
//!     &FormatOptions::default(),
//!     None,
//! );
//! assert_eq!(shown, "1,234,567.89 BSV");
//! ```
//!
//! # Converting for Display
//!
//! Conversion goes through a [`CurrencyConverter`], which owns exchange
//! rates and the preferred currency. [`ConverterSession`] scopes its
//! lifecycle:
//!
//! ```
//! use amountfmt_core::{ConverterSession, FormatOptions, RateTable, TableConverter};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let rates = RateTable::new("USD").with_rate("BSV", 0.02).with_rate("JPY", 150.0);
//! let session = ConverterSession::open(TableConverter::new(rates, "JPY"))
//!     .await
//!     .unwrap();
//!
//! let shown = session.format(&"0.5".into(), &FormatOptions::default()).await.unwrap();
//! assert_eq!(shown.formatted_amount, "¥3,750");
//! # });
//! ```

pub mod converter;
pub mod currency;
pub mod currency_rates;
pub mod error;
pub mod format;
pub mod normalize;
pub mod parse;
pub mod session;
pub mod types;

pub use converter::{CurrencyConverter, TableConverter};
pub use currency_rates::{DerivedUnit, RateTable};
pub use error::{Error, Result};
pub use format::{default_decimal_places, format_currency_amount, hover_precision};
pub use normalize::{normalize_display_amount, refine, Refinement};
pub use parse::parse_input_amount;
pub use session::{ConverterSession, CurrencyDisplay};
pub use types::*;
