//! FFI-safe types for UniFFI export.
//!
//! These mirror the core types as plain records. The untagged `RawAmount`
//! enum is not exposed; foreign callers pass text.

use amountfmt_core::{FormatOptions, ParsedAmount};

#[derive(uniffi::Record, Debug, Clone, PartialEq)]
pub struct FfiParsedAmount {
    pub magnitude: f64,
    pub currency: String,
}

impl From<ParsedAmount> for FfiParsedAmount {
    fn from(p: ParsedAmount) -> Self {
        Self {
            magnitude: p.magnitude,
            currency: p.currency,
        }
    }
}

/// Display options; `None` fields take the formatter defaults.
#[derive(uniffi::Record, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FfiFormatOptions {
    pub decimal_places: Option<u32>,
    pub use_commas: Option<bool>,
    pub use_underscores: Option<bool>,
}

impl From<FfiFormatOptions> for FormatOptions {
    fn from(o: FfiFormatOptions) -> Self {
        FormatOptions {
            decimal_places: o.decimal_places,
            use_commas: o.use_commas,
            use_underscores: o.use_underscores,
        }
    }
}
