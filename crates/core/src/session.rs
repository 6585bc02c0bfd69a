//! Scoped converter lifecycle.
//!
//! A [`ConverterSession`] initializes a collaborator on open and disposes it
//! when dropped, on every exit path, including a failed initialization.

use std::ops::Deref;

use crate::converter::CurrencyConverter;
use crate::error::{Error, Result};
use crate::normalize::normalize_display_amount;
use crate::types::{DisplayAmount, FormatOptions, RawAmount};

/// An initialized collaborator, disposed on drop.
///
/// # Examples
///
/// ```
/// use amountfmt_core::{ConverterSession, FormatOptions, RateTable, TableConverter};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let rates = RateTable::new("USD").with_rate("BSV", 0.02);
/// let session = ConverterSession::open(TableConverter::new(rates, "USD"))
///     .await
///     .unwrap();
///
/// let shown = session.format(&"1".into(), &FormatOptions::default()).await.unwrap();
/// assert_eq!(shown.formatted_amount, "$0");
/// assert_eq!(shown.hover_text.as_deref(), Some("$0.000000500"));
/// # });
/// ```
#[derive(Debug)]
pub struct ConverterSession<C: CurrencyConverter> {
    converter: C,
}

/// Primary display text plus the error that prevented it, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrencyDisplay {
    pub display_amount: String,
    pub error: Option<Error>,
}

impl<C: CurrencyConverter> ConverterSession<C> {
    /// Initialize `converter` and wrap it. The converter is disposed before
    /// returning if initialization fails.
    pub async fn open(converter: C) -> Result<Self> {
        // Constructed first so Drop disposes on the error path too
        let session = Self { converter };
        session.converter.initialize().await?;
        Ok(session)
    }

    /// Format a raw amount for display in the preferred currency.
    pub async fn format(
        &self,
        amount: &RawAmount,
        options: &FormatOptions,
    ) -> Result<DisplayAmount> {
        normalize_display_amount(&self.converter, amount, options).await
    }

    /// Like [`format`](Self::format), but logs failures and yields an empty
    /// display instead.
    pub async fn display(&self, amount: &RawAmount, options: &FormatOptions) -> DisplayAmount {
        match self.format(amount, options).await {
            Ok(display) => display,
            Err(e) => {
                tracing::error!("Failed to convert amount: {}", e);
                DisplayAmount::default()
            }
        }
    }

    /// Primary text only, with any failure captured alongside.
    pub async fn display_text(
        &self,
        amount: &RawAmount,
        options: &FormatOptions,
    ) -> CurrencyDisplay {
        match self.format(amount, options).await {
            Ok(display) => CurrencyDisplay {
                display_amount: display.formatted_amount,
                error: None,
            },
            Err(e) => CurrencyDisplay {
                display_amount: String::new(),
                error: Some(e),
            },
        }
    }
}

impl<C: CurrencyConverter> Deref for ConverterSession<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.converter
    }
}

impl<C: CurrencyConverter> Drop for ConverterSession<C> {
    fn drop(&mut self) {
        self.converter.dispose();
    }
}
