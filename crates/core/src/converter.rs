//! Currency conversion collaborator.
//!
//! The orchestrator never fetches rates itself. It talks to a
//! [`CurrencyConverter`], which owns rate acquisition and the user's preferred
//! display currency, and asks it for a converted baseline.
//!
//! [`TableConverter`] is an implementation backed by a static [`RateTable`].

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::currency_rates::RateTable;
use crate::error::{Error, Result};
use crate::format::format_currency_amount;
use crate::parse::parse_input_amount;
use crate::types::{DisplayAmount, FormatOptions, RawAmount};

/// Conversion capability the orchestrator depends on.
///
/// `initialize` and `convert_amount` may suspend (loading rates, talking to a
/// service). `convert_currency` and `preferred_currency` must answer from
/// already-loaded state.
#[async_trait]
pub trait CurrencyConverter: Send + Sync {
    /// Prepare the converter (load rates, settings). May fail.
    async fn initialize(&self) -> Result<()>;

    /// Release resources. Must be idempotent.
    fn dispose(&self);

    /// Convert and format a raw amount in the preferred currency.
    ///
    /// The result is the baseline the orchestrator refines.
    async fn convert_amount(
        &self,
        amount: &RawAmount,
        options: &FormatOptions,
    ) -> Result<DisplayAmount>;

    /// Convert a number between currencies, `None` when there is no rate.
    fn convert_currency(&self, amount: f64, from: &str, to: &str) -> Option<f64>;

    /// The currency the user wants amounts displayed in.
    fn preferred_currency(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Uninitialized,
    Ready,
    Disposed,
}

/// A [`CurrencyConverter`] over a fixed rate table.
#[derive(Debug)]
pub struct TableConverter {
    rates: RateTable,
    preferred_currency: String,
    state: Mutex<Lifecycle>,
}

impl TableConverter {
    /// Create a converter displaying amounts in `preferred_currency`.
    #[must_use]
    pub fn new(rates: RateTable, preferred_currency: &str) -> Self {
        Self {
            rates: rates.normalized(),
            preferred_currency: preferred_currency.to_uppercase(),
            state: Mutex::new(Lifecycle::Uninitialized),
        }
    }

    /// The rate table backing this converter.
    #[must_use]
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    fn lifecycle(&self) -> Lifecycle {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_lifecycle(&self, next: Lifecycle) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }

    fn ensure_ready(&self) -> Result<()> {
        match self.lifecycle() {
            Lifecycle::Ready => Ok(()),
            Lifecycle::Uninitialized => Err(Error::NotInitialized),
            Lifecycle::Disposed => Err(Error::Disposed),
        }
    }
}

#[async_trait]
impl CurrencyConverter for TableConverter {
    async fn initialize(&self) -> Result<()> {
        if self.lifecycle() == Lifecycle::Disposed {
            return Err(Error::Disposed);
        }

        self.rates.validate()?;
        if !self.rates.has_currency(&self.preferred_currency) {
            return Err(Error::UnknownCurrency(self.preferred_currency.clone()));
        }

        tracing::debug!(
            base = %self.rates.base,
            rates = self.rates.rates.len(),
            preferred = %self.preferred_currency,
            "rate table ready"
        );
        self.set_lifecycle(Lifecycle::Ready);
        Ok(())
    }

    fn dispose(&self) {
        if self.lifecycle() != Lifecycle::Disposed {
            tracing::trace!("disposing table converter");
            self.set_lifecycle(Lifecycle::Disposed);
        }
    }

    async fn convert_amount(
        &self,
        amount: &RawAmount,
        options: &FormatOptions,
    ) -> Result<DisplayAmount> {
        self.ensure_ready()?;

        let echo = || DisplayAmount::new(amount.to_string().trim());

        let Some(parsed) = parse_input_amount(amount) else {
            tracing::debug!(input = %amount, "unparseable amount, echoing input");
            return Ok(echo());
        };

        let Some(converted) =
            self.rates
                .convert(parsed.magnitude, &parsed.currency, &self.preferred_currency)
        else {
            tracing::debug!(
                from = %parsed.currency,
                to = %self.preferred_currency,
                "no rate, echoing input"
            );
            return Ok(echo());
        };

        Ok(DisplayAmount::new(format_currency_amount(
            converted,
            &self.preferred_currency,
            options,
            None,
        )))
    }

    fn convert_currency(&self, amount: f64, from: &str, to: &str) -> Option<f64> {
        if self.lifecycle() != Lifecycle::Ready {
            return None;
        }
        self.rates.convert(amount, from, to)
    }

    fn preferred_currency(&self) -> String {
        self.preferred_currency.clone()
    }
}
