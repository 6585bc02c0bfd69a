//! Exchange rate table.
//!
//! Rates are expressed relative to a single base currency: `rates["EUR"] =
//! 0.92` with base `USD` means 1 USD = 0.92 EUR. Derived units (like `SATS`)
//! are defined as a fixed fraction of another currency and are chained
//! through it, so every known code converts to every other.
//!
//! The table is plain data. Fetching and refreshing rates is the job of
//! whoever builds it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::currency::{BSV, SATS, SATS_PER_BSV};
use crate::error::{Error, Result};

/// A unit defined as a fixed fraction of another currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedUnit {
    /// 1 unit of this currency = `factor` units of `base_currency`.
    pub factor: f64,
    /// The currency this unit is defined against (e.g., "BSV").
    pub base_currency: String,
}

fn default_units() -> HashMap<String, DerivedUnit> {
    HashMap::from([(
        SATS.to_string(),
        DerivedUnit {
            factor: 1.0 / SATS_PER_BSV,
            base_currency: BSV.to_string(),
        },
    )])
}

/// Exchange rates relative to a base currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// Base currency code.
    pub base: String,
    /// Units of each currency per one unit of `base`.
    #[serde(default)]
    pub rates: HashMap<String, f64>,
    /// Fixed-ratio units; `SATS` is always present unless overridden.
    #[serde(default = "default_units")]
    pub units: HashMap<String, DerivedUnit>,
}

impl Default for RateTable {
    fn default() -> Self {
        Self::new("USD")
    }
}

impl RateTable {
    /// Create an empty table with the given base and the built-in units.
    #[must_use]
    pub fn new(base: &str) -> Self {
        Self {
            base: base.to_uppercase(),
            rates: HashMap::new(),
            units: default_units(),
        }
    }

    /// Add or replace a rate: 1 base = `rate` units of `code`.
    #[must_use]
    pub fn with_rate(mut self, code: &str, rate: f64) -> Self {
        self.rates.insert(code.to_uppercase(), rate);
        self
    }

    /// Add or replace a derived unit: 1 `code` = `factor` units of `base_currency`.
    #[must_use]
    pub fn with_unit(mut self, code: &str, factor: f64, base_currency: &str) -> Self {
        self.units.insert(
            code.to_uppercase(),
            DerivedUnit {
                factor,
                base_currency: base_currency.to_uppercase(),
            },
        );
        self
    }

    /// Uppercase every code so lookups match regardless of how the table
    /// was written.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            base: self.base.to_uppercase(),
            rates: self
                .rates
                .into_iter()
                .map(|(code, rate)| (code.to_uppercase(), rate))
                .collect(),
            units: self
                .units
                .into_iter()
                .map(|(code, unit)| {
                    let unit = DerivedUnit {
                        factor: unit.factor,
                        base_currency: unit.base_currency.to_uppercase(),
                    };
                    (code.to_uppercase(), unit)
                })
                .collect(),
        }
    }

    /// Reject rates and unit factors that are zero, negative or not finite.
    pub fn validate(&self) -> Result<()> {
        for (code, rate) in &self.rates {
            if !rate.is_finite() || *rate <= 0.0 {
                return Err(Error::InvalidRate {
                    code: code.clone(),
                    rate: *rate,
                });
            }
        }
        for (code, unit) in &self.units {
            if !unit.factor.is_finite() || unit.factor <= 0.0 {
                return Err(Error::InvalidRate {
                    code: code.clone(),
                    rate: unit.factor,
                });
            }
        }
        Ok(())
    }

    /// Units of `code` per one unit of base. `code` must already be uppercase.
    fn rate_of(&self, code: &str) -> Option<f64> {
        if let Some(rate) = self.rates.get(code) {
            return Some(*rate);
        }
        if code == self.base.to_uppercase() {
            return Some(1.0);
        }

        // Derived units chain one level through their base currency
        let unit = self.units.get(code)?;
        let base_upper = unit.base_currency.to_uppercase();
        let base_rate = if base_upper == self.base.to_uppercase() {
            1.0
        } else {
            *self.rates.get(&base_upper)?
        };
        Some(base_rate / unit.factor)
    }

    /// Check if a currency code is known (base, rate or derived unit).
    #[must_use]
    pub fn has_currency(&self, code: &str) -> bool {
        self.rate_of(&code.to_uppercase()).is_some()
    }

    /// Convert an amount between two currencies.
    ///
    /// Returns `None` for unknown codes or a non-finite result.
    #[must_use]
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Option<f64> {
        let from_upper = from.to_uppercase();
        let to_upper = to.to_uppercase();

        let converted = if from_upper == to_upper {
            amount
        } else {
            let from_rate = self.rate_of(&from_upper)?;
            let to_rate = self.rate_of(&to_upper)?;
            amount / from_rate * to_rate
        };

        converted.is_finite().then_some(converted)
    }
}
