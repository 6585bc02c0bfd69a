//! Error type for collaborator lifecycle and conversion failures.
//!
//! Parse and local conversion failures are not errors: the orchestrator
//! falls back to the collaborator's baseline instead.

/// Errors surfaced by a [`CurrencyConverter`](crate::CurrencyConverter).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A conversion was requested before `initialize` completed.
    #[error("currency converter is not initialized")]
    NotInitialized,

    /// A conversion was requested after `dispose`.
    #[error("currency converter has been disposed")]
    Disposed,

    /// A rate table entry is zero, negative or not finite.
    #[error("invalid exchange rate for {code}: {rate}")]
    InvalidRate { code: String, rate: f64 },

    /// The preferred currency has no rate.
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),

    /// Failure reported by an external collaborator implementation.
    #[error("currency converter failed: {0}")]
    Collaborator(String),
}

pub type Result<T> = std::result::Result<T, Error>;
