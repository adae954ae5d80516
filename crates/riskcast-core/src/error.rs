//! Error types for the Riskcast engine.
//!
//! All four kinds are contained within the engine: the public estimation
//! operations always return a well-formed result, substituting defaults per
//! the fallback policy. The taxonomy exists so failures can be logged and
//! recovered with the right severity.

use thiserror::Error;

/// A specialized Result type for Riskcast operations.
pub type RiskResult<T> = Result<T, RiskError>;

/// The error taxonomy for risk estimation.
#[derive(Error, Debug, Clone)]
pub enum RiskError {
    /// The market data provider returned no data, erred, or timed out.
    #[error("Data unavailable for {symbol}: {reason}")]
    DataUnavailable {
        /// Symbol the data was requested for.
        symbol: String,
        /// Description of the failure.
        reason: String,
    },

    /// Aligned sample size below the observation floor for a metric.
    ///
    /// An expected, low-severity condition - recovered by a fixed
    /// per-metric default, not logged as an error.
    #[error("Insufficient history: need at least {required} observations, got {actual}")]
    InsufficientHistory {
        /// Minimum required observations.
        required: usize,
        /// Actual number of observations.
        actual: usize,
    },

    /// A metric formula encountered a degenerate input.
    #[error("Computation error: {reason}")]
    Computation {
        /// Description of the degenerate input.
        reason: String,
    },

    /// Anything unanticipated in the full estimation pipeline.
    #[error("Catastrophic failure: {reason}")]
    Catastrophic {
        /// Description of the failure.
        reason: String,
    },
}

impl RiskError {
    /// Creates a data unavailable error.
    #[must_use]
    pub fn data_unavailable(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DataUnavailable {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }

    /// Creates an insufficient history error.
    #[must_use]
    pub fn insufficient_history(required: usize, actual: usize) -> Self {
        Self::InsufficientHistory { required, actual }
    }

    /// Creates a computation error.
    #[must_use]
    pub fn computation(reason: impl Into<String>) -> Self {
        Self::Computation {
            reason: reason.into(),
        }
    }

    /// Creates a catastrophic failure error.
    #[must_use]
    pub fn catastrophic(reason: impl Into<String>) -> Self {
        Self::Catastrophic {
            reason: reason.into(),
        }
    }

    /// Returns true for the expected low-severity insufficient-history case.
    #[must_use]
    pub fn is_insufficient_history(&self) -> bool {
        matches!(self, Self::InsufficientHistory { .. })
    }
}
