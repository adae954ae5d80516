//! # riskcast-core
//!
//! Core types and the error taxonomy shared across the Riskcast workspace.
//!
//! This crate defines:
//!
//! - **Positions**: weighted portfolio entries
//! - **Return series**: dated percentage-return sequences with provenance
//! - **Estimates**: the always-complete `RiskEstimate` and `SymbolRisk` results
//! - **Errors**: the `RiskError` taxonomy the engine contains internally
//!
//! ## Design Philosophy
//!
//! - **No I/O**: pure data types, no runtime dependencies
//! - **Always-complete results**: estimate types have no optional fields
//! - **Provenance tracking**: series carry their source for diagnostics

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

pub use error::{RiskError, RiskResult};
pub use types::{
    Position, PricePoint, ReturnPoint, ReturnSeries, RiskEstimate, SeriesSource, SymbolRisk,
};

/// Number of trading days in a year, used for annualization.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Default lookback window in trading days (one trading year).
pub const DEFAULT_LOOKBACK_DAYS: u32 = 252;

/// Minimum observations required for beta and Sharpe ratio.
pub const MIN_OBSERVATIONS: usize = 30;

/// Default VaR confidence level.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Default annual risk-free rate.
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.02;
