//! # riskcast-metrics
//!
//! Pure risk metric library for the Riskcast engine.
//!
//! This crate provides the metric computations over return series:
//!
//! - **VaR**: Parametric (Gaussian) Value at Risk
//! - **Beta**: Covariance over market variance, date-aligned
//! - **Sharpe Ratio**: Annualized excess return over annualized volatility
//! - **Max Drawdown**: Largest peak-to-trough decline
//! - **Volatility**: Annualized standard deviation of returns
//!
//! ## Design Philosophy
//!
//! Pure functions only: every input is explicit, no I/O, no caching, no
//! knowledge of positions. Degenerate inputs are reported as errors, never
//! as NaN or infinity - the engine's fallback policy decides what to
//! substitute.
//!
//! ## Example
//!
//! ```
//! use riskcast_metrics::prelude::*;
//!
//! let returns = vec![0.01, -0.005, 0.02, -0.01, 0.003];
//! let var = parametric_var(&returns, 0.95).unwrap();
//! assert!(var >= 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod beta;
pub mod drawdown;
pub mod sharpe;
pub mod stats;
pub mod var;
pub mod volatility;

pub use beta::beta;
pub use drawdown::max_drawdown;
pub use sharpe::sharpe_ratio;
pub use var::{parametric_var, scale_var};
pub use volatility::annualized_volatility;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::beta::beta;
    pub use crate::drawdown::max_drawdown;
    pub use crate::sharpe::sharpe_ratio;
    pub use crate::stats::{covariance, mean, sample_std_dev, sample_variance};
    pub use crate::var::{parametric_var, scale_var};
    pub use crate::volatility::annualized_volatility;
    pub use riskcast_core::{RiskError, RiskResult};
}
