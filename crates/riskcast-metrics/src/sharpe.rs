//! Annualized Sharpe ratio.

use crate::stats::{mean, sample_std_dev};
use riskcast_core::{RiskError, RiskResult, MIN_OBSERVATIONS, TRADING_DAYS_PER_YEAR};

/// Calculates the annualized Sharpe ratio from daily returns.
///
/// ## Formula
///
/// ```text
/// annual_return = mean(returns) × 252
/// annual_vol    = std(returns) × √252
/// sharpe        = (annual_return - risk_free_rate) / annual_vol
/// ```
///
/// `risk_free_rate` is the annual rate (e.g., 0.02 for 2%).
///
/// # Errors
///
/// - [`RiskError::InsufficientHistory`] for fewer than 30 observations
///   (the caller substitutes the default of 0.5).
/// - [`RiskError::Computation`] for constant returns (zero volatility).
pub fn sharpe_ratio(returns: &[f64], risk_free_rate: f64) -> RiskResult<f64> {
    if returns.len() < MIN_OBSERVATIONS {
        return Err(RiskError::insufficient_history(
            MIN_OBSERVATIONS,
            returns.len(),
        ));
    }

    let annual_return = mean(returns)? * TRADING_DAYS_PER_YEAR;
    let annual_vol = sample_std_dev(returns)? * TRADING_DAYS_PER_YEAR.sqrt();

    if annual_vol == 0.0 {
        return Err(RiskError::computation(
            "zero volatility: Sharpe ratio undefined",
        ));
    }

    let sharpe = (annual_return - risk_free_rate) / annual_vol;
    if !sharpe.is_finite() {
        return Err(RiskError::computation("non-finite Sharpe ratio result"));
    }
    Ok(sharpe)
}
