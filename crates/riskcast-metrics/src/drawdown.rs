//! Maximum drawdown over a return window.

use riskcast_core::{RiskError, RiskResult};

/// Calculates the maximum drawdown from a series of returns.
///
/// ## Formula
///
/// ```text
/// C_t = Π_{s<=t} (1 + r_s)        cumulative growth
/// M_t = max(C_0 .. C_t)           running peak
/// D_t = (C_t - M_t) / M_t         drawdown (<= 0)
/// result = |min(D_t)| × 100       percentage in [0, 100]
/// ```
///
/// The result is clamped to 100: a single return below -100% would push
/// cumulative growth negative and the raw ratio past the bound.
///
/// # Errors
///
/// Returns a computation error for an empty series or non-finite input.
pub fn max_drawdown(returns: &[f64]) -> RiskResult<f64> {
    if returns.is_empty() {
        return Err(RiskError::computation("max drawdown of empty series"));
    }

    let mut cumulative = 1.0_f64;
    let mut peak = 1.0_f64;
    let mut worst = 0.0_f64;

    for r in returns {
        cumulative *= 1.0 + r;
        if cumulative > peak {
            peak = cumulative;
        }
        let drawdown = (cumulative - peak) / peak;
        if drawdown < worst {
            worst = drawdown;
        }
    }

    if !worst.is_finite() {
        return Err(RiskError::computation("non-finite drawdown result"));
    }
    Ok((worst.abs() * 100.0).min(100.0))
}
