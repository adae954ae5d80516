//! Annualized volatility.

use crate::stats::sample_std_dev;
use riskcast_core::{RiskError, RiskResult, TRADING_DAYS_PER_YEAR};

/// Calculates annualized volatility from daily returns, as a percentage.
///
/// ## Formula
///
/// ```text
/// volatility = std(returns) × √252 × 100
/// ```
///
/// # Errors
///
/// Returns a computation error for fewer than two observations or a
/// non-finite result.
pub fn annualized_volatility(returns: &[f64]) -> RiskResult<f64> {
    let vol = sample_std_dev(returns)? * TRADING_DAYS_PER_YEAR.sqrt() * 100.0;
    if !vol.is_finite() {
        return Err(RiskError::computation("non-finite volatility result"));
    }
    Ok(vol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_volatility_known_value() {
        let returns: Vec<f64> = (0..100)
            .map(|i| if i % 2 == 0 { 0.01 } else { -0.01 })
            .collect();
        let expected = sample_std_dev(&returns).unwrap() * 252.0_f64.sqrt() * 100.0;
        assert_relative_eq!(annualized_volatility(&returns).unwrap(), expected);
    }

    #[test]
    fn test_volatility_constant_series_is_zero() {
        let returns = [0.005; 50];
        assert_relative_eq!(annualized_volatility(&returns).unwrap(), 0.0);
    }

    #[test]
    fn test_volatility_empty_is_error() {
        assert!(annualized_volatility(&[]).is_err());
    }

    #[test]
    fn test_volatility_non_negative() {
        let returns = [-0.03, 0.02, -0.01, 0.04, -0.02];
        assert!(annualized_volatility(&returns).unwrap() >= 0.0);
    }
}
