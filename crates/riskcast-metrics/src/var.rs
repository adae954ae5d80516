//! Parametric (Gaussian) Value at Risk.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::stats::{mean, sample_std_dev};
use riskcast_core::{RiskError, RiskResult};

/// Calculates parametric one-day VaR from a series of returns.
///
/// Assumes returns are drawn from a normal distribution - an
/// approximation, not historical simulation.
///
/// ## Formula
///
/// ```text
/// z   = Φ⁻¹(1 - confidence)        (negative for confidence > 0.5)
/// VaR = |mean - z × std| × 100     (reported as a percentage)
/// ```
///
/// # Errors
///
/// Returns a computation error when the input is too short, the returns
/// are constant (zero standard deviation), the confidence level is outside
/// (0, 1), or the result is not finite.
pub fn parametric_var(returns: &[f64], confidence: f64) -> RiskResult<f64> {
    if !(0.0..1.0).contains(&confidence) || confidence == 0.0 {
        return Err(RiskError::computation(format!(
            "confidence level must be in (0, 1), got {confidence}"
        )));
    }

    let mean_return = mean(returns)?;
    let std_return = sample_std_dev(returns)?;

    if std_return == 0.0 {
        return Err(RiskError::computation(
            "zero standard deviation: constant return series",
        ));
    }

    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| RiskError::computation(format!("standard normal: {e}")))?;
    let z = normal.inverse_cdf(1.0 - confidence);

    let var = (mean_return - z * std_return).abs() * 100.0;
    if !var.is_finite() {
        return Err(RiskError::computation("non-finite VaR result"));
    }
    Ok(var)
}

/// Scales a one-day VaR to a multi-day horizon.
///
/// Square-root-of-time scaling, which assumes i.i.d. returns.
#[must_use]
pub fn scale_var(var_1d: f64, horizon_days: u32) -> f64 {
    var_1d * f64::from(horizon_days).sqrt()
}
