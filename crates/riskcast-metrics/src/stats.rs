//! Descriptive statistics over return sequences.
//!
//! Sample (n-1) estimators throughout, matching standard financial
//! convention for historical return series.

use riskcast_core::{RiskError, RiskResult};

/// Arithmetic mean.
///
/// # Errors
///
/// Returns a computation error for an empty input.
pub fn mean(values: &[f64]) -> RiskResult<f64> {
    if values.is_empty() {
        return Err(RiskError::computation("mean of empty series"));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance (n-1 denominator).
///
/// # Errors
///
/// Returns a computation error for fewer than two observations.
pub fn sample_variance(values: &[f64]) -> RiskResult<f64> {
    if values.len() < 2 {
        return Err(RiskError::computation(format!(
            "variance requires at least 2 observations, got {}",
            values.len()
        )));
    }
    let m = mean(values)?;
    let sum_sq = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>();
    Ok(sum_sq / (values.len() - 1) as f64)
}

/// Sample standard deviation.
///
/// # Errors
///
/// Returns a computation error for fewer than two observations.
pub fn sample_std_dev(values: &[f64]) -> RiskResult<f64> {
    sample_variance(values).map(f64::sqrt)
}

/// Sample covariance between two equal-length sequences (n-1 denominator).
///
/// # Errors
///
/// Returns a computation error on length mismatch or fewer than two pairs.
pub fn covariance(xs: &[f64], ys: &[f64]) -> RiskResult<f64> {
    if xs.len() != ys.len() {
        return Err(RiskError::computation(format!(
            "covariance length mismatch: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    if xs.len() < 2 {
        return Err(RiskError::computation(format!(
            "covariance requires at least 2 observations, got {}",
            xs.len()
        )));
    }
    let mx = mean(xs)?;
    let my = mean(ys)?;
    let sum = xs
        .iter()
        .zip(ys.iter())
        .map(|(x, y)| (x - mx) * (y - my))
        .sum::<f64>();
    Ok(sum / (xs.len() - 1) as f64)
}
