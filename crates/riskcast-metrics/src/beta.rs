//! Portfolio beta relative to a market benchmark.

use crate::stats::{covariance, sample_variance};
use riskcast_core::{ReturnSeries, RiskError, RiskResult, MIN_OBSERVATIONS};

/// Calculates beta of a portfolio against market returns.
///
/// The two series are aligned by inner join on date before the
/// computation, so only dates present in both contribute.
///
/// ## Formula
///
/// ```text
/// beta = cov(portfolio, market) / var(market)
/// ```
///
/// # Errors
///
/// - [`RiskError::InsufficientHistory`] when fewer than 30 aligned
///   observations remain (the caller substitutes the default beta of 1.0).
/// - [`RiskError::Computation`] when market variance is zero.
pub fn beta(portfolio: &ReturnSeries, market: &ReturnSeries) -> RiskResult<f64> {
    let (portfolio_aligned, market_aligned) = align(portfolio, market);

    if portfolio_aligned.len() < MIN_OBSERVATIONS {
        return Err(RiskError::insufficient_history(
            MIN_OBSERVATIONS,
            portfolio_aligned.len(),
        ));
    }

    let cov = covariance(&portfolio_aligned, &market_aligned)?;
    let market_var = sample_variance(&market_aligned)?;

    if market_var == 0.0 {
        return Err(RiskError::computation(
            "zero market variance: beta undefined",
        ));
    }

    let beta = cov / market_var;
    if !beta.is_finite() {
        return Err(RiskError::computation("non-finite beta result"));
    }
    Ok(beta)
}

/// Inner-joins two series on date, returning paired value vectors.
fn align(a: &ReturnSeries, b: &ReturnSeries) -> (Vec<f64>, Vec<f64>) {
    let mut xs = Vec::with_capacity(a.len().min(b.len()));
    let mut ys = Vec::with_capacity(a.len().min(b.len()));

    // Both series hold strictly increasing dates, so a merge walk suffices.
    let mut i = 0;
    let mut j = 0;
    while i < a.points.len() && j < b.points.len() {
        let (pa, pb) = (&a.points[i], &b.points[j]);
        match pa.date.cmp(&pb.date) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                xs.push(pa.value);
                ys.push(pb.value);
                i += 1;
                j += 1;
            }
        }
    }
    (xs, ys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use riskcast_core::{ReturnPoint, SeriesSource};

    fn series(symbol: &str, values: &[f64]) -> ReturnSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let points = values
            .iter()
            .enumerate()
            .map(|(i, &value)| ReturnPoint {
                date: start + chrono::Days::new(i as u64),
                value,
            })
            .collect();
        ReturnSeries::new(symbol, points, SeriesSource::Market)
    }

    #[test]
    fn test_beta_identity() {
        // Alternating market; a single position at weight 100 tracks it
        // exactly, so covariance equals variance and beta is exactly 1.
        let values: Vec<f64> = (0..40)
            .map(|i| if i % 2 == 0 { 0.02 } else { -0.02 })
            .collect();
        let market = series("^GSPC", &values);
        let portfolio = series("PORT", &values);

        assert_relative_eq!(beta(&portfolio, &market).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_beta_leveraged() {
        let market_values: Vec<f64> = (0..60).map(|i| ((i % 7) as f64 - 3.0) * 0.01).collect();
        let portfolio_values: Vec<f64> = market_values.iter().map(|v| v * 2.0).collect();

        let market = series("^GSPC", &market_values);
        let portfolio = series("PORT", &portfolio_values);

        assert_relative_eq!(beta(&portfolio, &market).unwrap(), 2.0, epsilon = 1e-10);
    }

    #[test]
    fn test_beta_insufficient_history() {
        let values: Vec<f64> = (0..10).map(|i| i as f64 * 0.001).collect();
        let market = series("^GSPC", &values);
        let portfolio = series("PORT", &values);

        let err = beta(&portfolio, &market).unwrap_err();
        assert!(err.is_insufficient_history());
    }

    #[test]
    fn test_beta_alignment_drops_missing_dates() {
        // Portfolio misses every third market date; only shared dates count.
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let market_points: Vec<ReturnPoint> = (0..60)
            .map(|i| ReturnPoint {
                date: start + chrono::Days::new(i),
                value: ((i % 5) as f64 - 2.0) * 0.01,
            })
            .collect();
        let portfolio_points: Vec<ReturnPoint> = market_points
            .iter()
            .enumerate()
            .filter(|(i, _)| i % 3 != 0)
            .map(|(_, p)| *p)
            .collect();

        let market = ReturnSeries::new("^GSPC", market_points, SeriesSource::Market);
        let portfolio = ReturnSeries::new("PORT", portfolio_points, SeriesSource::Market);

        // Shared dates mirror the market exactly.
        assert_relative_eq!(beta(&portfolio, &market).unwrap(), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_beta_zero_market_variance() {
        let portfolio_values: Vec<f64> = (0..40).map(|i| (i % 3) as f64 * 0.01).collect();
        let market = series("^GSPC", &[0.01; 40]);
        let portfolio = series("PORT", &portfolio_values);

        let err = beta(&portfolio, &market).unwrap_err();
        assert!(matches!(err, RiskError::Computation { .. }));
    }
}
