//! Substitution policy for unreliable data or computation.
//!
//! Two independent failure classes are handled:
//!
//! - **Data failure**: a synthetic return series stands in for a symbol the
//!   provider could not serve, so aggregation never aborts. The substitute
//!   is tagged [`SeriesSource::Synthetic`] and logged - it is a best-effort
//!   placeholder, not a prediction.
//! - **Metric failure**: a fixed, documented default stands in for a
//!   numerically undefined metric.
//!
//! The random source is seedable so the degraded path is reproducible in
//! tests.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc, Weekday};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use riskcast_core::{
    ReturnPoint, ReturnSeries, RiskEstimate, RiskError, RiskResult, SeriesSource,
};

/// Default VaR when the metric is undefined, percent.
pub const DEFAULT_VAR: f64 = 2.5;
/// Default beta when the metric is undefined or history is short.
pub const DEFAULT_BETA: f64 = 1.0;
/// Default Sharpe ratio when the metric is undefined or history is short.
pub const DEFAULT_SHARPE: f64 = 0.5;
/// Default max drawdown when the metric is undefined, percent.
pub const DEFAULT_MAX_DRAWDOWN: f64 = 15.0;
/// Default annualized volatility when the metric is undefined, percent.
pub const DEFAULT_VOLATILITY: f64 = 20.0;

/// Parameters of the synthetic substitute series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SyntheticConfig {
    /// Mean of the sampled daily return.
    pub mean: f64,
    /// Standard deviation of the sampled daily return.
    pub std_dev: f64,
    /// Number of observations to generate.
    pub length: usize,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            mean: 0.001,
            std_dev: 0.02,
            length: 252,
        }
    }
}

/// The enumerated fallback policy.
pub struct FallbackPolicy {
    synthetic: SyntheticConfig,
    rng: Mutex<StdRng>,
}

impl FallbackPolicy {
    /// Creates a policy with an entropy-seeded random source.
    #[must_use]
    pub fn new(synthetic: SyntheticConfig) -> Self {
        Self {
            synthetic,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Creates a policy with a fixed seed, for reproducible degraded paths.
    #[must_use]
    pub fn with_seed(synthetic: SyntheticConfig, seed: u64) -> Self {
        Self {
            synthetic,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Generates a synthetic return series for a symbol whose data failed.
    ///
    /// Samples Normal(mean, std) daily returns on the trailing weekdays
    /// ending at `as_of`, tagged [`SeriesSource::Synthetic`].
    pub fn synthetic_series(&self, symbol: &str, as_of: NaiveDate) -> ReturnSeries {
        warn!(symbol, "substituting synthetic return series after data failure");

        let normal = Normal::new(self.synthetic.mean, self.synthetic.std_dev)
            .unwrap_or_else(|_| Normal::new(0.0, 1.0).expect("unit normal is valid"));

        let dates = trailing_weekdays(as_of, self.synthetic.length);
        let mut rng = self.rng.lock();
        let points = dates
            .into_iter()
            .map(|date| ReturnPoint {
                date,
                value: normal.sample(&mut *rng),
            })
            .collect();

        ReturnSeries::new(symbol, points, SeriesSource::Synthetic)
    }

    /// Resolves a metric result, substituting the metric's default on error.
    ///
    /// Insufficient history is an expected condition and logs at debug;
    /// computation failures log at warn. Either way the caller receives a
    /// well-formed value.
    pub fn metric_or_default(&self, metric: &str, result: RiskResult<f64>, default: f64) -> f64 {
        match result {
            Ok(value) => value,
            Err(err) if err.is_insufficient_history() => {
                debug!(metric, %err, default, "using default for short history");
                default
            }
            Err(err) => {
                warn!(metric, %err, default, "metric computation failed, using default");
                default
            }
        }
    }

    /// The whole-portfolio default estimate for catastrophic failure.
    #[must_use]
    pub fn default_estimate(&self, computed_at: DateTime<Utc>) -> RiskEstimate {
        RiskEstimate {
            var: DEFAULT_VAR,
            beta: DEFAULT_BETA,
            sharpe_ratio: DEFAULT_SHARPE,
            max_drawdown: DEFAULT_MAX_DRAWDOWN,
            volatility: DEFAULT_VOLATILITY,
            computed_at,
        }
    }

    /// Resolves a series retrieval result, substituting a synthetic series
    /// on data failure. Non-data errors propagate.
    pub fn series_or_synthetic(
        &self,
        symbol: &str,
        as_of: NaiveDate,
        result: RiskResult<ReturnSeries>,
    ) -> RiskResult<ReturnSeries> {
        match result {
            Ok(series) => Ok(series),
            Err(RiskError::DataUnavailable { symbol: s, reason }) => {
                tracing::error!(symbol = %s, reason = %reason, "data unavailable");
                Ok(self.synthetic_series(symbol, as_of))
            }
            Err(other) => Err(other),
        }
    }
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self::new(SyntheticConfig::default())
    }
}

/// The `count` weekdays ending at `as_of` (inclusive if a weekday), ascending.
fn trailing_weekdays(as_of: NaiveDate, count: usize) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(count);
    let mut cursor = as_of;
    while dates.len() < count {
        if !matches!(cursor.weekday(), Weekday::Sat | Weekday::Sun) {
            dates.push(cursor);
        }
        match cursor.checked_sub_days(Days::new(1)) {
            Some(prev) => cursor = prev,
            None => break,
        }
    }
    dates.reverse();
    dates
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn as_of() -> NaiveDate {
        // A Friday.
        NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()
    }

    #[test]
    fn test_synthetic_series_shape() {
        let policy = FallbackPolicy::with_seed(SyntheticConfig::default(), 42);
        let series = policy.synthetic_series("GHOST", as_of());

        assert_eq!(series.len(), 252);
        assert_eq!(series.source, SeriesSource::Synthetic);
        // Strictly increasing weekday dates.
        for w in series.points.windows(2) {
            assert!(w[0].date < w[1].date);
        }
        for p in &series.points {
            assert!(!matches!(p.date.weekday(), Weekday::Sat | Weekday::Sun));
        }
    }

    #[test]
    fn test_synthetic_series_is_seed_deterministic() {
        let config = SyntheticConfig::default();
        let a = FallbackPolicy::with_seed(config, 7).synthetic_series("X", as_of());
        let b = FallbackPolicy::with_seed(config, 7).synthetic_series("X", as_of());
        assert_eq!(a.points, b.points);

        let c = FallbackPolicy::with_seed(config, 8).synthetic_series("X", as_of());
        assert_ne!(a.points, c.points);
    }

    #[test]
    fn test_synthetic_distribution_roughly_matches_config() {
        let policy = FallbackPolicy::with_seed(SyntheticConfig::default(), 42);
        let series = policy.synthetic_series("GHOST", as_of());
        let values = series.values();
        let mean = values.iter().sum::<f64>() / values.len() as f64;

        // 252 samples of Normal(0.001, 0.02): mean within ~4 standard errors.
        assert!((mean - 0.001).abs() < 0.005, "sample mean {mean}");
    }

    #[test]
    fn test_metric_or_default_substitutes() {
        let policy = FallbackPolicy::default();

        let ok = policy.metric_or_default("var", Ok(3.1), DEFAULT_VAR);
        assert_relative_eq!(ok, 3.1);

        let short = policy.metric_or_default(
            "beta",
            Err(RiskError::insufficient_history(30, 10)),
            DEFAULT_BETA,
        );
        assert_relative_eq!(short, DEFAULT_BETA);

        let degenerate = policy.metric_or_default(
            "sharpe",
            Err(RiskError::computation("zero volatility")),
            DEFAULT_SHARPE,
        );
        assert_relative_eq!(degenerate, DEFAULT_SHARPE);
    }

    #[test]
    fn test_default_estimate_is_fully_populated() {
        let now = Utc::now();
        let estimate = FallbackPolicy::default().default_estimate(now);

        assert_relative_eq!(estimate.var, 2.5);
        assert_relative_eq!(estimate.beta, 1.0);
        assert_relative_eq!(estimate.sharpe_ratio, 0.5);
        assert_relative_eq!(estimate.max_drawdown, 15.0);
        assert_relative_eq!(estimate.volatility, 20.0);
        assert_eq!(estimate.computed_at, now);
    }

    #[test]
    fn test_series_or_synthetic() {
        let policy = FallbackPolicy::with_seed(SyntheticConfig::default(), 1);

        let genuine = ReturnSeries::new("AAPL", Vec::new(), SeriesSource::Market);
        let kept = policy
            .series_or_synthetic("AAPL", as_of(), Ok(genuine.clone()))
            .unwrap();
        assert_eq!(kept, genuine);

        let substituted = policy
            .series_or_synthetic(
                "GHOST",
                as_of(),
                Err(RiskError::data_unavailable("GHOST", "no data")),
            )
            .unwrap();
        assert_eq!(substituted.source, SeriesSource::Synthetic);

        let propagated = policy.series_or_synthetic(
            "X",
            as_of(),
            Err(RiskError::computation("unrelated")),
        );
        assert!(propagated.is_err());
    }
}
