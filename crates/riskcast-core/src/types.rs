//! Core data types for portfolio risk estimation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// POSITIONS
// =============================================================================

/// A weighted portfolio position.
///
/// Weight is a percentage in `[0, 100]`. The caller is responsible for
/// weights summing to ~100; the engine tolerates unnormalized sums and
/// never divides by the weight total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Instrument symbol (e.g., "AAPL").
    pub symbol: String,
    /// Weight percentage in `[0, 100]`.
    pub weight: f64,
}

impl Position {
    /// Creates a new position.
    pub fn new(symbol: impl Into<String>, weight: f64) -> Self {
        Self {
            symbol: symbol.into(),
            weight,
        }
    }

    /// Weight as a fraction of the portfolio (weight / 100).
    #[must_use]
    pub fn weight_fraction(&self) -> f64 {
        self.weight / 100.0
    }
}

// =============================================================================
// PRICE AND RETURN SERIES
// =============================================================================

/// A single closing price observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Observation date.
    pub date: NaiveDate,
    /// Closing price.
    pub close: f64,
}

impl PricePoint {
    /// Creates a new price point.
    #[must_use]
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// A single daily return observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReturnPoint {
    /// Observation date.
    pub date: NaiveDate,
    /// Simple period-over-period return as a decimal (e.g., -0.01 for -1%).
    pub value: f64,
}

/// Provenance of a return series, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesSource {
    /// Derived from freshly fetched market prices.
    Market,
    /// Retrieved unmodified from the cache store.
    Cache,
    /// Synthetic placeholder substituted after a data failure.
    Synthetic,
}

/// An ordered sequence of dated returns for one symbol.
///
/// Invariant: dates are strictly increasing with no duplicates. The
/// invariant holds by construction from an ordered price history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    /// Symbol the returns belong to.
    pub symbol: String,
    /// Ordered return observations.
    pub points: Vec<ReturnPoint>,
    /// Where this series came from.
    pub source: SeriesSource,
}

impl ReturnSeries {
    /// Creates a series from ordered points.
    #[must_use]
    pub fn new(symbol: impl Into<String>, points: Vec<ReturnPoint>, source: SeriesSource) -> Self {
        Self {
            symbol: symbol.into(),
            points,
            source,
        }
    }

    /// Derives a return series from an ordered price history.
    ///
    /// Computes `r_t = (p_t - p_{t-1}) / p_{t-1}` for each consecutive
    /// pair, discarding the leading undefined point: the result has exactly
    /// one fewer point than the price history. Zero or non-finite previous
    /// prices are skipped, they cannot produce a defined return.
    #[must_use]
    pub fn from_prices(symbol: impl Into<String>, prices: &[PricePoint]) -> Self {
        let points = prices
            .windows(2)
            .filter_map(|w| {
                let (prev, curr) = (w[0], w[1]);
                if prev.close != 0.0 && prev.close.is_finite() && curr.close.is_finite() {
                    Some(ReturnPoint {
                        date: curr.date,
                        value: (curr.close - prev.close) / prev.close,
                    })
                } else {
                    None
                }
            })
            .collect();

        Self {
            symbol: symbol.into(),
            points,
            source: SeriesSource::Market,
        }
    }

    /// Number of return observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Return values without dates.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Dates without values.
    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    /// Looks up the return on a specific date.
    ///
    /// Binary search over the strictly increasing date index.
    #[must_use]
    pub fn value_on(&self, date: NaiveDate) -> Option<f64> {
        self.points
            .binary_search_by(|p| p.date.cmp(&date))
            .ok()
            .map(|idx| self.points[idx].value)
    }

    /// Returns a copy retagged with a different source.
    #[must_use]
    pub fn with_source(mut self, source: SeriesSource) -> Self {
        self.source = source;
        self
    }
}

// =============================================================================
// ESTIMATES
// =============================================================================

/// A complete portfolio risk estimate.
///
/// All fields are always populated - under total data failure the engine
/// substitutes the whole-portfolio defaults rather than omitting fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskEstimate {
    /// One-day Value at Risk, percentage.
    pub var: f64,
    /// Portfolio beta relative to the benchmark.
    pub beta: f64,
    /// Annualized Sharpe ratio.
    pub sharpe_ratio: f64,
    /// Maximum drawdown, percentage in `[0, 100]`.
    pub max_drawdown: f64,
    /// Annualized volatility, percentage.
    pub volatility: f64,
    /// When the estimate was computed.
    pub computed_at: DateTime<Utc>,
}

/// A single-symbol risk summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolRisk {
    /// The symbol assessed.
    pub symbol: String,
    /// Annualized volatility, percentage.
    pub volatility: f64,
    /// One-day Value at Risk, percentage.
    pub var_1d: f64,
    /// Five-day Value at Risk via square-root-of-time scaling.
    pub var_5d: f64,
    /// When the estimate was computed.
    pub computed_at: DateTime<Utc>,
}
