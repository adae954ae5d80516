//! Weighted aggregation of position returns against a benchmark timeline.

use chrono::Utc;
use futures::future::join_all;
use tracing::debug;

use crate::fallback::FallbackPolicy;
use crate::returns::ReturnSeriesBuilder;
use riskcast_core::{Position, ReturnPoint, ReturnSeries, RiskResult, SeriesSource};

/// Combines per-position weighted return series into a single portfolio
/// series aligned to the benchmark's dates.
pub struct PortfolioAggregator<'a> {
    builder: &'a ReturnSeriesBuilder,
    fallback: &'a FallbackPolicy,
    benchmark_symbol: &'a str,
}

impl<'a> PortfolioAggregator<'a> {
    /// Creates an aggregator over the given builder and fallback policy.
    pub fn new(
        builder: &'a ReturnSeriesBuilder,
        fallback: &'a FallbackPolicy,
        benchmark_symbol: &'a str,
    ) -> Self {
        Self {
            builder,
            fallback,
            benchmark_symbol,
        }
    }

    /// Builds the aligned `(portfolio, benchmark)` return series pair.
    ///
    /// The benchmark series is fetched first and defines the master
    /// timeline. Position series are fetched concurrently; a data failure
    /// for a position substitutes a synthetic series so aggregation never
    /// aborts for a position. A benchmark date absent from a position
    /// contributes zero for that position (explicit zero-fill).
    ///
    /// # Errors
    ///
    /// Only benchmark unavailability (or an unanticipated non-data error)
    /// propagates; the orchestrator's whole-portfolio fallback handles it.
    pub async fn build_portfolio_returns(
        &self,
        positions: &[Position],
        lookback_days: u32,
    ) -> RiskResult<(ReturnSeries, ReturnSeries)> {
        let benchmark = self
            .builder
            .get_returns(self.benchmark_symbol, lookback_days)
            .await?;

        let as_of = Utc::now().date_naive();
        let fetches = positions.iter().map(|position| async move {
            let result = self
                .builder
                .get_returns(&position.symbol, lookback_days)
                .await;
            self.fallback
                .series_or_synthetic(&position.symbol, as_of, result)
        });
        let series: Vec<ReturnSeries> = join_all(fetches)
            .await
            .into_iter()
            .collect::<RiskResult<_>>()?;

        debug!(
            positions = positions.len(),
            benchmark_points = benchmark.len(),
            "aggregating portfolio returns"
        );

        let points = benchmark
            .points
            .iter()
            .map(|bench_point| {
                let value = positions
                    .iter()
                    .zip(series.iter())
                    .map(|(position, series)| {
                        position.weight_fraction()
                            * series.value_on(bench_point.date).unwrap_or(0.0)
                    })
                    .sum();
                ReturnPoint {
                    date: bench_point.date,
                    value,
                }
            })
            .collect();

        let portfolio = ReturnSeries::new("portfolio", points, SeriesSource::Market);
        Ok((portfolio, benchmark))
    }
}
