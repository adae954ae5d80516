//! High-level risk estimation orchestration.
//!
//! The `RiskEngine` is the main entry point for the riskcast-engine crate.
//! It composes the return series builder, the portfolio aggregator, the
//! metric library, and the fallback policy into the two public operations:
//!
//! - [`RiskEngine::estimate_portfolio_risk`]
//! - [`RiskEngine::estimate_symbol_risk`]
//!
//! Both are total functions from the caller's perspective: they always
//! return a value. A fully-trustworthy estimate and a degraded one share
//! the same shape; the difference is visible only in logs.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::aggregate::PortfolioAggregator;
use crate::cache::CacheStore;
use crate::fallback::{
    FallbackPolicy, SyntheticConfig, DEFAULT_BETA, DEFAULT_MAX_DRAWDOWN, DEFAULT_SHARPE,
    DEFAULT_VAR, DEFAULT_VOLATILITY,
};
use crate::market_data::MarketDataProvider;
use crate::returns::ReturnSeriesBuilder;
use riskcast_core::{
    Position, RiskError, RiskEstimate, RiskResult, SymbolRisk, DEFAULT_CONFIDENCE,
    DEFAULT_LOOKBACK_DAYS, DEFAULT_RISK_FREE_RATE,
};
use riskcast_metrics::{
    annualized_volatility, beta, max_drawdown, parametric_var, scale_var, sharpe_ratio,
};

/// Horizon bounds accepted by the portfolio operation, in days.
const HORIZON_RANGE: std::ops::RangeInclusive<u32> = 1..=30;

// =============================================================================
// ENGINE CONFIGURATION
// =============================================================================

/// Configuration for the risk engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskEngineConfig {
    /// Benchmark index symbol defining the master timeline.
    pub benchmark_symbol: String,
    /// Lookback window in trading days.
    pub lookback_days: u32,
    /// Cache TTL in seconds.
    pub cache_ttl_seconds: u64,
    /// Timeout for each provider or cache call, in milliseconds.
    pub call_timeout_ms: u64,
    /// VaR confidence level.
    pub confidence: f64,
    /// Annual risk-free rate for the Sharpe ratio.
    pub risk_free_rate: f64,
    /// Synthetic substitute series parameters.
    pub synthetic: SyntheticConfig,
}

impl Default for RiskEngineConfig {
    fn default() -> Self {
        Self {
            benchmark_symbol: "^GSPC".to_string(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            cache_ttl_seconds: 3600, // 1 hour
            call_timeout_ms: 10_000,
            confidence: DEFAULT_CONFIDENCE,
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            synthetic: SyntheticConfig::default(),
        }
    }
}

impl RiskEngineConfig {
    /// Cache TTL as a `Duration`.
    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Per-call timeout as a `Duration`.
    #[must_use]
    pub fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.call_timeout_ms)
    }
}

// =============================================================================
// RISK ENGINE
// =============================================================================

/// Portfolio risk estimation engine.
pub struct RiskEngine {
    config: RiskEngineConfig,
    builder: ReturnSeriesBuilder,
    fallback: FallbackPolicy,
}

impl RiskEngine {
    /// Creates an engine over the injected provider and cache store.
    pub fn new(
        provider: Arc<dyn MarketDataProvider>,
        cache: Arc<dyn CacheStore>,
        config: RiskEngineConfig,
    ) -> Self {
        let builder = ReturnSeriesBuilder::new(
            provider,
            cache,
            config.cache_ttl(),
            config.call_timeout(),
        );
        let fallback = FallbackPolicy::new(config.synthetic);
        Self {
            config,
            builder,
            fallback,
        }
    }

    /// Creates an engine with a seeded fallback policy, for reproducible
    /// degraded-mode tests.
    pub fn with_seed(
        provider: Arc<dyn MarketDataProvider>,
        cache: Arc<dyn CacheStore>,
        config: RiskEngineConfig,
        seed: u64,
    ) -> Self {
        let builder = ReturnSeriesBuilder::new(
            provider,
            cache,
            config.cache_ttl(),
            config.call_timeout(),
        );
        let fallback = FallbackPolicy::with_seed(config.synthetic, seed);
        Self {
            config,
            builder,
            fallback,
        }
    }

    /// Estimates portfolio-level risk over the configured lookback window.
    ///
    /// `horizon_days` is clamped to `[1, 30]` and scales the reported VaR
    /// by the square root of the horizon; the remaining metrics are
    /// horizon-independent. Never fails: any pipeline error (including
    /// benchmark unavailability) yields the documented whole-portfolio
    /// default estimate and an error log.
    pub async fn estimate_portfolio_risk(
        &self,
        positions: &[Position],
        horizon_days: u32,
    ) -> RiskEstimate {
        let horizon = horizon_days.clamp(*HORIZON_RANGE.start(), *HORIZON_RANGE.end());

        match self.portfolio_estimate(positions, horizon).await {
            Ok(estimate) => {
                info!(
                    var = estimate.var,
                    beta = estimate.beta,
                    sharpe = estimate.sharpe_ratio,
                    "portfolio risk estimation completed"
                );
                estimate
            }
            Err(err) => {
                // Benchmark unavailability is a known failure; anything
                // else reaching this boundary is unanticipated.
                let failure = match err {
                    known @ RiskError::DataUnavailable { .. } => known,
                    other => RiskError::catastrophic(other.to_string()),
                };
                error!(%failure, "portfolio estimation failed, returning default estimate");
                self.fallback.default_estimate(Utc::now())
            }
        }
    }

    /// Estimates risk for a single symbol.
    ///
    /// Computes annualized volatility and one-day VaR over the configured
    /// lookback; the five-day VaR uses square-root-of-time scaling. A data
    /// failure substitutes the synthetic series, so the operation never
    /// fails.
    pub async fn estimate_symbol_risk(&self, symbol: &str) -> SymbolRisk {
        let as_of = Utc::now().date_naive();
        let result = self
            .builder
            .get_returns(symbol, self.config.lookback_days)
            .await;
        let series = match self.fallback.series_or_synthetic(symbol, as_of, result) {
            Ok(series) => series,
            // Only non-data errors reach here; treat them like a data gap.
            Err(err) => {
                error!(symbol, %err, "symbol series retrieval failed");
                self.fallback.synthetic_series(symbol, as_of)
            }
        };

        let values = series.values();
        let volatility = self.fallback.metric_or_default(
            "volatility",
            annualized_volatility(&values),
            DEFAULT_VOLATILITY,
        );
        let var_1d = self.fallback.metric_or_default(
            "var",
            parametric_var(&values, self.config.confidence),
            DEFAULT_VAR,
        );

        SymbolRisk {
            symbol: symbol.to_string(),
            volatility,
            var_1d,
            var_5d: scale_var(var_1d, 5),
            computed_at: Utc::now(),
        }
    }

    /// The fallible portfolio pipeline wrapped by the public operation.
    async fn portfolio_estimate(
        &self,
        positions: &[Position],
        horizon_days: u32,
    ) -> RiskResult<RiskEstimate> {
        let aggregator = PortfolioAggregator::new(
            &self.builder,
            &self.fallback,
            &self.config.benchmark_symbol,
        );
        let (portfolio, benchmark) = aggregator
            .build_portfolio_returns(positions, self.config.lookback_days)
            .await?;

        let values = portfolio.values();
        let var_1d = self.fallback.metric_or_default(
            "var",
            parametric_var(&values, self.config.confidence),
            DEFAULT_VAR,
        );
        let beta_value =
            self.fallback
                .metric_or_default("beta", beta(&portfolio, &benchmark), DEFAULT_BETA);
        let sharpe = self.fallback.metric_or_default(
            "sharpe_ratio",
            sharpe_ratio(&values, self.config.risk_free_rate),
            DEFAULT_SHARPE,
        );
        let drawdown = self.fallback.metric_or_default(
            "max_drawdown",
            max_drawdown(&values),
            DEFAULT_MAX_DRAWDOWN,
        );
        let volatility = self.fallback.metric_or_default(
            "volatility",
            annualized_volatility(&values),
            DEFAULT_VOLATILITY,
        );

        Ok(RiskEstimate {
            var: scale_var(var_1d, horizon_days),
            beta: beta_value,
            sharpe_ratio: sharpe,
            max_drawdown: drawdown,
            volatility,
            computed_at: Utc::now(),
        })
    }
}
