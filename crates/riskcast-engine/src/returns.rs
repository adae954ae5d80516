//! Cache-or-fetch retrieval of return series.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Days, Utc};
use tracing::{debug, warn};

use crate::cache::CacheStore;
use crate::market_data::MarketDataProvider;
use riskcast_core::{ReturnSeries, RiskError, RiskResult, SeriesSource};

/// Calendar-day buffer added to the lookback window when fetching prices.
///
/// Absorbs non-trading days and the point lost to differencing.
const FETCH_BUFFER_DAYS: u64 = 30;

/// Builds percentage-return series from prices, with caching.
///
/// On a live cache hit the provider is never contacted; on a miss the
/// builder performs at most one provider fetch and one cache write.
pub struct ReturnSeriesBuilder {
    provider: Arc<dyn MarketDataProvider>,
    cache: Arc<dyn CacheStore>,
    cache_ttl: Duration,
    call_timeout: Duration,
}

impl ReturnSeriesBuilder {
    /// Creates a builder over the injected provider and cache.
    pub fn new(
        provider: Arc<dyn MarketDataProvider>,
        cache: Arc<dyn CacheStore>,
        cache_ttl: Duration,
        call_timeout: Duration,
    ) -> Self {
        Self {
            provider,
            cache,
            cache_ttl,
            call_timeout,
        }
    }

    /// Cache key for a `(symbol, lookback)` request.
    #[must_use]
    pub fn cache_key(symbol: &str, lookback_days: u32) -> String {
        format!("returns:{symbol}:{lookback_days}")
    }

    /// Retrieves the return series for a symbol over a lookback window.
    ///
    /// Checks the cache first; on a miss, fetches `lookback_days + 30`
    /// calendar days of prices ending today, derives period-over-period
    /// returns, and writes the series back with the configured TTL.
    ///
    /// # Errors
    ///
    /// [`RiskError::DataUnavailable`] when the provider errs, times out,
    /// or returns an empty history.
    pub async fn get_returns(&self, symbol: &str, lookback_days: u32) -> RiskResult<ReturnSeries> {
        let key = Self::cache_key(symbol, lookback_days);

        match self.cached(&key).await {
            Some(series) => {
                debug!(symbol, lookback_days, "return series cache hit");
                return Ok(series.with_source(SeriesSource::Cache));
            }
            None => debug!(symbol, lookback_days, "return series cache miss"),
        }

        let end = Utc::now().date_naive();
        let start = end
            .checked_sub_days(Days::new(u64::from(lookback_days) + FETCH_BUFFER_DAYS))
            .ok_or_else(|| RiskError::computation("lookback window underflows calendar"))?;

        let fetch = self.provider.fetch_price_history(symbol, start, end);
        let prices = match tokio::time::timeout(self.call_timeout, fetch).await {
            Ok(Ok(prices)) => prices,
            Ok(Err(err)) => {
                return Err(RiskError::data_unavailable(symbol, err.to_string()));
            }
            Err(_) => {
                return Err(RiskError::data_unavailable(
                    symbol,
                    format!("provider timed out after {:?}", self.call_timeout),
                ));
            }
        };

        if prices.len() < 2 {
            return Err(RiskError::data_unavailable(
                symbol,
                format!("{} price points, need at least 2", prices.len()),
            ));
        }

        let series = ReturnSeries::from_prices(symbol, &prices);

        // A write failure only costs a re-fetch later; the series is good.
        let write = self.cache.set(&key, series.clone(), self.cache_ttl);
        match tokio::time::timeout(self.call_timeout, write).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => warn!(symbol, %err, "cache write failed"),
            Err(_) => warn!(symbol, "cache write timed out"),
        }

        Ok(series)
    }

    /// Bounded cache read; failures and timeouts degrade to a miss.
    async fn cached(&self, key: &str) -> Option<ReturnSeries> {
        match tokio::time::timeout(self.call_timeout, self.cache.get(key)).await {
            Ok(Ok(hit)) => hit,
            Ok(Err(err)) => {
                warn!(key, %err, "cache read failed, treating as miss");
                None
            }
            Err(_) => {
                warn!(key, "cache read timed out, treating as miss");
                None
            }
        }
    }
}
