//! Market data provider trait.
//!
//! The provider is an injected external collaborator (e.g., an HTTP quote
//! API). Implementations live outside the engine; tests inject mocks.

use async_trait::async_trait;
use chrono::NaiveDate;

use riskcast_core::{PricePoint, RiskResult};

/// Source of historical closing prices.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetches the ordered closing-price history for a symbol over
    /// `[start, end]` (calendar dates; non-trading days simply absent).
    ///
    /// An empty result is treated by the engine as data unavailability.
    async fn fetch_price_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RiskResult<Vec<PricePoint>>;
}
