//! # riskcast-engine
//!
//! Async portfolio risk estimation engine.
//!
//! The engine composes:
//!
//! - [`MarketDataProvider`] / [`CacheStore`]: injected external collaborators
//! - [`ReturnSeriesBuilder`]: cache-or-fetch retrieval of return series
//! - [`PortfolioAggregator`]: weighted, benchmark-aligned aggregation
//! - [`FallbackPolicy`]: substitution when data or computation is unreliable
//! - [`RiskEngine`]: the two public estimation operations
//!
//! Both public operations are total: they always return a well-formed
//! estimate, degrading to documented defaults on failure. Degradation is
//! observable only through logs, not through the result shape.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use riskcast_engine::{MemoryCache, RiskEngine, RiskEngineConfig};
//!
//! let engine = RiskEngine::new(provider, Arc::new(MemoryCache::new()), RiskEngineConfig::default());
//! let estimate = engine.estimate_portfolio_risk(&positions, 1).await;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod aggregate;
pub mod cache;
pub mod engine;
pub mod fallback;
pub mod market_data;
pub mod returns;

pub use aggregate::PortfolioAggregator;
pub use cache::{CacheStore, MemoryCache};
pub use engine::{RiskEngine, RiskEngineConfig};
pub use fallback::{FallbackPolicy, SyntheticConfig};
pub use market_data::MarketDataProvider;
pub use returns::ReturnSeriesBuilder;
