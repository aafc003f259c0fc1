//! Data provider boundary.
//!
//! The scoring pipeline never fetches anything itself; it consumes a
//! [`DataProvider`] supplied by the caller. The trait is async because a
//! real provider sits on a network or a database; those are the only
//! suspension points in the framework. All arithmetic downstream is
//! synchronous.
//!
//! `Ok(None)` means the provider has no data for the symbol, which is
//! distinct from an empty-but-present series and from `Err` (a fetch
//! failure). Calculators rely on that distinction to apply their
//! insufficient-data policies.

use crate::{FundamentalSnapshot, PriceSeries, Result, Symbol};
use async_trait::async_trait;
use std::collections::HashMap;

/// Requested span of price history, in trading days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryPeriod {
    /// Roughly three months (63 trading days).
    ThreeMonths,
    /// Roughly six months (126 trading days).
    SixMonths,
    /// Roughly twelve months (249 trading days).
    #[default]
    OneYear,
    /// Roughly twenty-four months (498 trading days).
    TwoYears,
}

impl HistoryPeriod {
    /// Number of trading days the period spans.
    #[must_use]
    pub const fn trading_days(&self) -> usize {
        match self {
            Self::ThreeMonths => 63,
            Self::SixMonths => 126,
            Self::OneYear => 249,
            Self::TwoYears => 498,
        }
    }

    /// Short label used in logs and CLI output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ThreeMonths => "3mo",
            Self::SixMonths => "6mo",
            Self::OneYear => "1y",
            Self::TwoYears => "2y",
        }
    }
}

/// Source of price and fundamental data consumed by the scoring pipeline.
///
/// Implementations must be thread-safe; the pipeline may fan out over
/// symbols with bounded concurrency. Rate limiting, caching, and timeouts
/// belong to the implementation, not to the callers.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Fetch price history for a symbol.
    ///
    /// Returns `Ok(None)` when the provider has no series for the symbol.
    /// The returned series may be shorter than the requested period; the
    /// calculators handle short series themselves.
    ///
    /// # Errors
    ///
    /// Returns an error when the fetch itself fails.
    async fn price_history(&self, symbol: &str, period: HistoryPeriod) -> Result<Option<PriceSeries>>;

    /// Fetch the current fundamentals snapshot for a symbol.
    ///
    /// Returns `Ok(None)` when the provider has no fundamentals for the
    /// symbol (common for ETFs).
    ///
    /// # Errors
    ///
    /// Returns an error when the fetch itself fails.
    async fn fundamentals(&self, symbol: &str) -> Result<Option<FundamentalSnapshot>>;
}

/// In-memory [`DataProvider`] backed by hash maps.
///
/// Used by tests, demos, and file-based CLI runs. The full stored series is
/// returned regardless of the requested period; callers that want a shorter
/// view take it themselves.
///
/// # Example
///
/// ```
/// use ronda_traits::{MemoryProvider, PriceSeries};
///
/// let mut provider = MemoryProvider::new();
/// provider.insert_prices("SPY", PriceSeries::default());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    prices: HashMap<Symbol, PriceSeries>,
    fundamentals: HashMap<Symbol, FundamentalSnapshot>,
}

impl MemoryProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a price series for a symbol, replacing any existing one.
    pub fn insert_prices(&mut self, symbol: impl Into<Symbol>, series: PriceSeries) {
        self.prices.insert(symbol.into(), series);
    }

    /// Stores a fundamentals snapshot for a symbol.
    pub fn insert_fundamentals(&mut self, symbol: impl Into<Symbol>, snapshot: FundamentalSnapshot) {
        self.fundamentals.insert(symbol.into(), snapshot);
    }

    /// Symbols with stored price series, in no particular order.
    #[must_use]
    pub fn symbols(&self) -> Vec<Symbol> {
        self.prices.keys().cloned().collect()
    }
}

#[async_trait]
impl DataProvider for MemoryProvider {
    async fn price_history(&self, symbol: &str, _period: HistoryPeriod) -> Result<Option<PriceSeries>> {
        Ok(self.prices.get(symbol).cloned())
    }

    async fn fundamentals(&self, symbol: &str) -> Result<Option<FundamentalSnapshot>> {
        Ok(self.fundamentals.get(symbol).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PriceBar;
    use chrono::NaiveDate;

    #[test]
    fn test_history_period_days() {
        assert_eq!(HistoryPeriod::ThreeMonths.trading_days(), 63);
        assert_eq!(HistoryPeriod::OneYear.trading_days(), 249);
        assert_eq!(HistoryPeriod::default(), HistoryPeriod::OneYear);
        assert_eq!(HistoryPeriod::TwoYears.as_str(), "2y");
    }

    #[tokio::test]
    async fn test_memory_provider_absent_vs_present() {
        let mut provider = MemoryProvider::new();
        let bars = vec![PriceBar {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            open: 1.0,
            high: 1.0,
            low: 1.0,
            close: 1.0,
            volume: 1.0,
        }];
        provider.insert_prices("SPY", PriceSeries::new(bars));

        let present = provider
            .price_history("SPY", HistoryPeriod::OneYear)
            .await
            .unwrap();
        assert!(present.is_some());

        let absent = provider
            .price_history("MISSING", HistoryPeriod::OneYear)
            .await
            .unwrap();
        assert!(absent.is_none());
    }

    #[tokio::test]
    async fn test_memory_provider_fundamentals() {
        let mut provider = MemoryProvider::new();
        provider.insert_fundamentals(
            "AAPL",
            FundamentalSnapshot {
                revenue_growth: Some(0.08),
                ..Default::default()
            },
        );

        let snapshot = provider.fundamentals("AAPL").await.unwrap().unwrap();
        assert_eq!(snapshot.revenue_growth, Some(0.08));
        assert!(provider.fundamentals("SPY").await.unwrap().is_none());
    }
}
