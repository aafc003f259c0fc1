//! Common types used throughout the Ronda framework.
//!
//! This module defines the market-data vocabulary shared by all calculators:
//! typed OHLCV bars, the per-security price series, and the fundamentals
//! snapshot. Entities are plain values; nothing here owns a handle back to
//! whatever produced it.

use serde::{Deserialize, Serialize};

// Re-export date type from chrono
pub use chrono::NaiveDate as Date;

/// A market symbol identifier.
///
/// Symbols identify securities across the Ronda framework. Typically these
/// are ticker symbols like "AAPL" or "SPY".
pub type Symbol = String;

/// Approximate number of trading days per calendar month.
pub const TRADING_DAYS_PER_MONTH: usize = 21;

/// One OHLCV observation for a single trading session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Trading date of this bar.
    pub date: Date,
    /// Opening price.
    pub open: f64,
    /// Session high.
    pub high: f64,
    /// Session low.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume in shares.
    pub volume: f64,
}

/// Price history for a single security, ordered ascending by date.
///
/// The series is the sole price input to the momentum calculators. Bars are
/// sorted on construction so callers can hand over data in any order; no
/// gap-filling is performed beyond whatever the provider supplies (normal
/// non-trading days are expected and ignored).
///
/// # Example
///
/// ```
/// use ronda_traits::{PriceBar, PriceSeries};
/// use chrono::NaiveDate;
///
/// let bars = vec![PriceBar {
///     date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
///     open: 100.0,
///     high: 101.0,
///     low: 99.5,
///     close: 100.5,
///     volume: 1_000_000.0,
/// }];
/// let series = PriceSeries::new(bars);
/// assert_eq!(series.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Creates a series from bars, sorting them ascending by date.
    #[must_use]
    pub fn new(mut bars: Vec<PriceBar>) -> Self {
        bars.sort_by_key(|b| b.date);
        Self { bars }
    }

    /// Returns the underlying bars, oldest first.
    #[must_use]
    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// Number of bars in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Whether the series holds no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The most recent closing price.
    #[must_use]
    pub fn last_close(&self) -> Option<f64> {
        self.bars.last().map(|b| b.close)
    }

    /// The most recent bar's volume.
    #[must_use]
    pub fn last_volume(&self) -> Option<f64> {
        self.bars.last().map(|b| b.volume)
    }

    /// Closing price `bars_back` sessions before the latest bar.
    ///
    /// `close_back(0)` is the latest close.
    #[must_use]
    pub fn close_back(&self, bars_back: usize) -> Option<f64> {
        let n = self.bars.len();
        if bars_back >= n {
            return None;
        }
        Some(self.bars[n - 1 - bars_back].close)
    }

    /// Trailing return over a `lookback`-bar window.
    ///
    /// Computed as `(current_close / close_lookback_bars_ago) - 1`. A
    /// `lookback`-bar return needs `lookback + 1` closes; returns `None`
    /// when the series is shorter or the historical close is zero.
    #[must_use]
    pub fn trailing_return(&self, lookback: usize) -> Option<f64> {
        let current = self.last_close()?;
        let past = self.close_back(lookback)?;
        if past == 0.0 {
            return None;
        }
        Some(current / past - 1.0)
    }

    /// Simple moving average of the close over the most recent `window` bars.
    ///
    /// Returns `None` when the series is shorter than the window or the
    /// window is zero.
    #[must_use]
    pub fn sma(&self, window: usize) -> Option<f64> {
        if window == 0 || self.bars.len() < window {
            return None;
        }
        let sum: f64 = self.bars[self.bars.len() - window..]
            .iter()
            .map(|b| b.close)
            .sum();
        Some(sum / window as f64)
    }

    /// Average volume over the most recent `window` bars.
    #[must_use]
    pub fn average_volume(&self, window: usize) -> Option<f64> {
        if window == 0 || self.bars.len() < window {
            return None;
        }
        let sum: f64 = self.bars[self.bars.len() - window..]
            .iter()
            .map(|b| b.volume)
            .sum();
        Some(sum / window as f64)
    }
}

impl From<Vec<PriceBar>> for PriceSeries {
    fn from(bars: Vec<PriceBar>) -> Self {
        Self::new(bars)
    }
}

/// A point-in-time fundamentals record for one security.
///
/// Every metric is optional; an absent metric is treated as zero/neutral by
/// the fundamental calculator. Growth and margin figures are decimal
/// fractions (0.15 = 15%), not percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FundamentalSnapshot {
    /// Forward price-to-earnings ratio.
    pub forward_pe: Option<f64>,
    /// Trailing price-to-earnings ratio.
    pub trailing_pe: Option<f64>,
    /// Price/earnings-to-growth ratio.
    pub peg_ratio: Option<f64>,
    /// Year-over-year revenue growth.
    pub revenue_growth: Option<f64>,
    /// Year-over-year earnings growth.
    pub earnings_growth: Option<f64>,
    /// Return on equity.
    pub return_on_equity: Option<f64>,
    /// Net profit margin.
    pub profit_margin: Option<f64>,
}

impl FundamentalSnapshot {
    /// Whether every present metric is a finite number.
    ///
    /// A snapshot carrying NaN or infinity is malformed and scored with the
    /// neutral fallback rather than propagated into the blend.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        [
            self.forward_pe,
            self.trailing_pe,
            self.peg_ratio,
            self.revenue_growth,
            self.earnings_growth,
            self.return_on_equity,
            self.profit_margin,
        ]
        .iter()
        .flatten()
        .all(|v| v.is_finite())
    }
}
