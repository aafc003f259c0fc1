//! Absolute price-trend momentum from a single security's price series.

use ronda_traits::{PriceSeries, Result, RondaError};
use serde::{Deserialize, Serialize};

/// Configuration for the price momentum calculator.
///
/// The score blends trailing returns over several look-back windows with a
/// moving-average trend confirmation. Defaults follow the standard
/// 1/3/6/12-month windows (21/63/126/249 trading days) with weights tilted
/// toward the recent past, and 20/50/200-bar moving averages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceMomentumConfig {
    /// Trailing-return windows and their blend weights: `(bars, weight)`.
    pub return_weights: Vec<(usize, f64)>,

    /// Moving-average windows and the credit earned when the current close
    /// is strictly above each average: `(bars, credit)`.
    pub ma_credits: Vec<(usize, f64)>,

    /// Minimum number of bars required to score at all (default: 249).
    pub min_bars: usize,
}

impl Default for PriceMomentumConfig {
    fn default() -> Self {
        Self {
            return_weights: vec![(21, 0.4), (63, 0.3), (126, 0.2), (249, 0.1)],
            ma_credits: vec![(20, 0.4), (50, 0.3), (200, 0.3)],
            min_bars: 249,
        }
    }
}

/// Absolute price momentum calculator.
///
/// Scores the strength of a security's own price trend on a 0–100 scale:
/// a weighted blend of trailing returns plus a moving-average confirmation
/// bonus. A window the series cannot cover contributes a zero return; the
/// moving-average credit requires the close to be *strictly* above the
/// average, so a flat series earns nothing from either part.
///
/// # Example
///
/// ```ignore
/// use ronda_signals::PriceMomentum;
///
/// let calc = PriceMomentum::default();
/// let score = calc.score(&series)?;
/// ```
#[derive(Debug, Clone)]
pub struct PriceMomentum {
    config: PriceMomentumConfig,
}

impl PriceMomentum {
    /// Create a new calculator with the given configuration.
    #[must_use]
    pub const fn new(config: PriceMomentumConfig) -> Self {
        Self { config }
    }

    /// Minimum number of bars required to score.
    #[must_use]
    pub const fn min_bars(&self) -> usize {
        self.config.min_bars
    }

    /// Weighted trailing return across the configured windows.
    ///
    /// Windows the series cannot cover contribute a zero return while
    /// keeping their weight in the blend.
    #[must_use]
    pub fn weighted_return(&self, series: &PriceSeries) -> f64 {
        self.config
            .return_weights
            .iter()
            .map(|&(bars, weight)| weight * series.trailing_return(bars).unwrap_or(0.0))
            .sum()
    }

    /// Moving-average confirmation score in [0, 1].
    ///
    /// Each configured average whose value the current close strictly
    /// exceeds earns its credit; the total is capped at 1.0.
    #[must_use]
    pub fn ma_score(&self, series: &PriceSeries) -> f64 {
        let Some(current) = series.last_close() else {
            return 0.0;
        };

        let earned: f64 = self
            .config
            .ma_credits
            .iter()
            .filter_map(|&(window, credit)| {
                let ma = series.sma(window)?;
                (current > ma).then_some(credit)
            })
            .sum();

        earned.min(1.0)
    }

    /// Compute the price momentum score in [0, 100].
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::InsufficientData`] when the series has fewer
    /// than [`PriceMomentumConfig::min_bars`] bars. Callers decide what the
    /// fallback is; this calculator never silently substitutes one.
    pub fn score(&self, series: &PriceSeries) -> Result<f64> {
        if series.len() < self.config.min_bars {
            return Err(RondaError::InsufficientData(format!(
                "price momentum needs {} bars, got {}",
                self.config.min_bars,
                series.len()
            )));
        }

        let weighted_return = self.weighted_return(series);
        let ma_score = self.ma_score(series);

        Ok((weighted_return * 100.0 + ma_score * 100.0).clamp(0.0, 100.0))
    }
}

impl Default for PriceMomentum {
    fn default() -> Self {
        Self::new(PriceMomentumConfig::default())
    }
}
