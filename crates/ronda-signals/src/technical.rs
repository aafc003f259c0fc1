//! Short-term technical momentum: RSI, volume confirmation, rate of change.

use ronda_traits::{PriceSeries, Result, RondaError};
use serde::{Deserialize, Serialize};

/// Blend weight of the RSI component.
const RSI_WEIGHT: f64 = 0.4;
/// Blend weight of the volume-confirmation component.
const VOLUME_WEIGHT: f64 = 0.3;
/// Blend weight of the rate-of-change component.
const ROC_WEIGHT: f64 = 0.3;

/// Configuration for the technical momentum calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalMomentumConfig {
    /// RSI look-back period (default: 14).
    pub rsi_period: usize,

    /// Trailing window for the volume average (default: 30).
    pub volume_window: usize,

    /// Rate-of-change look-back in bars (default: 10).
    pub roc_period: usize,

    /// Minimum number of bars required to score at all (default: 50).
    pub min_bars: usize,
}

impl Default for TechnicalMomentumConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            volume_window: 30,
            roc_period: 10,
            min_bars: 50,
        }
    }
}

/// Technical momentum calculator.
///
/// Blends three short-term signals into a 0–100 score:
///
/// - **RSI(14)**, rewarded in the healthy 50–70 band, fading toward the
///   oversold floor and the overbought ceiling; saturation at either
///   extreme scores zero.
/// - **Volume confirmation**: the latest volume relative to its trailing
///   average.
/// - **10-bar rate of change**, centered at 50 so flat price action is
///   neutral.
#[derive(Debug, Clone)]
pub struct TechnicalMomentum {
    config: TechnicalMomentumConfig,
}

impl TechnicalMomentum {
    /// Create a new calculator with the given configuration.
    #[must_use]
    pub const fn new(config: TechnicalMomentumConfig) -> Self {
        Self { config }
    }

    /// Minimum number of bars required to score.
    #[must_use]
    pub const fn min_bars(&self) -> usize {
        self.config.min_bars
    }

    /// Wilder-style RSI over the configured period.
    ///
    /// Seeds with a simple average of gains/losses over the first period,
    /// then applies the smoothed continuation across the rest of the
    /// series. Returns `None` with fewer than `period + 1` closes.
    #[must_use]
    pub fn rsi(&self, series: &PriceSeries) -> Option<f64> {
        let period = self.config.rsi_period;
        let bars = series.bars();
        if period == 0 || bars.len() < period + 1 {
            return None;
        }

        let mut gains = 0.0;
        let mut losses = 0.0;
        for i in 1..=period {
            let change = bars[i].close - bars[i - 1].close;
            if change > 0.0 {
                gains += change;
            } else {
                losses -= change;
            }
        }

        let p = period as f64;
        let mut avg_gain = gains / p;
        let mut avg_loss = losses / p;

        for i in (period + 1)..bars.len() {
            let change = bars[i].close - bars[i - 1].close;
            let (gain, loss) = if change > 0.0 { (change, 0.0) } else { (0.0, -change) };
            avg_gain = (avg_gain * (p - 1.0) + gain) / p;
            avg_loss = (avg_loss * (p - 1.0) + loss) / p;
        }

        if avg_loss == 0.0 {
            return Some(100.0);
        }

        let rs = avg_gain / avg_loss;
        Some(100.0 - 100.0 / (1.0 + rs))
    }

    /// Map an RSI value onto the 0–100 component score.
    #[must_use]
    pub fn rsi_score(rsi: f64) -> f64 {
        if (50.0..=70.0).contains(&rsi) {
            100.0
        } else if (30.0..50.0).contains(&rsi) {
            (rsi - 30.0) * 2.5
        } else if rsi > 70.0 && rsi <= 85.0 {
            100.0 - (rsi - 70.0) * 2.0
        } else {
            0.0
        }
    }

    /// Volume-confirmation component: latest volume over its trailing
    /// average, scaled so 2x average volume saturates at 100.
    #[must_use]
    pub fn volume_score(&self, series: &PriceSeries) -> f64 {
        let Some(latest) = series.last_volume() else {
            return 0.0;
        };
        match series.average_volume(self.config.volume_window) {
            Some(avg) if avg > 0.0 => (latest / avg * 50.0).min(100.0),
            _ => 0.0,
        }
    }

    /// Rate-of-change component: percentage change over the ROC window,
    /// centered at 50 and clamped to [0, 100].
    #[must_use]
    pub fn roc_score(&self, series: &PriceSeries) -> f64 {
        let roc = series
            .trailing_return(self.config.roc_period)
            .unwrap_or(0.0)
            * 100.0;
        (roc * 10.0 + 50.0).clamp(0.0, 100.0)
    }

    /// Compute the technical momentum score in [0, 100].
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::InsufficientData`] when the series has fewer
    /// than [`TechnicalMomentumConfig::min_bars`] bars.
    pub fn score(&self, series: &PriceSeries) -> Result<f64> {
        if series.len() < self.config.min_bars {
            return Err(RondaError::InsufficientData(format!(
                "technical momentum needs {} bars, got {}",
                self.config.min_bars,
                series.len()
            )));
        }

        let rsi_score = self.rsi(series).map_or(0.0, Self::rsi_score);
        let volume_score = self.volume_score(series);
        let roc_score = self.roc_score(series);

        let composite =
            RSI_WEIGHT * rsi_score + VOLUME_WEIGHT * volume_score + ROC_WEIGHT * roc_score;
        Ok(composite.clamp(0.0, 100.0))
    }
}

impl Default for TechnicalMomentum {
    fn default() -> Self {
        Self::new(TechnicalMomentumConfig::default())
    }
}
