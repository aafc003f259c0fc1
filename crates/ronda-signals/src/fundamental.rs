//! Growth, profitability, and valuation momentum from a fundamentals snapshot.

use ronda_traits::{FundamentalSnapshot, Result, RondaError};
use serde::{Deserialize, Serialize};

/// Blend weight of the growth component.
const GROWTH_WEIGHT: f64 = 0.4;
/// Blend weight of the profitability component.
const PROFITABILITY_WEIGHT: f64 = 0.4;
/// Blend weight of the valuation component.
const VALUATION_WEIGHT: f64 = 0.2;

/// Configuration for the fundamental momentum calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundamentalMomentumConfig {
    /// Maximum points a single growth or profitability metric can earn
    /// (default: 50, so two metrics fill a 0–100 sub-score).
    pub max_metric_credit: f64,

    /// PEG values at or above this ceiling earn no valuation credit
    /// (default: 2.0).
    pub peg_ceiling: f64,
}

impl Default for FundamentalMomentumConfig {
    fn default() -> Self {
        Self {
            max_metric_credit: 50.0,
            peg_ceiling: 2.0,
        }
    }
}

/// Fundamental momentum calculator.
///
/// Scores a fundamentals snapshot on a 0–100 scale from three sub-scores:
///
/// - **Growth**: positive revenue and earnings growth, each worth up to 50
///   points (`min(50, growth × 100)`).
/// - **Profitability**: positive return on equity and profit margin, scaled
///   the same way.
/// - **Valuation**: `100 − PEG × 50`, credited only while `0 < PEG < 2`.
///
/// Absent metrics count as zero. A snapshot carrying non-finite values is
/// rejected; the caller applies its neutral fallback.
#[derive(Debug, Clone)]
pub struct FundamentalMomentum {
    config: FundamentalMomentumConfig,
}

impl FundamentalMomentum {
    /// Create a new calculator with the given configuration.
    #[must_use]
    pub const fn new(config: FundamentalMomentumConfig) -> Self {
        Self { config }
    }

    /// Credit for one growth-style metric: positive values earn
    /// `min(cap, value × 100)`, everything else earns zero.
    fn metric_credit(&self, metric: Option<f64>) -> f64 {
        let value = metric.unwrap_or(0.0);
        if value > 0.0 {
            (value * 100.0).min(self.config.max_metric_credit)
        } else {
            0.0
        }
    }

    /// Growth sub-score in [0, 100].
    #[must_use]
    pub fn growth_score(&self, snapshot: &FundamentalSnapshot) -> f64 {
        self.metric_credit(snapshot.revenue_growth) + self.metric_credit(snapshot.earnings_growth)
    }

    /// Profitability sub-score in [0, 100].
    #[must_use]
    pub fn profitability_score(&self, snapshot: &FundamentalSnapshot) -> f64 {
        self.metric_credit(snapshot.return_on_equity) + self.metric_credit(snapshot.profit_margin)
    }

    /// Valuation sub-score in [0, 100]. Only a PEG strictly between zero
    /// and the ceiling earns credit; lower PEG is better.
    #[must_use]
    pub fn valuation_score(&self, snapshot: &FundamentalSnapshot) -> f64 {
        let peg = snapshot.peg_ratio.unwrap_or(0.0);
        if peg > 0.0 && peg < self.config.peg_ceiling {
            100.0 - peg * 50.0
        } else {
            0.0
        }
    }

    /// Compute the fundamental momentum score in [0, 100].
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::InvalidData`] when the snapshot carries
    /// non-finite metrics. The neutral-50 fallback for that case belongs to
    /// the caller, not to this calculator.
    pub fn score(&self, snapshot: &FundamentalSnapshot) -> Result<f64> {
        if !snapshot.is_well_formed() {
            return Err(RondaError::InvalidData(
                "fundamentals snapshot contains non-finite metrics".to_string(),
            ));
        }

        let composite = GROWTH_WEIGHT * self.growth_score(snapshot)
            + PROFITABILITY_WEIGHT * self.profitability_score(snapshot)
            + VALUATION_WEIGHT * self.valuation_score(snapshot);

        Ok(composite.clamp(0.0, 100.0))
    }
}

impl Default for FundamentalMomentum {
    fn default() -> Self {
        Self::new(FundamentalMomentumConfig::default())
    }
}
