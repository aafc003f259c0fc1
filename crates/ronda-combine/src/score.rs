//! Composite score assembly: components, rating bands, and the scorer.

use crate::ComponentWeights;
use derive_more::Display;
use ndarray::Array1;
use ronda_traits::Symbol;
use serde::{Deserialize, Serialize};

/// The four bounded component scores for one security.
///
/// Every field lives in [0, 100]; the calculators in `ronda-signals`
/// guarantee the bound, and neutral fallbacks (0 or 50) substitute for
/// components that could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MomentumComponents {
    /// Absolute price-trend score.
    pub price: f64,
    /// Technical score.
    pub technical: f64,
    /// Fundamental score.
    pub fundamental: f64,
    /// Benchmark-relative score.
    pub relative: f64,
}

impl MomentumComponents {
    /// The components as a vector ordered price, technical, fundamental,
    /// relative, matching `ComponentWeights::as_array`.
    #[must_use]
    pub fn as_array(&self) -> Array1<f64> {
        Array1::from_vec(vec![
            self.price,
            self.technical,
            self.fundamental,
            self.relative,
        ])
    }
}

/// Qualitative rating derived from the composite score.
///
/// The bands are fixed: ≥80 Very Strong, ≥60 Strong, ≥40 Neutral,
/// ≥20 Weak, otherwise Very Weak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
pub enum Rating {
    /// Composite below 20.
    #[display("Very Weak")]
    VeryWeak,
    /// Composite in [20, 40).
    #[display("Weak")]
    Weak,
    /// Composite in [40, 60).
    #[display("Neutral")]
    Neutral,
    /// Composite in [60, 80).
    #[display("Strong")]
    Strong,
    /// Composite of 80 or above.
    #[display("Very Strong")]
    VeryStrong,
}

impl Rating {
    /// Map a composite score onto its rating band.
    #[must_use]
    pub fn from_score(composite: f64) -> Self {
        if composite >= 80.0 {
            Self::VeryStrong
        } else if composite >= 60.0 {
            Self::Strong
        } else if composite >= 40.0 {
            Self::Neutral
        } else if composite >= 20.0 {
            Self::Weak
        } else {
            Self::VeryWeak
        }
    }
}

/// A fully assembled momentum score for one security.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeScore {
    /// Security the score belongs to.
    pub symbol: Symbol,
    /// Weighted composite in [0, 100].
    pub composite: f64,
    /// The four component scores.
    pub components: MomentumComponents,
    /// Qualitative rating band.
    pub rating: Rating,
    /// Primary benchmark the relative component was computed against.
    pub benchmark: Symbol,
    /// Sector benchmark, when one was used.
    pub sector_benchmark: Option<Symbol>,
}

/// Combines the four component scores into a composite and a rating.
///
/// A pure function of its inputs: identical components always reproduce
/// the identical composite. There are no failure modes beyond what the
/// weight validation already rules out at construction.
///
/// # Example
///
/// ```
/// use ronda_combine::{CompositeScorer, ComponentWeights, MomentumComponents};
///
/// let scorer = CompositeScorer::default();
/// let components = MomentumComponents {
///     price: 80.0,
///     technical: 60.0,
///     fundamental: 40.0,
///     relative: 50.0,
/// };
/// let composite = scorer.composite(&components);
/// assert!((0.0..=100.0).contains(&composite));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CompositeScorer {
    weights: ComponentWeights,
}

impl CompositeScorer {
    /// Create a scorer with the given (already validated) weights.
    #[must_use]
    pub const fn new(weights: ComponentWeights) -> Self {
        Self { weights }
    }

    /// The weight set in use.
    #[must_use]
    pub const fn weights(&self) -> &ComponentWeights {
        &self.weights
    }

    /// Weighted composite of the components, clamped to [0, 100].
    #[must_use]
    pub fn composite(&self, components: &MomentumComponents) -> f64 {
        self.weights
            .as_array()
            .dot(&components.as_array())
            .clamp(0.0, 100.0)
    }

    /// Assemble the full [`CompositeScore`] record for a security.
    #[must_use]
    pub fn compose(
        &self,
        symbol: impl Into<Symbol>,
        components: MomentumComponents,
        benchmark: impl Into<Symbol>,
        sector_benchmark: Option<Symbol>,
    ) -> CompositeScore {
        let composite = self.composite(&components);
        CompositeScore {
            symbol: symbol.into(),
            composite,
            components,
            rating: Rating::from_score(composite),
            benchmark: benchmark.into(),
            sector_benchmark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_composite_weighted_sum() {
        let scorer = CompositeScorer::default();
        let components = MomentumComponents {
            price: 100.0,
            technical: 100.0,
            fundamental: 100.0,
            relative: 100.0,
        };
        assert_relative_eq!(scorer.composite(&components), 100.0);

        let components = MomentumComponents {
            price: 80.0,
            technical: 60.0,
            fundamental: 40.0,
            relative: 50.0,
        };
        assert_relative_eq!(
            scorer.composite(&components),
            0.40 * 80.0 + 0.25 * 60.0 + 0.25 * 40.0 + 0.10 * 50.0
        );
    }

    #[test]
    fn test_composite_bounds() {
        let scorer = CompositeScorer::default();
        assert_relative_eq!(scorer.composite(&MomentumComponents::default()), 0.0);

        let maxed = MomentumComponents {
            price: 100.0,
            technical: 100.0,
            fundamental: 100.0,
            relative: 100.0,
        };
        assert!(scorer.composite(&maxed) <= 100.0);
    }

    #[test]
    fn test_rating_bands_are_monotonic() {
        assert_eq!(Rating::from_score(95.0), Rating::VeryStrong);
        assert_eq!(Rating::from_score(80.0), Rating::VeryStrong);
        assert_eq!(Rating::from_score(79.9), Rating::Strong);
        assert_eq!(Rating::from_score(60.0), Rating::Strong);
        assert_eq!(Rating::from_score(59.9), Rating::Neutral);
        assert_eq!(Rating::from_score(40.0), Rating::Neutral);
        assert_eq!(Rating::from_score(39.9), Rating::Weak);
        assert_eq!(Rating::from_score(20.0), Rating::Weak);
        assert_eq!(Rating::from_score(19.9), Rating::VeryWeak);
        assert_eq!(Rating::from_score(0.0), Rating::VeryWeak);

        // Higher composite never maps to a lower band.
        let mut previous = Rating::VeryWeak;
        for step in 0..=1000 {
            let rating = Rating::from_score(f64::from(step) * 0.1);
            assert!(rating >= previous);
            previous = rating;
        }
    }

    #[test]
    fn test_rating_display() {
        assert_eq!(Rating::VeryStrong.to_string(), "Very Strong");
        assert_eq!(Rating::Neutral.to_string(), "Neutral");
    }

    #[test]
    fn test_compose_round_trip() {
        // Feeding a score's components back through the scorer reproduces
        // the same composite.
        let scorer = CompositeScorer::default();
        let components = MomentumComponents {
            price: 72.5,
            technical: 64.0,
            fundamental: 31.0,
            relative: 55.5,
        };
        let score = scorer.compose("AAPL", components, "SPY", None);
        assert_relative_eq!(scorer.composite(&score.components), score.composite);
        assert_eq!(score.rating, Rating::from_score(score.composite));
    }
}
