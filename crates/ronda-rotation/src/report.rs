//! Lightweight ranking views shared by allocation and signal generation.

use ronda_combine::{CompositeScore, Rating};
use ronda_traits::Symbol;
use serde::{Deserialize, Serialize};

use crate::country::CountryScore;

/// One row of a ranked score table.
///
/// Both [`CompositeScore`] and [`CountryScore`] tables reduce to this view
/// before allocation weighting and signal generation run, so those
/// consumers do not care which pipeline produced the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// Security or country ETF symbol.
    pub symbol: Symbol,
    /// Composite score in [0, 100].
    pub score: f64,
    /// Rating band for the score.
    pub rating: Rating,
}

impl From<&CompositeScore> for RankedEntry {
    fn from(score: &CompositeScore) -> Self {
        Self {
            symbol: score.symbol.clone(),
            score: score.composite,
            rating: score.rating,
        }
    }
}

impl From<&CountryScore> for RankedEntry {
    fn from(score: &CountryScore) -> Self {
        Self {
            symbol: score.symbol.clone(),
            score: score.composite,
            rating: score.rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ronda_combine::MomentumComponents;

    #[test]
    fn test_from_composite_score() {
        let score = CompositeScore {
            symbol: "AAPL".to_string(),
            composite: 72.0,
            components: MomentumComponents::default(),
            rating: Rating::Strong,
            benchmark: "SPY".to_string(),
            sector_benchmark: None,
        };
        let entry = RankedEntry::from(&score);
        assert_eq!(entry.symbol, "AAPL");
        assert_eq!(entry.score, 72.0);
        assert_eq!(entry.rating, Rating::Strong);
    }
}
