//! Score-proportional position weighting under a fixed allocation budget.

use ndarray::Array1;
use ronda_traits::Symbol;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::report::RankedEntry;

/// One position weight in an allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationWeight {
    /// Security or country ETF symbol.
    pub symbol: Symbol,
    /// Portfolio weight fraction assigned to the symbol.
    pub weight: f64,
}

/// Convert a ranked set of scored candidates into score-proportional
/// weights under a total allocation budget.
///
/// Each entry receives `(score / Σscores) × budget`, so the weights sum to
/// the budget within floating-point rounding. An empty ranking yields an
/// empty allocation. A ranking whose scores sum to zero or less has no
/// meaningful proportional split and also yields an empty allocation.
///
/// # Example
///
/// ```
/// use ronda_rotation::{allocate, RankedEntry};
/// use ronda_combine::Rating;
///
/// let ranked = vec![
///     RankedEntry { symbol: "A".into(), score: 80.0, rating: Rating::VeryStrong },
///     RankedEntry { symbol: "B".into(), score: 40.0, rating: Rating::Neutral },
/// ];
/// let weights = allocate(&ranked, 0.12);
/// assert_eq!(weights.len(), 2);
/// assert!((weights.iter().map(|w| w.weight).sum::<f64>() - 0.12).abs() < 1e-12);
/// ```
#[must_use]
pub fn allocate(ranked: &[RankedEntry], budget: f64) -> Vec<AllocationWeight> {
    if ranked.is_empty() {
        return Vec::new();
    }

    let scores = Array1::from_iter(ranked.iter().map(|e| e.score));
    let total = scores.sum();
    if total <= 0.0 {
        debug!(entries = ranked.len(), total, "no positive score mass, empty allocation");
        return Vec::new();
    }

    let weights = scores.mapv(|score| score / total * budget);

    ranked
        .iter()
        .zip(weights)
        .map(|(entry, weight)| AllocationWeight {
            symbol: entry.symbol.clone(),
            weight,
        })
        .collect()
}
