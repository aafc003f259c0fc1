//! Advisory BUY/SELL rotation signals from score thresholds.

use std::collections::HashSet;

use derive_more::Display;
use ronda_combine::Rating;
use ronda_traits::Symbol;
use serde::{Deserialize, Serialize};

use crate::report::RankedEntry;

/// Signal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Action {
    /// Enter or add to a position.
    #[display("BUY")]
    Buy,
    /// Exit a position.
    #[display("SELL")]
    Sell,
}

/// One advisory rotation signal.
///
/// Signals are output only; nothing here mutates holdings. Executing them
/// is the portfolio collaborator's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationSignal {
    /// Signal direction.
    pub action: Action,
    /// Subject security or country ETF.
    pub symbol: Symbol,
    /// The subject's current composite score.
    pub score: f64,
    /// Rating band for the score.
    pub rating: Rating,
    /// Human-readable justification citing the triggering rule.
    pub reason: String,
}

/// Configuration for the rotation signal generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationSignalConfig {
    /// A held subject scoring below this emits a SELL (default: 15).
    pub sell_threshold: f64,
    /// Window of top-ranked candidates eligible for BUY signals
    /// (default: 3).
    pub top_n: usize,
    /// A top-N candidate must score above this to emit a BUY
    /// (default: 60).
    pub buy_cutoff: f64,
}

impl Default for RotationSignalConfig {
    fn default() -> Self {
        Self {
            sell_threshold: 15.0,
            top_n: 3,
            buy_cutoff: 60.0,
        }
    }
}

/// State-free generator of rotation signals.
///
/// Compares current holdings against a ranked score table and emits:
///
/// - **SELL** for every held subject whose score fell below the sell
///   threshold;
/// - **BUY** for every top-N subject that is not held and scores above the
///   strength cutoff.
///
/// No other transitions exist. A held subject absent from the table emits
/// nothing: there is no score to judge it by; unscoreable holdings are
/// the aggregator's concern. SELLs precede BUYs in the output; within each
/// group, table order is preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct RotationSignalGenerator {
    config: RotationSignalConfig,
}

impl RotationSignalGenerator {
    /// Create a generator with the given configuration.
    #[must_use]
    pub const fn new(config: RotationSignalConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &RotationSignalConfig {
        &self.config
    }

    /// Generate advisory signals for the given holdings and ranking.
    #[must_use]
    pub fn generate(
        &self,
        holdings: &HashSet<Symbol>,
        ranked: &[RankedEntry],
    ) -> Vec<RotationSignal> {
        let mut signals = Vec::new();

        for entry in ranked {
            if holdings.contains(&entry.symbol) && entry.score < self.config.sell_threshold {
                signals.push(RotationSignal {
                    action: Action::Sell,
                    symbol: entry.symbol.clone(),
                    score: entry.score,
                    rating: entry.rating,
                    reason: format!(
                        "score {:.1} fell below sell threshold {:.0}",
                        entry.score, self.config.sell_threshold
                    ),
                });
            }
        }

        for (rank, entry) in ranked.iter().take(self.config.top_n).enumerate() {
            if !holdings.contains(&entry.symbol) && entry.score > self.config.buy_cutoff {
                signals.push(RotationSignal {
                    action: Action::Buy,
                    symbol: entry.symbol.clone(),
                    score: entry.score,
                    rating: entry.rating,
                    reason: format!(
                        "ranked #{} with score {:.1} above entry cutoff {:.0}",
                        rank + 1,
                        entry.score,
                        self.config.buy_cutoff
                    ),
                });
            }
        }

        signals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(symbol: &str, score: f64) -> RankedEntry {
        RankedEntry {
            symbol: symbol.to_string(),
            score,
            rating: Rating::from_score(score),
        }
    }

    fn holdings(symbols: &[&str]) -> HashSet<Symbol> {
        symbols.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_held_below_threshold_emits_sell() {
        let generator = RotationSignalGenerator::default();
        let ranked = vec![entry("AAA", 70.0), entry("BBB", 10.0)];
        let signals = generator.generate(&holdings(&["AAA", "BBB"]), &ranked);

        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].action, Action::Sell);
        assert_eq!(signals[0].symbol, "BBB");
        assert!(signals[0].reason.contains("15"));
    }

    #[test]
    fn test_top_n_unheld_above_cutoff_emits_buy() {
        let generator = RotationSignalGenerator::default();
        let ranked = vec![entry("AAA", 65.0), entry("BBB", 50.0)];
        let signals = generator.generate(&holdings(&[]), &ranked);

        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].action, Action::Buy);
        assert_eq!(signals[0].symbol, "AAA");
        assert!(signals[0].reason.contains("#1"));
    }

    #[test]
    fn test_above_threshold_below_cutoff_emits_nothing() {
        // 55 sits above the sell threshold and below the strength cutoff.
        let generator = RotationSignalGenerator::default();
        let ranked = vec![entry("AAA", 55.0)];
        assert!(generator.generate(&holdings(&[]), &ranked).is_empty());
        assert!(generator.generate(&holdings(&["AAA"]), &ranked).is_empty());
    }

    #[test]
    fn test_held_candidate_is_not_rebought() {
        let generator = RotationSignalGenerator::default();
        let ranked = vec![entry("AAA", 90.0)];
        assert!(generator.generate(&holdings(&["AAA"]), &ranked).is_empty());
    }

    #[test]
    fn test_buy_window_is_top_n_only() {
        let generator = RotationSignalGenerator::default();
        let ranked = vec![
            entry("A", 90.0),
            entry("B", 85.0),
            entry("C", 80.0),
            entry("D", 75.0), // strong, but outside the top 3
        ];
        let signals = generator.generate(&holdings(&[]), &ranked);
        let symbols: Vec<_> = signals.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_sells_precede_buys() {
        let generator = RotationSignalGenerator::default();
        let ranked = vec![entry("NEW", 88.0), entry("OLD", 5.0)];
        let signals = generator.generate(&holdings(&["OLD"]), &ranked);

        assert_eq!(signals.len(), 2);
        assert_eq!(signals[0].action, Action::Sell);
        assert_eq!(signals[0].symbol, "OLD");
        assert_eq!(signals[1].action, Action::Buy);
        assert_eq!(signals[1].symbol, "NEW");
    }

    #[test]
    fn test_held_subject_missing_from_table_emits_nothing() {
        let generator = RotationSignalGenerator::default();
        let ranked = vec![entry("AAA", 70.0)];
        let signals = generator.generate(&holdings(&["GONE"]), &ranked);
        assert!(signals.iter().all(|s| s.symbol != "GONE"));
    }

    #[test]
    fn test_empty_inputs() {
        let generator = RotationSignalGenerator::default();
        assert!(generator.generate(&holdings(&[]), &[]).is_empty());
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Buy.to_string(), "BUY");
        assert_eq!(Action::Sell.to_string(), "SELL");
    }
}
