//! Category-level aggregation of per-security scores.

use std::cmp::Ordering;
use std::collections::HashMap;

use ronda_combine::CompositeScore;
use ronda_traits::{DataProvider, HistoryPeriod, Result, RondaError, Symbol};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::engine::MomentumEngine;

/// A named group of securities sharing a benchmark and a target allocation.
///
/// Categories are injected configuration; the library compiles in no
/// universe of its own. Target allocations are fractions of the portfolio,
/// defined independently per category; the design assumes they sum to at
/// most 1.0 with the remainder held as cash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Display name, e.g. "US Large Cap Growth".
    pub name: String,
    /// Member symbols.
    pub symbols: Vec<Symbol>,
    /// Target allocation fraction in (0, 1].
    pub target_allocation: f64,
    /// Benchmark used as the primary for every member's relative score.
    pub benchmark: Symbol,
}

impl Category {
    /// Validate the category configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::InvalidData`] when the target allocation is
    /// outside (0, 1] or the benchmark is empty. A bad category is a
    /// configuration defect, not a condition to degrade from.
    pub fn validate(&self) -> Result<()> {
        if !self.target_allocation.is_finite()
            || self.target_allocation <= 0.0
            || self.target_allocation > 1.0
        {
            return Err(RondaError::InvalidData(format!(
                "category '{}': target allocation {} is outside (0, 1]",
                self.name, self.target_allocation
            )));
        }
        if self.benchmark.is_empty() {
            return Err(RondaError::InvalidData(format!(
                "category '{}': benchmark symbol is empty",
                self.name
            )));
        }
        Ok(())
    }
}

/// Scored view of one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryReport {
    /// Category name.
    pub name: String,
    /// Target allocation fraction.
    pub target_allocation: f64,
    /// Benchmark the members were scored against.
    pub benchmark: Symbol,
    /// Member scores, ranked descending by composite (stable on ties).
    pub scores: Vec<CompositeScore>,
    /// Highest-scoring member, when any member scored.
    pub top_pick: Option<Symbol>,
    /// Mean composite over the members that scored; 0.0 when none did.
    pub avg_score: f64,
}

/// Portfolio-level aggregation across all categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioReport {
    /// Per-category reports, in input order.
    pub categories: Vec<CategoryReport>,
    /// Σ(category average × target allocation) across categories.
    pub weighted_momentum: f64,
}

/// Current market weight of one category given a holdings map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryValuation {
    /// Category name.
    pub name: String,
    /// Target allocation fraction.
    pub target_allocation: f64,
    /// Market value of the category's held members.
    pub market_value: f64,
    /// Fraction of the valued portfolio the category currently holds.
    pub current_weight: f64,
}

/// Groups securities into categories and derives category statistics from
/// per-security composite scores.
///
/// One member's failure never excludes the rest of its category: the
/// failed symbol is logged and omitted, and the category statistics are
/// computed from whatever subset scored.
#[derive(Debug, Clone, Default)]
pub struct CategoryAggregator {
    engine: MomentumEngine,
}

impl CategoryAggregator {
    /// Create an aggregator around the given engine.
    #[must_use]
    pub const fn new(engine: MomentumEngine) -> Self {
        Self { engine }
    }

    /// The engine in use.
    #[must_use]
    pub const fn engine(&self) -> &MomentumEngine {
        &self.engine
    }

    /// Score every member of every category and derive the portfolio view.
    ///
    /// Categories come back in input order; members within a category are
    /// ranked descending by composite with ties keeping input order.
    /// An empty category list yields an empty report.
    ///
    /// # Errors
    ///
    /// Returns an error only for invalid category configuration. Provider
    /// failures for individual symbols degrade to omission.
    pub async fn aggregate(
        &self,
        provider: &dyn DataProvider,
        categories: &[Category],
    ) -> Result<PortfolioReport> {
        for category in categories {
            category.validate()?;
        }

        let mut reports = Vec::with_capacity(categories.len());
        for category in categories {
            reports.push(self.aggregate_one(provider, category).await);
        }

        let weighted_momentum = reports
            .iter()
            .map(|r| r.avg_score * r.target_allocation)
            .sum();

        Ok(PortfolioReport {
            categories: reports,
            weighted_momentum,
        })
    }

    /// Score one category's members and rank them.
    async fn aggregate_one(&self, provider: &dyn DataProvider, category: &Category) -> CategoryReport {
        let mut scores: Vec<CompositeScore> = Vec::with_capacity(category.symbols.len());

        for symbol in &category.symbols {
            match self
                .engine
                .score_symbol(provider, symbol, &category.benchmark, None)
                .await
            {
                Ok(score) => scores.push(score),
                Err(err) => {
                    warn!(category = %category.name, symbol = %symbol, %err, "skipping unscoreable symbol");
                }
            }
        }

        // Stable descending sort; ties keep input order.
        scores.sort_by(|a, b| {
            b.composite
                .partial_cmp(&a.composite)
                .unwrap_or(Ordering::Equal)
        });

        let avg_score = if scores.is_empty() {
            0.0
        } else {
            scores.iter().map(|s| s.composite).sum::<f64>() / scores.len() as f64
        };

        CategoryReport {
            name: category.name.clone(),
            target_allocation: category.target_allocation,
            benchmark: category.benchmark.clone(),
            top_pick: scores.first().map(|s| s.symbol.clone()),
            scores,
            avg_score,
        }
    }

    /// Value current holdings per category.
    ///
    /// `holdings` maps symbols to share counts. Every holding is valued at
    /// its latest close; a symbol whose price cannot be fetched is logged
    /// and skipped. Current weights are fractions of the total valued
    /// portfolio, so a category's weight can be compared directly against
    /// its target allocation.
    ///
    /// # Errors
    ///
    /// Returns an error only for invalid category configuration.
    pub async fn value_holdings(
        &self,
        provider: &dyn DataProvider,
        categories: &[Category],
        holdings: &HashMap<Symbol, f64>,
    ) -> Result<Vec<CategoryValuation>> {
        for category in categories {
            category.validate()?;
        }

        let mut values: HashMap<&str, f64> = HashMap::new();
        let mut total = 0.0;
        for (symbol, shares) in holdings {
            let close = match provider.price_history(symbol, HistoryPeriod::ThreeMonths).await {
                Ok(Some(series)) => series.last_close(),
                Ok(None) => None,
                Err(err) => {
                    warn!(symbol = %symbol, %err, "holding price fetch failed, skipping");
                    None
                }
            };
            if let Some(close) = close {
                let value = close * shares;
                values.insert(symbol.as_str(), value);
                total += value;
            } else {
                warn!(symbol = %symbol, "no price for holding, skipping");
            }
        }

        let valuations = categories
            .iter()
            .map(|category| {
                let market_value: f64 = category
                    .symbols
                    .iter()
                    .filter_map(|s| values.get(s.as_str()))
                    .sum();
                CategoryValuation {
                    name: category.name.clone(),
                    target_allocation: category.target_allocation,
                    market_value,
                    current_weight: if total > 0.0 { market_value / total } else { 0.0 },
                }
            })
            .collect();

        Ok(valuations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use ronda_traits::{MemoryProvider, PriceBar, PriceSeries};

    fn trending_series(bars: usize, start_price: f64, step: f64) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        PriceSeries::new(
            (0..bars)
                .map(|i| {
                    let close = start_price + step * i as f64;
                    PriceBar {
                        date: start + chrono::Days::new(i as u64),
                        open: close,
                        high: close,
                        low: close,
                        close,
                        volume: 1_500_000.0,
                    }
                })
                .collect(),
        )
    }

    fn category(name: &str, symbols: &[&str], allocation: f64) -> Category {
        Category {
            name: name.to_string(),
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
            target_allocation: allocation,
            benchmark: "SPY".to_string(),
        }
    }

    fn provider_with(symbols: &[(&str, f64)]) -> MemoryProvider {
        let mut provider = MemoryProvider::new();
        provider.insert_prices("SPY", trending_series(300, 400.0, 0.1));
        for &(symbol, step) in symbols {
            provider.insert_prices(symbol, trending_series(300, 100.0, step));
        }
        provider
    }

    #[tokio::test]
    async fn test_aggregate_ranks_and_averages() {
        let provider = provider_with(&[("FAST", 0.5), ("SLOW", 0.05)]);
        let aggregator = CategoryAggregator::default();
        let report = aggregator
            .aggregate(&provider, &[category("Growth", &["SLOW", "FAST"], 0.5)])
            .await
            .unwrap();

        let growth = &report.categories[0];
        assert_eq!(growth.scores.len(), 2);
        assert_eq!(growth.scores[0].symbol, "FAST");
        assert_eq!(growth.top_pick.as_deref(), Some("FAST"));

        let expected_avg =
            (growth.scores[0].composite + growth.scores[1].composite) / 2.0;
        assert_relative_eq!(growth.avg_score, expected_avg);
        assert_relative_eq!(report.weighted_momentum, expected_avg * 0.5);
    }

    #[tokio::test]
    async fn test_failed_member_does_not_exclude_siblings() {
        let provider = provider_with(&[("GOOD", 0.3)]);
        let aggregator = CategoryAggregator::default();
        let report = aggregator
            .aggregate(
                &provider,
                &[category("Mixed", &["GOOD", "MISSING"], 0.4)],
            )
            .await
            .unwrap();

        let mixed = &report.categories[0];
        assert_eq!(mixed.scores.len(), 1);
        assert_eq!(mixed.scores[0].symbol, "GOOD");
        assert_relative_eq!(mixed.avg_score, mixed.scores[0].composite);
    }

    #[tokio::test]
    async fn test_fully_failed_category_reports_zero() {
        let provider = provider_with(&[]);
        let aggregator = CategoryAggregator::default();
        let report = aggregator
            .aggregate(&provider, &[category("Ghost", &["A", "B"], 0.2)])
            .await
            .unwrap();

        let ghost = &report.categories[0];
        assert!(ghost.scores.is_empty());
        assert_eq!(ghost.top_pick, None);
        assert_relative_eq!(ghost.avg_score, 0.0);
        assert_relative_eq!(report.weighted_momentum, 0.0);
    }

    #[tokio::test]
    async fn test_empty_category_list() {
        let provider = MemoryProvider::new();
        let aggregator = CategoryAggregator::default();
        let report = aggregator.aggregate(&provider, &[]).await.unwrap();
        assert!(report.categories.is_empty());
        assert_relative_eq!(report.weighted_momentum, 0.0);
    }

    #[tokio::test]
    async fn test_invalid_allocation_is_a_defect() {
        let provider = MemoryProvider::new();
        let aggregator = CategoryAggregator::default();
        let result = aggregator
            .aggregate(&provider, &[category("Bad", &["A"], 1.5)])
            .await;
        assert!(matches!(result, Err(RondaError::InvalidData(_))));
    }

    #[tokio::test]
    async fn test_value_holdings() {
        let provider = provider_with(&[("AAA", 0.1), ("BBB", 0.1)]);
        let aggregator = CategoryAggregator::default();

        let mut holdings = HashMap::new();
        holdings.insert("AAA".to_string(), 10.0);
        holdings.insert("BBB".to_string(), 30.0);

        let valuations = aggregator
            .value_holdings(
                &provider,
                &[
                    category("First", &["AAA"], 0.3),
                    category("Second", &["BBB"], 0.3),
                ],
                &holdings,
            )
            .await
            .unwrap();

        // Both series end at the same close, so weights follow share counts.
        assert_relative_eq!(valuations[0].current_weight, 0.25, epsilon = 1e-9);
        assert_relative_eq!(valuations[1].current_weight, 0.75, epsilon = 1e-9);
    }
}
