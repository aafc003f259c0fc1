//! Country ETF rotation scoring against dual benchmarks.

use std::cmp::Ordering;

use ronda_combine::Rating;
use ronda_signals::{PriceMomentum, RelativeMomentum, TechnicalMomentum};
use ronda_traits::{DataProvider, HistoryPeriod, PriceSeries, Result, RondaError, Symbol};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Scale applied to a relative return before centering at 50, identical to
/// the relative momentum component's rescale.
const RELATIVE_SCALE: f64 = 500.0;

/// Tolerance for the country weights-sum-to-one check.
const SUM_TOLERANCE: f64 = 1e-9;

/// Blend weights for the country composite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CountryWeights {
    /// Weight of the relative-vs-domestic-benchmark term.
    pub vs_primary: f64,
    /// Weight of the relative-vs-global-benchmark term.
    pub vs_global: f64,
    /// Weight of the technical momentum term.
    pub technical: f64,
    /// Weight of the absolute price momentum term.
    pub price: f64,
    /// Weight of the volume/liquidity term.
    pub volume: f64,
}

impl CountryWeights {
    /// Validate that the weights are each in [0, 1] and sum to 1.0.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::InvalidWeights`] on a violation.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("vs_primary", self.vs_primary),
            ("vs_global", self.vs_global),
            ("technical", self.technical),
            ("price", self.price),
            ("volume", self.volume),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(RondaError::InvalidWeights(format!(
                    "country {name} weight {value} is outside [0, 1]"
                )));
            }
        }
        let sum = self.vs_primary + self.vs_global + self.technical + self.price + self.volume;
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(RondaError::InvalidWeights(format!(
                "country weights sum to {sum}, expected 1.0"
            )));
        }
        Ok(())
    }
}

impl Default for CountryWeights {
    /// The production weight set: vs-domestic 0.30, vs-global 0.25,
    /// technical 0.25, price 0.15, volume 0.05.
    fn default() -> Self {
        Self {
            vs_primary: 0.30,
            vs_global: 0.25,
            technical: 0.25,
            price: 0.15,
            volume: 0.05,
        }
    }
}

fn default_volume_divisor() -> f64 {
    1_000_000.0
}

fn default_volume_window() -> usize {
    30
}

/// Configuration for the country rotation analyzer.
///
/// Benchmarks are required; there is no compiled-in default universe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRotationConfig {
    /// Domestic market benchmark symbol.
    pub primary_benchmark: Symbol,
    /// Global/international benchmark symbol.
    pub global_benchmark: Symbol,
    /// Divisor applied to the average volume before capping at 100
    /// (default: 1,000,000).
    #[serde(default = "default_volume_divisor")]
    pub volume_divisor: f64,
    /// Trailing window for the volume average (default: 30).
    #[serde(default = "default_volume_window")]
    pub volume_window: usize,
    /// Composite blend weights.
    #[serde(default)]
    pub weights: CountryWeights,
}

impl CountryRotationConfig {
    /// Create a config with the given benchmarks and default knobs.
    #[must_use]
    pub fn new(primary_benchmark: impl Into<Symbol>, global_benchmark: impl Into<Symbol>) -> Self {
        Self {
            primary_benchmark: primary_benchmark.into(),
            global_benchmark: global_benchmark.into(),
            volume_divisor: default_volume_divisor(),
            volume_window: default_volume_window(),
            weights: CountryWeights::default(),
        }
    }
}

/// Composite rotation score for one country ETF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryScore {
    /// Country ETF symbol.
    pub symbol: Symbol,
    /// Raw 3m/6m-blended relative return versus the domestic benchmark.
    pub relative_vs_primary: f64,
    /// Raw 3m/6m-blended relative return versus the global benchmark.
    pub relative_vs_global: f64,
    /// Technical momentum, normalized to [0, 1].
    pub technical: f64,
    /// Absolute price momentum, normalized to [0, 1].
    pub price_momentum: f64,
    /// Volume/liquidity score, normalized to [0, 1].
    pub volume_score: f64,
    /// Weighted composite in [0, 100].
    pub composite: f64,
    /// Rating band for the composite.
    pub rating: Rating,
    /// One-line summary of the country's standing.
    pub description: String,
}

/// Scores country ETFs for rotation against a domestic and a global
/// benchmark.
///
/// Reuses the same price and technical calculators as the security
/// pipeline; only the blend and the dual-benchmark relative terms are
/// country-specific. A benchmark that cannot be fetched degrades its term
/// to a zero contribution; a country whose own series is absent is
/// unscoreable and omitted.
#[derive(Debug, Clone)]
pub struct CountryRotationAnalyzer {
    config: CountryRotationConfig,
    price: PriceMomentum,
    technical: TechnicalMomentum,
    relative: RelativeMomentum,
}

impl CountryRotationAnalyzer {
    /// Create an analyzer, validating the configured weights.
    ///
    /// # Errors
    ///
    /// Returns [`RondaError::InvalidWeights`] when the country weights do
    /// not sum to 1.0.
    pub fn new(config: CountryRotationConfig) -> Result<Self> {
        config.weights.validate()?;
        Ok(Self {
            config,
            price: PriceMomentum::default(),
            technical: TechnicalMomentum::default(),
            relative: RelativeMomentum::default(),
        })
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &CountryRotationConfig {
        &self.config
    }

    /// Rescale a relative return onto [0, 100] centered at 50.
    #[must_use]
    pub fn rescale(relative: f64) -> f64 {
        (50.0 + relative * RELATIVE_SCALE).clamp(0.0, 100.0)
    }

    /// Score every country and rank them descending by composite.
    ///
    /// Countries whose own price history is unavailable are logged and
    /// omitted. An empty input yields an empty ranking.
    pub async fn analyze(
        &self,
        provider: &dyn DataProvider,
        countries: &[Symbol],
    ) -> Vec<CountryScore> {
        let mut scores = Vec::with_capacity(countries.len());
        for symbol in countries {
            match self.score_country(provider, symbol).await {
                Ok(score) => scores.push(score),
                Err(err) => {
                    warn!(country = %symbol, %err, "skipping unscoreable country");
                }
            }
        }

        scores.sort_by(|a, b| {
            b.composite
                .partial_cmp(&a.composite)
                .unwrap_or(Ordering::Equal)
        });
        scores
    }

    /// Score a single country ETF.
    ///
    /// # Errors
    ///
    /// Returns an error when the country's own price history cannot be
    /// fetched; every other problem degrades the affected term to a zero
    /// contribution.
    pub async fn score_country(
        &self,
        provider: &dyn DataProvider,
        symbol: &str,
    ) -> Result<CountryScore> {
        let series = provider
            .price_history(symbol, HistoryPeriod::TwoYears)
            .await
            .map_err(|e| RondaError::Provider(format!("{symbol}: {e}")))?
            .ok_or_else(|| RondaError::SymbolNotFound(symbol.to_string()))?;

        let primary_rel = self
            .benchmark_relative(provider, &series, symbol, &self.config.primary_benchmark)
            .await;
        let global_rel = self
            .benchmark_relative(provider, &series, symbol, &self.config.global_benchmark)
            .await;

        let technical = match self.technical.score(&series) {
            Ok(score) => Some(score),
            Err(err) => {
                warn!(country = %symbol, %err, "technical term degraded to zero");
                None
            }
        };
        let price = match self.price.score(&series) {
            Ok(score) => Some(score),
            Err(err) => {
                warn!(country = %symbol, %err, "price term degraded to zero");
                None
            }
        };
        let volume = series
            .average_volume(self.config.volume_window)
            .map(|avg| (avg / self.config.volume_divisor).min(100.0));

        let w = &self.config.weights;
        let composite = w.vs_primary * primary_rel.map_or(0.0, Self::rescale)
            + w.vs_global * global_rel.map_or(0.0, Self::rescale)
            + w.technical * technical.unwrap_or(0.0)
            + w.price * price.unwrap_or(0.0)
            + w.volume * volume.unwrap_or(0.0);
        let composite = composite.clamp(0.0, 100.0);

        Ok(CountryScore {
            symbol: symbol.to_string(),
            relative_vs_primary: primary_rel.unwrap_or(0.0),
            relative_vs_global: global_rel.unwrap_or(0.0),
            technical: technical.unwrap_or(0.0) / 100.0,
            price_momentum: price.unwrap_or(0.0) / 100.0,
            volume_score: volume.unwrap_or(0.0) / 100.0,
            composite,
            rating: Rating::from_score(composite),
            description: Self::describe(primary_rel, global_rel),
        })
    }

    /// 3m/6m-blended relative return versus one benchmark, or `None` when
    /// the benchmark is unavailable or too short.
    async fn benchmark_relative(
        &self,
        provider: &dyn DataProvider,
        series: &PriceSeries,
        symbol: &str,
        benchmark: &Symbol,
    ) -> Option<f64> {
        let bench_series = match provider.price_history(benchmark, HistoryPeriod::TwoYears).await {
            Ok(Some(s)) => s,
            Ok(None) => {
                warn!(country = %symbol, benchmark = %benchmark, "benchmark absent, term degraded to zero");
                return None;
            }
            Err(err) => {
                warn!(country = %symbol, benchmark = %benchmark, %err, "benchmark fetch failed, term degraded to zero");
                return None;
            }
        };

        if bench_series.len() < self.relative.min_benchmark_bars() {
            warn!(
                country = %symbol,
                benchmark = %benchmark,
                bars = bench_series.len(),
                "benchmark too short, term degraded to zero"
            );
            return None;
        }

        Some(self.relative.relative_blend(series, &bench_series))
    }

    fn describe(primary_rel: Option<f64>, global_rel: Option<f64>) -> String {
        let primary = primary_rel.unwrap_or(0.0);
        let global = global_rel.unwrap_or(0.0);
        let standing = match (primary > 0.0, global > 0.0) {
            (true, true) => "Outperforming domestic and global benchmarks",
            (true, false) => "Outperforming domestic, lagging global",
            (false, true) => "Lagging domestic, outperforming global",
            (false, false) => "Lagging both benchmarks",
        };
        format!(
            "{standing} ({:+.1}% vs domestic, {:+.1}% vs global)",
            primary * 100.0,
            global * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;
    use ronda_traits::{MemoryProvider, PriceBar};

    fn series(bars: usize, start_price: f64, step: f64, volume: f64) -> PriceSeries {
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
                        volume,
                    }
                })
                .collect(),
        )
    }

    fn config() -> CountryRotationConfig {
        CountryRotationConfig::new("SPY", "ACWX")
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        CountryWeights::default().validate().unwrap();
    }

    #[test]
    fn test_bad_weights_rejected_at_construction() {
        let mut cfg = config();
        cfg.weights.vs_primary = 0.9;
        assert!(matches!(
            CountryRotationAnalyzer::new(cfg),
            Err(RondaError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_rescale() {
        assert_relative_eq!(CountryRotationAnalyzer::rescale(0.0), 50.0);
        assert_relative_eq!(CountryRotationAnalyzer::rescale(0.05), 75.0);
        assert_relative_eq!(CountryRotationAnalyzer::rescale(0.5), 100.0);
        assert_relative_eq!(CountryRotationAnalyzer::rescale(-0.5), 0.0);
    }

    #[tokio::test]
    async fn test_score_country_with_both_benchmarks() {
        let mut provider = MemoryProvider::new();
        provider.insert_prices("EWJ", series(300, 100.0, 0.3, 2_000_000.0));
        provider.insert_prices("SPY", series(300, 400.0, 0.1, 50_000_000.0));
        provider.insert_prices("ACWX", series(300, 50.0, 0.01, 3_000_000.0));

        let analyzer = CountryRotationAnalyzer::new(config()).unwrap();
        let score = analyzer.score_country(&provider, "EWJ").await.unwrap();

        assert!(score.relative_vs_primary > 0.0);
        assert!(score.relative_vs_global > 0.0);
        assert!(score.technical > 0.0);
        assert!(score.price_momentum > 0.0);
        // Average volume 2M over a 1M divisor → 2.0 capped score → 0.02.
        assert_relative_eq!(score.volume_score, 0.02, epsilon = 1e-9);
        assert!((0.0..=100.0).contains(&score.composite));
        assert!(score.description.contains("vs domestic"));
    }

    #[tokio::test]
    async fn test_missing_benchmark_degrades_term_to_zero() {
        let mut provider = MemoryProvider::new();
        provider.insert_prices("EWJ", series(300, 100.0, 0.0, 1_000_000.0));
        provider.insert_prices("SPY", series(300, 400.0, 0.0, 1_000_000.0));
        // No ACWX.

        let analyzer = CountryRotationAnalyzer::new(config()).unwrap();
        let score = analyzer.score_country(&provider, "EWJ").await.unwrap();

        // Flat-vs-flat primary term is neutral (rescales to 50); the
        // missing global term contributes zero rather than neutral. On a
        // flat series the technical term is 30 (saturated RSI scores 0,
        // volume and ROC sit at their 50 midpoints), price momentum is 0,
        // and the 1M-average volume over the 1M divisor scores 1.
        assert_relative_eq!(score.relative_vs_global, 0.0);
        let expected = 0.30 * 50.0 + 0.25 * 0.0 + 0.25 * 30.0 + 0.15 * 0.0 + 0.05 * 1.0;
        assert_relative_eq!(score.composite, expected, epsilon = 1e-9);
    }

    #[tokio::test]
    async fn test_absent_country_omitted_from_ranking() {
        let mut provider = MemoryProvider::new();
        provider.insert_prices("EWJ", series(300, 100.0, 0.2, 2_000_000.0));
        provider.insert_prices("SPY", series(300, 400.0, 0.1, 9_000_000.0));
        provider.insert_prices("ACWX", series(300, 50.0, 0.02, 3_000_000.0));

        let analyzer = CountryRotationAnalyzer::new(config()).unwrap();
        let ranking = analyzer
            .analyze(&provider, &["EWJ".to_string(), "MISSING".to_string()])
            .await;

        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].symbol, "EWJ");
    }

    #[tokio::test]
    async fn test_ranking_is_descending() {
        let mut provider = MemoryProvider::new();
        provider.insert_prices("STRONG", series(300, 100.0, 0.4, 5_000_000.0));
        provider.insert_prices("WEAK", series(300, 100.0, -0.1, 500_000.0));
        provider.insert_prices("SPY", series(300, 400.0, 0.1, 9_000_000.0));
        provider.insert_prices("ACWX", series(300, 50.0, 0.02, 3_000_000.0));

        let analyzer = CountryRotationAnalyzer::new(config()).unwrap();
        let ranking = analyzer
            .analyze(&provider, &["WEAK".to_string(), "STRONG".to_string()])
            .await;

        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].symbol, "STRONG");
        assert!(ranking[0].composite >= ranking[1].composite);
    }
}
