//! The consolidated per-security scoring engine.
//!
//! One engine computes all four components and assembles the composite;
//! category aggregation and country rotation are callers, not copies. The
//! neutral-fallback policy lives here, at the call sites, where it is
//! explicit and logged; the calculators themselves only ever return
//! `Ok(score)` or a typed error.

use ronda_combine::{ComponentWeights, CompositeScore, CompositeScorer, MomentumComponents};
use ronda_signals::{FundamentalMomentum, PriceMomentum, RelativeMomentum, TechnicalMomentum};
use ronda_traits::{DataProvider, HistoryPeriod, PriceSeries, Result, RondaError};
use tracing::{debug, warn};

/// Fallback for an uncomputable price component.
pub const PRICE_FALLBACK: f64 = 0.0;
/// Fallback for an uncomputable technical component.
pub const TECHNICAL_FALLBACK: f64 = 0.0;
/// Fallback for an uncomputable fundamental component.
pub const FUNDAMENTAL_FALLBACK: f64 = 50.0;
/// Fallback for an uncomputable relative component.
pub const RELATIVE_FALLBACK: f64 = 50.0;

/// Per-security momentum scoring engine.
///
/// Fetches a security's data through the [`DataProvider`] boundary, runs
/// the four component calculators, applies the neutral-fallback policy for
/// components that cannot be computed (0 for price/technical, 50 for
/// fundamental/relative), and assembles the weighted [`CompositeScore`].
///
/// A security whose own price history is absent is unscoreable: that is an
/// error the caller handles by omitting the symbol, not a fallback case.
#[derive(Debug, Clone, Default)]
pub struct MomentumEngine {
    price: PriceMomentum,
    technical: TechnicalMomentum,
    fundamental: FundamentalMomentum,
    relative: RelativeMomentum,
    scorer: CompositeScorer,
}

impl MomentumEngine {
    /// Create an engine with default calculators and the given weights.
    #[must_use]
    pub fn new(weights: ComponentWeights) -> Self {
        Self {
            scorer: CompositeScorer::new(weights),
            ..Default::default()
        }
    }

    /// The composite scorer in use.
    #[must_use]
    pub const fn scorer(&self) -> &CompositeScorer {
        &self.scorer
    }

    /// The price calculator in use.
    #[must_use]
    pub const fn price_calculator(&self) -> &PriceMomentum {
        &self.price
    }

    /// The technical calculator in use.
    #[must_use]
    pub const fn technical_calculator(&self) -> &TechnicalMomentum {
        &self.technical
    }

    /// The relative calculator in use.
    #[must_use]
    pub const fn relative_calculator(&self) -> &RelativeMomentum {
        &self.relative
    }

    /// Resolve a calculator result against its neutral fallback, logging
    /// the degradation. This is the whole fallback policy; nothing else
    /// substitutes values.
    fn component_or(result: Result<f64>, fallback: f64, symbol: &str, component: &str) -> f64 {
        match result {
            Ok(score) => score,
            Err(err) => {
                warn!(symbol, component, %err, fallback, "component degraded to fallback");
                fallback
            }
        }
    }

    /// Fetch a series, turning both fetch failure and absence into errors.
    async fn fetch_series(
        &self,
        provider: &dyn DataProvider,
        symbol: &str,
        period: HistoryPeriod,
    ) -> Result<PriceSeries> {
        provider
            .price_history(symbol, period)
            .await
            .map_err(|e| RondaError::Provider(format!("{symbol}: {e}")))?
            .ok_or_else(|| RondaError::SymbolNotFound(symbol.to_string()))
    }

    /// Score one security against a primary and optional sector benchmark.
    ///
    /// # Errors
    ///
    /// Returns an error only when the security's own price history cannot
    /// be fetched at all; the security is then unscoreable and should be
    /// omitted from rankings. Benchmark and fundamentals problems degrade
    /// to component fallbacks instead.
    pub async fn score_symbol(
        &self,
        provider: &dyn DataProvider,
        symbol: &str,
        benchmark: &str,
        sector_benchmark: Option<&str>,
    ) -> Result<CompositeScore> {
        let series = self
            .fetch_series(provider, symbol, HistoryPeriod::TwoYears)
            .await?;

        let price = Self::component_or(self.price.score(&series), PRICE_FALLBACK, symbol, "price");
        let technical = Self::component_or(
            self.technical.score(&series),
            TECHNICAL_FALLBACK,
            symbol,
            "technical",
        );

        let fundamental = match provider.fundamentals(symbol).await {
            Ok(Some(snapshot)) => Self::component_or(
                self.fundamental.score(&snapshot),
                FUNDAMENTAL_FALLBACK,
                symbol,
                "fundamental",
            ),
            Ok(None) => {
                debug!(symbol, "no fundamentals available, scoring neutral");
                FUNDAMENTAL_FALLBACK
            }
            Err(err) => {
                warn!(symbol, %err, "fundamentals fetch failed, scoring neutral");
                FUNDAMENTAL_FALLBACK
            }
        };

        let relative = match self
            .fetch_series(provider, benchmark, HistoryPeriod::TwoYears)
            .await
        {
            Ok(bench_series) => {
                let sector_series = match sector_benchmark {
                    Some(sector) => match self
                        .fetch_series(provider, sector, HistoryPeriod::TwoYears)
                        .await
                    {
                        Ok(s) => Some(s),
                        Err(err) => {
                            warn!(symbol, sector, %err, "sector benchmark unavailable, ignoring");
                            None
                        }
                    },
                    None => None,
                };
                Self::component_or(
                    self.relative.score(&series, &bench_series, sector_series.as_ref()),
                    RELATIVE_FALLBACK,
                    symbol,
                    "relative",
                )
            }
            Err(err) => {
                warn!(symbol, benchmark, %err, "benchmark unavailable, scoring neutral");
                RELATIVE_FALLBACK
            }
        };

        Ok(self.scorer.compose(
            symbol,
            MomentumComponents {
                price,
                technical,
                fundamental,
                relative,
            },
            benchmark,
            sector_benchmark.map(String::from),
        ))
    }
}
