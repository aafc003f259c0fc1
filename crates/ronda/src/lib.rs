#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # ronda
//!
//! Systematic momentum scoring and rotation for equities and ETFs.
//!
//! ronda is an umbrella crate that re-exports all ronda sub-crates for
//! convenience. It provides a unified API for computing component momentum
//! scores, blending them into rated composites, aggregating categories,
//! rotating country exposure, and generating rebalancing signals.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ronda::prelude::*;
//! use ronda::rotation::{Category, CategoryAggregator};
//!
//! # async fn run(provider: impl DataProvider) -> Result<()> {
//! let categories = vec![Category {
//!     name: "US Large Cap".into(),
//!     symbols: vec!["AAPL".into(), "MSFT".into()],
//!     target_allocation: 0.40,
//!     benchmark: "SPY".into(),
//! }];
//!
//! let aggregator = CategoryAggregator::default();
//! let report = aggregator.aggregate(&provider, &categories).await?;
//! println!("portfolio momentum: {:.1}", report.weighted_momentum);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Core types, errors, and the [`DataProvider`] boundary
//! - [`signals`] - The four momentum component calculators
//! - [`combine`] - Weight validation, composite scoring, rating bands
//! - [`rotation`] - Engine, aggregation, country rotation, and signals
//!
//! ## Architecture
//!
//! ronda follows a one-directional pipeline:
//!
//! 1. **Component calculators** score price, technical, fundamental, and
//!    relative momentum for one security at a time
//! 2. **The composite scorer** blends components under validated weights
//!    and assigns a rating band
//! 3. **Aggregators** rank securities within categories or countries
//! 4. **Allocation and signal generation** consume the rankings

/// Version information for the ronda crate.
///
/// This constant contains the current version of ronda as specified in
/// Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Types
// ============================================================================

/// Core types and the data-provider boundary.
///
/// This module re-exports the foundational vocabulary of the framework:
///
/// - [`PriceBar`] / [`PriceSeries`] - typed OHLCV history per security
/// - [`FundamentalSnapshot`] - point-in-time fundamentals
/// - [`DataProvider`] - the async boundary to market data
/// - [`RondaError`] / [`Result`] - the shared error taxonomy
pub mod traits {
    pub use ronda_traits::*;
}

// Re-export core types at top level for convenience
pub use ronda_traits::{DataProvider, HistoryPeriod, MemoryProvider};
pub use ronda_traits::{Date, FundamentalSnapshot, PriceBar, PriceSeries, Symbol};
pub use ronda_traits::{Result, RondaError};

// ============================================================================
// Component Calculators
// ============================================================================

/// Momentum component calculators.
///
/// Four pure calculators, each returning a bounded 0-100 score:
///
/// - **Price**: weighted 1/3/6/12-month returns plus moving-average
///   confirmation
/// - **Technical**: RSI(14), volume confirmation, 10-bar rate of change
/// - **Fundamental**: growth, profitability, and PEG valuation
/// - **Relative**: performance versus one or two benchmark series
///
/// Insufficient history is a typed error, never a silently substituted
/// value; the scoring engine owns the neutral-fallback policy.
pub mod signals {
    pub use ronda_signals::*;
}

// ============================================================================
// Composite Scoring
// ============================================================================

/// Composite scoring and rating.
///
/// Blends the four component scores under [`ComponentWeights`] (validated
/// at construction to sum to 1.0) into a composite with one of five fixed
/// [`Rating`] bands.
///
/// [`ComponentWeights`]: ronda_combine::ComponentWeights
/// [`Rating`]: ronda_combine::Rating
pub mod combine {
    pub use ronda_combine::*;
}

// ============================================================================
// Aggregation & Signals
// ============================================================================

/// Scoring engine, aggregation, country rotation, and rebalancing signals.
///
/// ## Key Components
///
/// - **MomentumEngine**: fetch-and-score pipeline for one security
/// - **CategoryAggregator**: ranked categories and the portfolio-weighted
///   momentum figure
/// - **CountryRotationAnalyzer**: dual-benchmark country ETF scoring
/// - **allocate**: score-proportional weights under an allocation budget
/// - **RotationSignalGenerator**: threshold-driven BUY/SELL signals
pub mod rotation {
    pub use ronda_rotation::*;
}

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// This brings into scope the types most programs need:
///
/// ```ignore
/// use ronda::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{DataProvider, HistoryPeriod, MemoryProvider};
    pub use crate::{Date, FundamentalSnapshot, PriceBar, PriceSeries, Symbol};
    pub use crate::{Result, RondaError};
    pub use ronda_combine::{ComponentWeights, CompositeScore, CompositeScorer, Rating};
    pub use ronda_rotation::{CategoryAggregator, MomentumEngine, RankedEntry};
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        // Version should be in semver format (x.y.z)
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_re_exports() {
        // This test verifies that re-exports compile correctly by using
        // them in type positions.

        fn _accept_provider(_provider: &dyn DataProvider) {}
        fn _accept_scorer(_scorer: &combine::CompositeScorer) {}
        fn _accept_engine(_engine: &rotation::MomentumEngine) {}

        // If this compiles, re-exports are working
    }

    #[test]
    fn test_error_types() {
        let _result: Result<()> = Ok(());
        let _error: RondaError = RondaError::InvalidData("test".to_string());
    }
}
