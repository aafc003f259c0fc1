//! Scoring engine, aggregation, and rebalancing signals for Ronda.
//!
//! This crate turns the component calculators into portfolio-level views:
//!
//! - [`MomentumEngine`], the consolidated per-security scoring pipeline,
//!   owning the neutral-fallback policy at its call sites
//! - [`CategoryAggregator`], category and portfolio aggregation
//! - [`CountryRotationAnalyzer`], dual-benchmark country ETF rotation
//! - [`allocate`], score-proportional position weights under a budget
//! - [`RotationSignalGenerator`], advisory BUY/SELL signals
//!
//! Everything downstream of the [`ronda_traits::DataProvider`] boundary is
//! synchronous, pure arithmetic; per-symbol work has no shared state and
//! is safe to fan out.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod allocation;
pub mod category;
pub mod country;
pub mod engine;
pub mod report;
pub mod signal_gen;

pub use allocation::{AllocationWeight, allocate};
pub use category::{
    Category, CategoryAggregator, CategoryReport, CategoryValuation, PortfolioReport,
};
pub use country::{
    CountryRotationAnalyzer, CountryRotationConfig, CountryScore, CountryWeights,
};
pub use engine::MomentumEngine;
pub use report::RankedEntry;
pub use signal_gen::{Action, RotationSignal, RotationSignalConfig, RotationSignalGenerator};
