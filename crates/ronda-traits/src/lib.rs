#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core type definitions for the Ronda momentum scoring framework.
//!
//! This crate provides the foundational vocabulary for computing momentum
//! scores: price series, fundamentals snapshots, the data-provider boundary,
//! and the shared error taxonomy.

/// The version of the ronda-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod provider;
pub mod types;

// Re-exports
pub use error::{Result, RondaError};
pub use provider::{DataProvider, HistoryPeriod, MemoryProvider};
pub use types::{Date, FundamentalSnapshot, PriceBar, PriceSeries, Symbol, TRADING_DAYS_PER_MONTH};
