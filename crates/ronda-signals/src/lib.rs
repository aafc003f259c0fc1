//! Momentum component calculators for the Ronda framework.
//!
//! This crate provides the four score components blended into a composite
//! momentum score:
//! - Price: absolute trend from multi-window returns and moving averages
//! - Technical: RSI, volume confirmation, and rate of change
//! - Fundamental: growth, profitability, and valuation
//! - Relative: performance versus one or two benchmark series
//!
//! Each calculator is a pure function of its inputs and returns
//! `Result<f64>` with scores bounded to [0, 100]. Insufficient history is
//! an explicit error, never a silently substituted value; callers own the
//! neutral-fallback policy.
//!
//! # Example
//!
//! ```ignore
//! use ronda_signals::{PriceMomentum, TechnicalMomentum};
//!
//! let price = PriceMomentum::default();
//! let technical = TechnicalMomentum::default();
//! let price_score = price.score(&series)?;
//! let technical_score = technical.score(&series)?;
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod fundamental;
pub mod price;
pub mod registry;
pub mod relative;
pub mod technical;

// Re-export key types
pub use fundamental::{FundamentalMomentum, FundamentalMomentumConfig};
pub use price::{PriceMomentum, PriceMomentumConfig};
pub use registry::{ComponentInfo, ComponentKind, available_components, get_component_info};
pub use relative::{RelativeMomentum, RelativeMomentumConfig};
pub use technical::{TechnicalMomentum, TechnicalMomentumConfig};
