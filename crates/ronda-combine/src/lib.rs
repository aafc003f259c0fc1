//! Composite scoring for the Ronda framework.
//!
//! This crate blends the four component scores produced by `ronda-signals`
//! into a single 0–100 composite with a qualitative rating:
//!
//! - [`ComponentWeights`], typed, construction-validated blend weights
//! - [`MomentumComponents`], the four bounded component scores
//! - [`CompositeScorer`], the pure weighted blend
//! - [`Rating`], the five fixed rating bands
//!
//! # Example
//!
//! ```
//! use ronda_combine::{ComponentWeights, CompositeScorer, MomentumComponents};
//!
//! let scorer = CompositeScorer::new(ComponentWeights::default());
//! let score = scorer.compose(
//!     "AAPL",
//!     MomentumComponents { price: 70.0, technical: 55.0, fundamental: 45.0, relative: 60.0 },
//!     "SPY",
//!     None,
//! );
//! println!("{}: {:.1} ({})", score.symbol, score.composite, score.rating);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod score;
mod weights;

pub use score::{CompositeScore, CompositeScorer, MomentumComponents, Rating};
pub use weights::ComponentWeights;
