//! Component registry for discovering the momentum calculators.
//!
//! This module provides metadata and discovery functionality for the four
//! score components, for use by CLIs and report tooling.

use serde::{Deserialize, Serialize};

/// Momentum component classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    /// Absolute price-trend momentum.
    Price,
    /// Short-term technical signals (RSI, volume, rate of change).
    Technical,
    /// Growth/profitability/valuation from fundamentals.
    Fundamental,
    /// Performance relative to one or two benchmarks.
    Relative,
}

impl ComponentKind {
    /// Get a human-readable description of the component kind.
    #[must_use]
    pub const fn description(&self) -> &str {
        match self {
            Self::Price => "Absolute price trend from multi-window returns and moving averages",
            Self::Technical => "Short-term oscillator, volume, and rate-of-change signals",
            Self::Fundamental => "Growth, profitability, and valuation from fundamentals",
            Self::Relative => "Performance relative to benchmark series",
        }
    }
}

/// Metadata about a momentum component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentInfo {
    /// Unique identifier for the component.
    pub name: &'static str,

    /// Kind classification.
    pub kind: ComponentKind,

    /// Human-readable description.
    pub description: &'static str,

    /// Typical look-back period in trading days (0 when price history is
    /// not required).
    pub typical_lookback: usize,

    /// Whether the component requires fundamental data.
    pub requires_fundamentals: bool,

    /// Whether the component requires a benchmark series.
    pub requires_benchmark: bool,
}

/// Get information about all momentum components.
#[must_use]
pub fn available_components() -> Vec<ComponentInfo> {
    vec![
        ComponentInfo {
            name: "price_momentum",
            kind: ComponentKind::Price,
            description: "Weighted 1/3/6/12-month returns plus 20/50/200-bar MA confirmation",
            typical_lookback: 249,
            requires_fundamentals: false,
            requires_benchmark: false,
        },
        ComponentInfo {
            name: "technical_momentum",
            kind: ComponentKind::Technical,
            description: "RSI(14), 30-bar volume confirmation, 10-bar rate of change",
            typical_lookback: 50,
            requires_fundamentals: false,
            requires_benchmark: false,
        },
        ComponentInfo {
            name: "fundamental_momentum",
            kind: ComponentKind::Fundamental,
            description: "Revenue/earnings growth, ROE and margins, PEG valuation",
            typical_lookback: 0,
            requires_fundamentals: true,
            requires_benchmark: false,
        },
        ComponentInfo {
            name: "relative_momentum",
            kind: ComponentKind::Relative,
            description: "3/6-month returns versus primary and optional sector benchmarks",
            typical_lookback: 126,
            requires_fundamentals: false,
            requires_benchmark: true,
        },
    ]
}

/// Get information about a specific component by name.
#[must_use]
pub fn get_component_info(name: &str) -> Option<ComponentInfo> {
    available_components()
        .into_iter()
        .find(|info| info.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_components() {
        let components = available_components();
        assert_eq!(components.len(), 4);

        let kinds: Vec<_> = components.iter().map(|c| c.kind).collect();
        assert!(kinds.contains(&ComponentKind::Price));
        assert!(kinds.contains(&ComponentKind::Technical));
        assert!(kinds.contains(&ComponentKind::Fundamental));
        assert!(kinds.contains(&ComponentKind::Relative));
    }

    #[test]
    fn test_get_component_info() {
        let info = get_component_info("relative_momentum").unwrap();
        assert_eq!(info.kind, ComponentKind::Relative);
        assert!(info.requires_benchmark);

        assert!(get_component_info("unknown").is_none());
    }

    #[test]
    fn test_descriptions_are_present() {
        for info in available_components() {
            assert!(!info.description.is_empty());
            assert!(!info.kind.description().is_empty());
        }
    }
}
