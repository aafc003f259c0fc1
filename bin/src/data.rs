//! Data loading utilities for the Ronda CLI.

use anyhow::{Context, Result};
use ronda_traits::{FundamentalSnapshot, MemoryProvider, PriceBar};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// On-disk dataset: price bars and optional fundamentals per symbol.
#[derive(Debug, Deserialize)]
struct Dataset {
    #[serde(default)]
    prices: HashMap<String, Vec<PriceBar>>,
    #[serde(default)]
    fundamentals: HashMap<String, FundamentalSnapshot>,
}

/// Load a JSON dataset into an in-memory provider.
///
/// The file holds a `prices` map of symbol to bar arrays and an optional
/// `fundamentals` map of symbol to snapshot. Bars may appear in any order;
/// the series sorts itself by date.
pub(crate) fn load_provider(path: &Path) -> Result<MemoryProvider> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset {}", path.display()))?;
    provider_from_str(&raw).with_context(|| format!("failed to parse dataset {}", path.display()))
}

fn provider_from_str(raw: &str) -> Result<MemoryProvider> {
    let dataset: Dataset = serde_json::from_str(raw)?;

    let mut provider = MemoryProvider::new();
    for (symbol, bars) in dataset.prices {
        provider.insert_prices(symbol, bars.into());
    }
    for (symbol, snapshot) in dataset.fundamentals {
        provider.insert_fundamentals(symbol, snapshot);
    }
    Ok(provider)
}

/// Load and parse a JSON configuration file.
pub(crate) fn load_config<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_from_str() {
        let json = r#"{
            "prices": {
                "AAPL": [
                    {"date": "2024-01-03", "open": 101.0, "high": 102.0, "low": 100.0, "close": 101.5, "volume": 900000.0},
                    {"date": "2024-01-02", "open": 100.0, "high": 101.0, "low": 99.0, "close": 100.5, "volume": 1000000.0}
                ]
            },
            "fundamentals": {
                "AAPL": {"revenue_growth": 0.08, "peg_ratio": 1.4}
            }
        }"#;

        let provider = provider_from_str(json).unwrap();
        assert_eq!(provider.symbols(), vec!["AAPL".to_string()]);
    }

    #[test]
    fn test_fundamentals_are_optional() {
        let json = r#"{"prices": {}}"#;
        let provider = provider_from_str(json).unwrap();
        assert!(provider.symbols().is_empty());
    }

    #[test]
    fn test_malformed_dataset_is_an_error() {
        assert!(provider_from_str("not json").is_err());
    }
}
