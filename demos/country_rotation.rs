//! Country ETF rotation walkthrough over synthetic data.
//!
//! This example demonstrates:
//! - Ranking country ETFs against a domestic and a global benchmark
//! - Generating BUY/SELL rotation signals against current holdings

use chrono::NaiveDate;
use ronda::prelude::*;
use ronda::rotation::{
    CountryRotationAnalyzer, CountryRotationConfig, RotationSignalConfig, RotationSignalGenerator,
};
use ronda::{MemoryProvider, PriceBar, PriceSeries};
use std::collections::HashSet;

/// Trading days of synthetic history to generate.
const HISTORY_BARS: usize = 300;

fn synthetic_series(start_price: f64, daily_drift: f64, volume: f64) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    let bars = (0..HISTORY_BARS)
        .map(|i| {
            let close = start_price * (1.0 + daily_drift).powi(i as i32);
            PriceBar {
                date: start + chrono::Days::new(i as u64),
                open: close * 0.999,
                high: close * 1.003,
                low: close * 0.996,
                close,
                volume,
            }
        })
        .collect();
    PriceSeries::new(bars)
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let mut provider = MemoryProvider::new();
    provider.insert_prices("SPY", synthetic_series(430.0, 0.0004, 80_000_000.0));
    provider.insert_prices("ACWX", synthetic_series(52.0, 0.0002, 3_500_000.0));

    provider.insert_prices("EWJ", synthetic_series(64.0, 0.0011, 7_000_000.0));
    provider.insert_prices("EWG", synthetic_series(29.0, 0.0006, 2_800_000.0));
    provider.insert_prices("EWU", synthetic_series(33.0, 0.0001, 2_200_000.0));
    provider.insert_prices("EWZ", synthetic_series(30.0, -0.0009, 15_000_000.0));

    let analyzer = CountryRotationAnalyzer::new(CountryRotationConfig::new("SPY", "ACWX"))?;
    let countries: Vec<Symbol> = ["EWJ", "EWG", "EWU", "EWZ"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let ranking = analyzer.analyze(&provider, &countries).await;
    println!("Country ranking:");
    for score in &ranking {
        println!(
            "  {:<6} {:>6.1}  {}  ({})",
            score.symbol, score.composite, score.rating, score.description
        );
    }

    let holdings: HashSet<Symbol> = ["EWZ".to_string()].into_iter().collect();
    let ranked: Vec<RankedEntry> = ranking.iter().map(RankedEntry::from).collect();

    let generator = RotationSignalGenerator::new(RotationSignalConfig::default());
    let signals = generator.generate(&holdings, &ranked);

    println!("\nSignals against holdings {holdings:?}:");
    if signals.is_empty() {
        println!("  none");
    }
    for signal in &signals {
        println!("  {} {}: {}", signal.action, signal.symbol, signal.reason);
    }

    Ok(())
}
