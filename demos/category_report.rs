//! Category momentum report over synthetic data.
//!
//! This example demonstrates:
//! - Building an in-memory provider with synthetic price series
//! - Scoring two categories against their benchmarks
//! - Deriving the portfolio-weighted momentum figure
//! - Converting each category's ranking into allocation weights

use chrono::NaiveDate;
use ronda::prelude::*;
use ronda::rotation::{Category, allocate};
use ronda::{FundamentalSnapshot, MemoryProvider, PriceBar, PriceSeries};

/// Trading days of synthetic history to generate.
const HISTORY_BARS: usize = 300;

/// Allocation budget spread across each category's members.
const CATEGORY_BUDGET: f64 = 0.25;

fn synthetic_series(start_price: f64, daily_drift: f64, volume: f64) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    let bars = (0..HISTORY_BARS)
        .map(|i| {
            let close = start_price * (1.0 + daily_drift).powi(i as i32);
            PriceBar {
                date: start + chrono::Days::new(i as u64),
                open: close * 0.999,
                high: close * 1.004,
                low: close * 0.995,
                close,
                volume,
            }
        })
        .collect();
    PriceSeries::new(bars)
}

fn build_provider() -> MemoryProvider {
    let mut provider = MemoryProvider::new();

    // Benchmarks
    provider.insert_prices("SPY", synthetic_series(420.0, 0.0004, 80_000_000.0));
    provider.insert_prices("AGG", synthetic_series(98.0, 0.0000, 6_000_000.0));

    // Growth names with different trends
    provider.insert_prices("ALPHA", synthetic_series(150.0, 0.0016, 12_000_000.0));
    provider.insert_prices("BETA", synthetic_series(90.0, 0.0007, 9_000_000.0));
    provider.insert_prices("GAMMA", synthetic_series(60.0, -0.0005, 4_000_000.0));

    // Bond ETFs
    provider.insert_prices("CORP", synthetic_series(52.0, 0.0001, 2_500_000.0));
    provider.insert_prices("TIPS", synthetic_series(108.0, -0.0001, 1_800_000.0));

    provider.insert_fundamentals(
        "ALPHA",
        FundamentalSnapshot {
            revenue_growth: Some(0.22),
            earnings_growth: Some(0.30),
            return_on_equity: Some(0.28),
            profit_margin: Some(0.21),
            peg_ratio: Some(1.3),
            ..Default::default()
        },
    );
    provider.insert_fundamentals(
        "BETA",
        FundamentalSnapshot {
            revenue_growth: Some(0.06),
            earnings_growth: Some(0.04),
            return_on_equity: Some(0.14),
            profit_margin: Some(0.09),
            peg_ratio: Some(2.4),
            ..Default::default()
        },
    );

    provider
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let provider = build_provider();

    let categories = vec![
        Category {
            name: "US Growth".to_string(),
            symbols: vec!["ALPHA".into(), "BETA".into(), "GAMMA".into()],
            target_allocation: 0.50,
            benchmark: "SPY".into(),
        },
        Category {
            name: "Fixed Income".to_string(),
            symbols: vec!["CORP".into(), "TIPS".into()],
            target_allocation: 0.30,
            benchmark: "AGG".into(),
        },
    ];

    let aggregator = CategoryAggregator::default();
    let report = aggregator.aggregate(&provider, &categories).await?;

    for category in &report.categories {
        println!(
            "{} (target {:.0}%, benchmark {})",
            category.name,
            category.target_allocation * 100.0,
            category.benchmark
        );
        for score in &category.scores {
            println!("  {:<8} {:>6.1}  {}", score.symbol, score.composite, score.rating);
        }
        if let Some(top) = &category.top_pick {
            println!("  top pick {top}, average {:.1}", category.avg_score);
        }

        let ranked: Vec<RankedEntry> = category.scores.iter().map(RankedEntry::from).collect();
        for weight in allocate(&ranked, CATEGORY_BUDGET) {
            println!("  weight {:<8} {:>6.2}%", weight.symbol, weight.weight * 100.0);
        }
        println!();
    }

    println!("Portfolio weighted momentum: {:.2}", report.weighted_momentum);
    Ok(())
}
