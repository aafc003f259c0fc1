//! Countries command implementation.

use crate::data;
use anyhow::Result;
use ronda_rotation::{CountryRotationAnalyzer, CountryRotationConfig};
use serde::Deserialize;
use std::path::Path;

/// Country rotation run configuration: the analyzer config plus the
/// universe of country ETFs to rank.
#[derive(Debug, Deserialize)]
pub(crate) struct CountrySpec {
    #[serde(flatten)]
    pub(crate) config: CountryRotationConfig,
    pub(crate) countries: Vec<String>,
}

/// Rank country ETFs and print the rotation table.
pub(crate) async fn show_ranking(data_path: &Path, config_path: &Path, format: &str) -> Result<()> {
    let provider = data::load_provider(data_path)?;
    let spec: CountrySpec = data::load_config(config_path)?;

    let analyzer = CountryRotationAnalyzer::new(spec.config)?;
    let ranking = analyzer.analyze(&provider, &spec.countries).await;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&ranking)?);
        return Ok(());
    }

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Country Rotation                          ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Benchmarks: {} (domestic), {} (global)\n",
        analyzer.config().primary_benchmark,
        analyzer.config().global_benchmark
    );

    println!(
        "{:<8} {:>9} {:>8} {:>8} {:>6} {:>6} {:>5}  {}",
        "Country", "Composite", "vs Dom", "vs Glob", "Tech", "Price", "Vol", "Rating"
    );
    println!("{}", "─".repeat(72));
    for score in &ranking {
        println!(
            "{:<8} {:>9.1} {:>7.1}% {:>7.1}% {:>6.2} {:>6.2} {:>5.2}  {}",
            score.symbol,
            score.composite,
            score.relative_vs_primary * 100.0,
            score.relative_vs_global * 100.0,
            score.technical,
            score.price_momentum,
            score.volume_score,
            score.rating
        );
    }

    println!();
    for score in &ranking {
        println!("{:<8} {}", score.symbol, score.description);
    }

    println!();
    Ok(())
}
