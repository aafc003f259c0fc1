//! Score command implementation.

use crate::data;
use anyhow::Result;
use ronda_combine::CompositeScore;
use ronda_rotation::MomentumEngine;
use std::cmp::Ordering;
use std::path::Path;

/// Score the given symbols against a benchmark and print the ranking.
pub(crate) async fn show_scores(
    symbols: &[String],
    data_path: &Path,
    benchmark: &str,
    sector_benchmark: Option<&str>,
    format: &str,
) -> Result<()> {
    let provider = data::load_provider(data_path)?;
    let engine = MomentumEngine::default();

    let mut scores: Vec<CompositeScore> = Vec::with_capacity(symbols.len());
    let mut skipped: Vec<String> = Vec::new();
    for symbol in symbols {
        match engine
            .score_symbol(&provider, symbol, benchmark, sector_benchmark)
            .await
        {
            Ok(score) => scores.push(score),
            Err(e) => skipped.push(format!("{symbol}: {e}")),
        }
    }

    scores.sort_by(|a, b| {
        b.composite
            .partial_cmp(&a.composite)
            .unwrap_or(Ordering::Equal)
    });

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&scores)?);
        return Ok(());
    }

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Momentum Scores                          ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Benchmark: {benchmark}");
    if let Some(sector) = sector_benchmark {
        println!("Sector:    {sector}");
    }
    println!();

    println!(
        "{:<10} {:>9} {:>7} {:>7} {:>7} {:>7}  {}",
        "Symbol", "Composite", "Price", "Tech", "Fund", "Rel", "Rating"
    );
    println!("{}", "─".repeat(66));
    for score in &scores {
        println!(
            "{:<10} {:>9.1} {:>7.1} {:>7.1} {:>7.1} {:>7.1}  {}",
            score.symbol,
            score.composite,
            score.components.price,
            score.components.technical,
            score.components.fundamental,
            score.components.relative,
            score.rating
        );
    }

    if !skipped.is_empty() {
        println!();
        for line in &skipped {
            println!("Skipped {line}");
        }
    }

    println!();
    Ok(())
}
