//! Categories command implementation.

use crate::data;
use anyhow::Result;
use ronda_rotation::{Category, CategoryAggregator};
use std::collections::HashMap;
use std::path::Path;

/// Aggregate category scores and print the portfolio view.
pub(crate) async fn show_report(
    data_path: &Path,
    config_path: &Path,
    holdings_path: Option<&Path>,
    format: &str,
) -> Result<()> {
    let provider = data::load_provider(data_path)?;
    let categories: Vec<Category> = data::load_config(config_path)?;
    let aggregator = CategoryAggregator::default();

    let report = aggregator.aggregate(&provider, &categories).await?;

    let valuations = match holdings_path {
        Some(path) => {
            let holdings: HashMap<String, f64> = data::load_config(path)?;
            Some(
                aggregator
                    .value_holdings(&provider, &categories, &holdings)
                    .await?,
            )
        }
        None => None,
    };

    if format == "json" {
        let payload = serde_json::json!({
            "report": report,
            "valuations": valuations,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Category Momentum                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    for category in &report.categories {
        println!(
            "{} (target {:.0}%, benchmark {})",
            category.name,
            category.target_allocation * 100.0,
            category.benchmark
        );
        println!("{}", "─".repeat(60));

        if category.scores.is_empty() {
            println!("  (no scoreable members)");
        }
        for score in &category.scores {
            println!(
                "  {:<10} {:>6.1}  {}",
                score.symbol, score.composite, score.rating
            );
        }
        if let Some(top) = &category.top_pick {
            println!("  Top pick: {top}   Average: {:.1}", category.avg_score);
        } else {
            println!("  Average: {:.1}", category.avg_score);
        }
        println!();
    }

    println!(
        "Portfolio weighted momentum: {:.2}",
        report.weighted_momentum
    );

    if let Some(valuations) = valuations {
        println!();
        println!(
            "{:<28} {:>10} {:>10} {:>14}",
            "Category", "Target", "Current", "Market Value"
        );
        println!("{}", "─".repeat(66));
        for v in valuations {
            println!(
                "{:<28} {:>9.1}% {:>9.1}% {:>14.2}",
                v.name,
                v.target_allocation * 100.0,
                v.current_weight * 100.0,
                v.market_value
            );
        }
    }

    println!();
    Ok(())
}
