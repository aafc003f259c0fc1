//! Rotate command implementation.

use crate::cmd::countries::CountrySpec;
use crate::data;
use anyhow::Result;
use ronda_rotation::{
    CountryRotationAnalyzer, RankedEntry, RotationSignalConfig, RotationSignalGenerator,
};
use std::collections::HashSet;
use std::path::Path;

/// Rank the configured countries and print rotation signals against the
/// current holdings.
pub(crate) async fn show_signals(
    data_path: &Path,
    config_path: &Path,
    holdings: &[String],
    sell_threshold: f64,
    top_n: usize,
    buy_cutoff: f64,
    format: &str,
) -> Result<()> {
    let provider = data::load_provider(data_path)?;
    let spec: CountrySpec = data::load_config(config_path)?;

    let analyzer = CountryRotationAnalyzer::new(spec.config)?;
    let ranking = analyzer.analyze(&provider, &spec.countries).await;
    let ranked: Vec<RankedEntry> = ranking.iter().map(RankedEntry::from).collect();

    let held: HashSet<String> = holdings.iter().cloned().collect();
    let generator = RotationSignalGenerator::new(RotationSignalConfig {
        sell_threshold,
        top_n,
        buy_cutoff,
    });
    let signals = generator.generate(&held, &ranked);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&signals)?);
        return Ok(());
    }

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Rotation Signals                           ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!(
        "Holdings: {}",
        if holdings.is_empty() {
            "(none)".to_string()
        } else {
            holdings.join(", ")
        }
    );
    println!(
        "Rules: sell below {sell_threshold:.0}, buy top {top_n} above {buy_cutoff:.0}\n"
    );

    if signals.is_empty() {
        println!("No signals, holdings are aligned with the ranking.");
    } else {
        for signal in &signals {
            println!(
                "{:<5} {:<8} {:>6.1} ({})  {}",
                signal.action, signal.symbol, signal.score, signal.rating, signal.reason
            );
        }
    }

    println!();
    Ok(())
}
