//! Components command implementation.

use anyhow::Result;
use ronda_signals::available_components;

/// List the momentum score components.
pub(crate) fn list(verbose: bool) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Momentum Components                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    for info in available_components() {
        println!("{:<24} {:?}", info.name, info.kind);
        if verbose {
            println!("  {}", info.description);
            if info.typical_lookback > 0 {
                println!("  Lookback: {} trading days", info.typical_lookback);
            }
            if info.requires_fundamentals {
                println!("  Requires fundamental data");
            }
            if info.requires_benchmark {
                println!("  Requires a benchmark series");
            }
            println!();
        }
    }

    if !verbose {
        println!("\nUse --verbose for lookbacks and data requirements.");
    }
    println!();
    Ok(())
}
