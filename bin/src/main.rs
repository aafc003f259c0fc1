//! Ronda CLI binary.
//!
//! Provides command-line interface for the Ronda momentum framework.

mod cmd;
mod data;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "ronda")]
#[command(about = "Systematic momentum scoring and rotation signals", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the momentum score components
    Components {
        /// Show detailed information
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score symbols against a benchmark
    Score {
        /// Ticker symbols
        #[arg(value_delimiter = ',')]
        symbols: Vec<String>,

        /// Path to the JSON dataset
        #[arg(short, long)]
        data: PathBuf,

        /// Primary benchmark symbol
        #[arg(short, long, default_value = "SPY")]
        benchmark: String,

        /// Optional sector benchmark symbol
        #[arg(long)]
        sector_benchmark: Option<String>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Aggregate category scores into a portfolio view
    Categories {
        /// Path to the JSON dataset
        #[arg(short, long)]
        data: PathBuf,

        /// Path to the category configuration (JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Optional holdings map (JSON, symbol -> share count)
        #[arg(long)]
        holdings: Option<PathBuf>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Rank country ETFs against dual benchmarks
    Countries {
        /// Path to the JSON dataset
        #[arg(short, long)]
        data: PathBuf,

        /// Path to the country rotation configuration (JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Generate BUY/SELL rotation signals from a country ranking
    Rotate {
        /// Path to the JSON dataset
        #[arg(short, long)]
        data: PathBuf,

        /// Path to the country rotation configuration (JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Currently held symbols
        #[arg(long, value_delimiter = ',')]
        holdings: Vec<String>,

        /// Score below which a held symbol is sold
        #[arg(long, default_value = "15")]
        sell_threshold: f64,

        /// Number of top-ranked candidates eligible to buy
        #[arg(long, default_value = "3")]
        top_n: usize,

        /// Score a candidate must exceed to be bought
        #[arg(long, default_value = "60")]
        buy_cutoff: f64,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Components { verbose } => cmd::components::list(verbose),
        Commands::Score {
            symbols,
            data,
            benchmark,
            sector_benchmark,
            format,
        } => {
            cmd::score::show_scores(
                &symbols,
                &data,
                &benchmark,
                sector_benchmark.as_deref(),
                &format,
            )
            .await
        }
        Commands::Categories {
            data,
            config,
            holdings,
            format,
        } => cmd::categories::show_report(&data, &config, holdings.as_deref(), &format).await,
        Commands::Countries { data, config, format } => {
            cmd::countries::show_ranking(&data, &config, &format).await
        }
        Commands::Rotate {
            data,
            config,
            holdings,
            sell_threshold,
            top_n,
            buy_cutoff,
            format,
        } => {
            cmd::rotate::show_signals(
                &data,
                &config,
                &holdings,
                sell_threshold,
                top_n,
                buy_cutoff,
                &format,
            )
            .await
        }
    }
}
