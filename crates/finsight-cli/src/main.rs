//! Finsight CLI - Spending analysis and budget advisor
//!
//! Usage:
//!   finsight analyze --file txs.csv   Analyze a transaction file
//!   finsight analyze --sample         Analyze the built-in demo dataset
//!   finsight sample                   Print the demo dataset
//!   finsight policy                   Show thresholds and weekly baselines

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let policy = commands::load_policy(cli.policy.as_deref())?;

    match cli.command {
        Commands::Analyze { file, sample, json } => {
            commands::cmd_analyze(policy, file.as_deref(), sample, json)
        }
        Commands::Sample { json } => commands::cmd_sample(json),
        Commands::Policy => commands::cmd_policy(&policy),
    }
}
