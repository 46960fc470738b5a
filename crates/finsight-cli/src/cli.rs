//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Finsight - Spending analysis and weekly budget advisor
#[derive(Parser)]
#[command(name = "finsight")]
#[command(about = "Analyze spending and suggest a weekly budget", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Policy file overriding the built-in thresholds and baselines
    #[arg(long, global = true)]
    pub policy: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a transaction list and print the spending report
    Analyze {
        /// Transaction file to analyze (.csv or .json)
        #[arg(short, long, conflicts_with = "sample")]
        file: Option<PathBuf>,

        /// Analyze the built-in demo dataset instead of a file
        #[arg(long)]
        sample: bool,

        /// Print the report as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Print the built-in demo transaction dataset
    Sample {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective policy (thresholds and weekly baselines)
    Policy,
}
