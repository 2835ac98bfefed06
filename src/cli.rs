use clap::Parser;

use crate::application::dto::OutputFormat;

/// Audit an archive for NBS binary packages and compute the removable set
#[derive(Parser, Debug)]
#[command(name = "nbs-audit")]
#[command(version)]
#[command(
    about = "Find binary packages no longer built from source and compute which of them are safely removable",
    long_about = None
)]
pub struct Args {
    /// Directory of per-package reverse-dependency listing files
    #[arg(short, long)]
    pub listings: String,

    /// Local archive mirror root (the directory containing dists/)
    #[arg(short, long)]
    pub archive: Option<String>,

    /// Suite to audit (e.g. noble, unstable)
    #[arg(short, long)]
    pub suite: Option<String>,

    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// CSV file receiving one time-series summary line per run
    #[arg(long)]
    pub history: Option<String>,

    /// Path to a config file (defaults to nbs-audit.toml in the working directory)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
