//! CLI argument parsing using clap

use super::Strategy;
use clap::Parser;
use std::path::PathBuf;

/// tempfan - sequential, racy and channel-coordinated aggregation
#[derive(Parser, Debug)]
#[command(name = "tempfan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Aggregation strategy (default: channel)
    #[arg(long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Location to aggregate; repeat to build the list (replaces the default cities)
    #[arg(short = 'l', long = "location", value_name = "NAME")]
    pub locations: Vec<String>,

    /// Length of one simulated delay unit in milliseconds (default: 1000)
    #[arg(long)]
    pub time_unit_ms: Option<u64>,

    /// Pause between read and write of the shared total, unsynchronized strategy only
    #[arg(long)]
    pub race_window_us: Option<u64>,

    /// TOML configuration file (CLI arguments take precedence)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(name) = self.locations.iter().find(|name| name.trim().is_empty()) {
            anyhow::bail!("location names must not be blank, got {:?}", name);
        }

        Ok(())
    }
}
