//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.
//! With no CLI arguments and no config file the defaults reproduce the
//! canonical run: channel strategy, five cities, one-second delay unit.

pub mod cli;
pub mod toml;
pub mod validator;

use crate::generator::simulated;
use crate::model::{locations, Location};
use serde::Deserialize;
use std::fmt;

/// Cities aggregated when no location list is given
pub const DEFAULT_LOCATIONS: [&str; 5] = ["New York", "Los Angeles", "Chicago", "Houston", "Phoenix"];

/// Complete run configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RunConfig {
    /// Ordered location list
    #[serde(default = "default_locations")]
    pub locations: Vec<Location>,
    /// Aggregation strategy
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub unsynchronized: UnsynchronizedConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            locations: default_locations(),
            strategy: Strategy::default(),
            generator: GeneratorConfig::default(),
            unsynchronized: UnsynchronizedConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

fn default_locations() -> Vec<Location> {
    locations(DEFAULT_LOCATIONS)
}

/// Aggregation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// One location after another in the calling thread
    Sequential,
    /// One thread per location, shared total updated without synchronization
    Unsynchronized,
    /// One thread per location, readings handed to a single collector
    #[default]
    Channel,
}

impl Strategy {
    /// Label of the elapsed-time line for this strategy
    pub fn elapsed_label(&self) -> &'static str {
        match self {
            Strategy::Sequential => "Without concurrency",
            Strategy::Unsynchronized => "With unsynchronized threads",
            Strategy::Channel => "With threads and channel",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Sequential => write!(f, "sequential"),
            Strategy::Unsynchronized => write!(f, "unsynchronized"),
            Strategy::Channel => write!(f, "channel"),
        }
    }
}

/// Simulated generator settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratorConfig {
    /// Length of one delay unit in milliseconds
    #[serde(default = "default_time_unit_ms")]
    pub time_unit_ms: u64,
    /// Largest delay in units (inclusive)
    #[serde(default = "default_max_delay_units")]
    pub max_delay_units: u32,
    /// Upper bound on readings (exclusive)
    #[serde(default = "default_max_reading")]
    pub max_reading: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            time_unit_ms: default_time_unit_ms(),
            max_delay_units: default_max_delay_units(),
            max_reading: default_max_reading(),
        }
    }
}

fn default_time_unit_ms() -> u64 {
    simulated::DEFAULT_TIME_UNIT.as_millis() as u64
}

fn default_max_delay_units() -> u32 {
    simulated::DEFAULT_MAX_DELAY_UNITS
}

fn default_max_reading() -> f64 {
    simulated::DEFAULT_MAX_READING
}

/// Settings for the unsynchronized strategy
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UnsynchronizedConfig {
    /// Pause between reading and writing the shared total, in microseconds
    ///
    /// Zero only yields to the scheduler.
    #[serde(default)]
    pub race_window_us: u64,
}

/// Output settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OutputConfig {
    /// Replaces the strategy's elapsed-time label
    #[serde(default)]
    pub elapsed_label: Option<String>,
}

impl RunConfig {
    /// Label for the final elapsed-time line
    pub fn elapsed_label(&self) -> &str {
        self.output
            .elapsed_label
            .as_deref()
            .unwrap_or_else(|| self.strategy.elapsed_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();
        assert_eq!(config.strategy, Strategy::Channel);
        assert_eq!(config.locations.len(), 5);
        assert_eq!(config.locations[0].as_str(), "New York");
        assert_eq!(config.generator.time_unit_ms, 1000);
        assert_eq!(config.generator.max_delay_units, 4);
        assert_eq!(config.generator.max_reading, 40.0);
    }

    #[test]
    fn test_elapsed_label_per_strategy() {
        let mut config = RunConfig::default();
        assert_eq!(config.elapsed_label(), "With threads and channel");

        config.strategy = Strategy::Sequential;
        assert_eq!(config.elapsed_label(), "Without concurrency");

        config.output.elapsed_label = Some("Custom".to_string());
        assert_eq!(config.elapsed_label(), "Custom");
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(Strategy::Unsynchronized.to_string(), "unsynchronized");
        assert_eq!(Strategy::Channel.to_string(), "channel");
    }
}
