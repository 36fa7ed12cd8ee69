//! TOML configuration file parsing

use super::*;
use crate::config::cli::Cli;
use crate::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<RunConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<RunConfig> {
    let config: RunConfig = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: RunConfig) -> RunConfig {
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }

    if !cli.locations.is_empty() {
        config.locations = locations(cli.locations.iter().cloned());
    }

    if let Some(time_unit_ms) = cli.time_unit_ms {
        config.generator.time_unit_ms = time_unit_ms;
    }

    if let Some(race_window_us) = cli.race_window_us {
        config.unsynchronized.race_window_us = race_window_us;
    }

    config
}

/// Build the run configuration from CLI arguments and an optional config file
pub fn build_config(cli: &Cli) -> Result<RunConfig> {
    let base = match &cli.config {
        Some(path) => parse_toml_file(path)?,
        None => RunConfig::default(),
    };

    Ok(merge_cli_with_config(cli, base))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_parse_empty_toml_uses_defaults() {
        let config = parse_toml_string("").unwrap();
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
locations = ["A", "B"]
strategy = "sequential"

[generator]
time_unit_ms = 0
max_reading = 10.0

[unsynchronized]
race_window_us = 25

[output]
elapsed_label = "Elapsed"
"#;

        let config = parse_toml_string(toml_str).unwrap();
        assert_eq!(config.locations, locations(["A", "B"]));
        assert_eq!(config.strategy, Strategy::Sequential);
        assert_eq!(config.generator.time_unit_ms, 0);
        assert_eq!(config.generator.max_delay_units, 4);
        assert_eq!(config.generator.max_reading, 10.0);
        assert_eq!(config.unsynchronized.race_window_us, 25);
        assert_eq!(config.output.elapsed_label.as_deref(), Some("Elapsed"));
    }

    #[test]
    fn test_parse_invalid_strategy() {
        assert!(parse_toml_string(r#"strategy = "locked""#).is_err());
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "strategy = \"sequential\"").unwrap();
        writeln!(file, "locations = [\"X\"]").unwrap();
        writeln!(file, "[generator]").unwrap();
        writeln!(file, "time_unit_ms = 7").unwrap();

        let path = file.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["tempfan", "--config", path, "--strategy", "channel"]).unwrap();

        let config = build_config(&cli).unwrap();
        assert_eq!(config.strategy, Strategy::Channel);
        assert_eq!(config.locations, locations(["X"]));
        assert_eq!(config.generator.time_unit_ms, 7);
    }

    #[test]
    fn test_no_arguments_ignore_environment() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "strategy = \"unsynchronized\"").unwrap();
        writeln!(file, "locations = []").unwrap();

        std::env::set_var("TEMPFAN_CONFIG", file.path());
        let cli = Cli::try_parse_from(["tempfan"]).unwrap();
        let config = build_config(&cli);
        std::env::remove_var("TEMPFAN_CONFIG");

        assert!(cli.config.is_none());
        assert_eq!(config.unwrap(), RunConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let result = parse_toml_file(Path::new("/nonexistent/tempfan.toml"));
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Failed to read config file"));
    }
}
