//! tempfan CLI entry point

use anyhow::{Context, Result};
use tempfan::config::{cli::Cli, toml::build_config, validator::validate_config};
use tempfan::coordinator;
use tempfan::generator::simulated::SimulatedGenerator;
use tempfan::logging::init_logging;
use tempfan::output::text::TextReport;
use tempfan::util::time::Timestamp;
use tracing::debug;

fn main() -> Result<()> {
    let start = Timestamp::now();

    let cli = Cli::parse_args();
    init_logging(cli.debug);
    cli.validate()?;

    let config = build_config(&cli)?;
    validate_config(&config).context("Configuration validation failed")?;
    debug!(?config, "configuration loaded");

    let generator = SimulatedGenerator::from_config(&config.generator);
    let report = TextReport::stdout();

    let summary = coordinator::run_from(start, &config, &generator, &report);
    debug!(
        strategy = %summary.strategy,
        total = summary.total,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "run complete"
    );

    Ok(())
}
