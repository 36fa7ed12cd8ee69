//! Coordinator module
//!
//! Runs one aggregation pass: picks the configured strategy, hands it the
//! locations, source and report, then emits the elapsed-time line.

use crate::aggregator::create_aggregator;
use crate::config::{RunConfig, Strategy};
use crate::generator::ReadingSource;
use crate::model::Reading;
use crate::output::Report;
use crate::util::time::Timestamp;
use std::time::Duration;
use tracing::debug;

/// Outcome of one run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub strategy: Strategy,
    pub locations: usize,
    pub total: Reading,
    pub elapsed: Duration,
}

/// Run the configured strategy, timing from now
pub fn run(config: &RunConfig, source: &dyn ReadingSource, report: &dyn Report) -> RunSummary {
    run_from(Timestamp::now(), config, source, report)
}

/// Run the configured strategy, timing from `start`
///
/// `main` passes its own start time so the elapsed line covers the whole
/// process, setup included.
pub fn run_from(
    start: Timestamp,
    config: &RunConfig,
    source: &dyn ReadingSource,
    report: &dyn Report,
) -> RunSummary {
    let aggregator = create_aggregator(config);
    debug!(
        strategy = %aggregator.strategy(),
        locations = config.locations.len(),
        cpus = num_cpus::get(),
        "starting aggregation"
    );

    let total = aggregator.aggregate(&config.locations, source, report);
    let elapsed = start.elapsed();
    report.elapsed(config.elapsed_label(), elapsed);

    RunSummary {
        strategy: aggregator.strategy(),
        locations: config.locations.len(),
        total,
        elapsed,
    }
}
