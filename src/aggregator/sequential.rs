//! Sequential aggregation
//!
//! Reads every location in input order from the calling thread. Wall-clock time
//! is the sum of all generator delays.

use super::Aggregator;
use crate::config::Strategy;
use crate::generator::ReadingSource;
use crate::model::{Location, Reading};
use crate::output::Report;
use tracing::debug;

/// In-order, single-threaded aggregator
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialAggregator;

impl SequentialAggregator {
    pub fn new() -> Self {
        Self
    }
}

impl Aggregator for SequentialAggregator {
    fn strategy(&self) -> Strategy {
        Strategy::Sequential
    }

    fn aggregate(&self, locations: &[Location], source: &dyn ReadingSource, report: &dyn Report) -> Reading {
        let mut total = 0.0;

        for location in locations {
            let reading = source.produce();
            total += reading;
            report.reading(location, reading);
        }

        debug!(locations = locations.len(), total, "sequential aggregation finished");
        report.total(total);
        total
    }
}
