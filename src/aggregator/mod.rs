//! Aggregation strategies
//!
//! Three interchangeable ways to fold one reading per location into a total:
//!
//! - **Sequential**: one location after another in the calling thread
//! - **Unsynchronized**: one thread per location, all writing a shared total
//!   with no mutual exclusion (kept on purpose to exhibit lost updates)
//! - **Channel**: one thread per location, readings handed through a
//!   rendezvous channel to a single collector that owns the total
//!
//! Every strategy emits one line per location and one total line through the
//! [`Report`] it is given.
//!
//! # Example
//!
//! ```
//! use tempfan::aggregator::{Aggregator, channel::ChannelAggregator};
//! use tempfan::generator::fixed::FixedReadings;
//! use tempfan::model::locations;
//! use tempfan::output::capture::CaptureReport;
//!
//! let source = FixedReadings::new(vec![10.0, 20.0]);
//! let report = CaptureReport::new();
//!
//! let total = ChannelAggregator::new().aggregate(&locations(["A", "B"]), &source, &report);
//! assert_eq!(total, 30.0);
//! ```

pub mod accumulator;
pub mod channel;
pub mod sequential;
pub mod unsynchronized;

use crate::config::{RunConfig, Strategy};
use crate::generator::ReadingSource;
use crate::model::{Location, Reading};
use crate::output::Report;
use std::time::Duration;

/// Aggregation strategy
///
/// `aggregate` blocks until every location has been read and the total line
/// has been emitted, then returns the total.
pub trait Aggregator: Send + Sync {
    /// Strategy implemented by this aggregator
    fn strategy(&self) -> Strategy;

    fn aggregate(&self, locations: &[Location], source: &dyn ReadingSource, report: &dyn Report) -> Reading;
}

/// Create the aggregator selected by the configuration
pub fn create_aggregator(config: &RunConfig) -> Box<dyn Aggregator> {
    match config.strategy {
        Strategy::Sequential => Box::new(sequential::SequentialAggregator::new()),
        Strategy::Unsynchronized => {
            let window = Duration::from_micros(config.unsynchronized.race_window_us);
            Box::new(unsynchronized::UnsynchronizedAggregator::with_race_window(window))
        }
        Strategy::Channel => Box::new(channel::ChannelAggregator::new()),
    }
}
