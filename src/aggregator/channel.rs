//! Channel-coordinated aggregation (fan-out/fan-in)
//!
//! # Design
//!
//! 1. One rendezvous channel (capacity zero) is created per run.
//! 2. One producer thread per location is spawned before collection starts.
//!    Each produces its reading, reports it immediately, then sends it.
//! 3. The calling thread is the only collector. It receives exactly one reading
//!    per location and folds it into the total it owns.
//! 4. The channel closes once every sender has been dropped.
//!
//! Only the collector touches the total, so no update can be lost regardless
//! of the order in which readings arrive. Wall-clock time approaches the
//! single longest generator delay.

use super::Aggregator;
use crate::config::Strategy;
use crate::generator::ReadingSource;
use crate::model::{Location, Reading};
use crate::output::Report;
use crossbeam::channel;
use std::thread;
use tracing::{debug, trace, warn};

/// Fan-out to one thread per location, fan-in through a channel
#[derive(Debug, Default, Clone, Copy)]
pub struct ChannelAggregator;

impl ChannelAggregator {
    pub fn new() -> Self {
        Self
    }
}

impl Aggregator for ChannelAggregator {
    fn strategy(&self) -> Strategy {
        Strategy::Channel
    }

    fn aggregate(&self, locations: &[Location], source: &dyn ReadingSource, report: &dyn Report) -> Reading {
        let expected = locations.len();
        let (tx, rx) = channel::bounded::<Reading>(0);

        let total = thread::scope(|scope| {
            for (task, location) in locations.iter().enumerate() {
                let tx = tx.clone();
                scope.spawn(move || {
                    let reading = source.produce();
                    report.reading(location, reading);
                    trace!(task, %location, reading, "handing off reading");
                    // The collector receives exactly one value per producer
                    if tx.send(reading).is_err() {
                        warn!(task, %location, "collector gone before hand-off");
                    }
                });
            }

            // Producers now hold the only senders
            drop(tx);

            let mut total = 0.0;
            for received in 0..expected {
                match rx.recv() {
                    Ok(reading) => total += reading,
                    Err(_) => {
                        warn!(received, expected, "hand-off channel closed early");
                        break;
                    }
                }
            }
            total
        });

        debug!(tasks = expected, total, "channel aggregation finished");
        report.total(total);
        total
    }
}
