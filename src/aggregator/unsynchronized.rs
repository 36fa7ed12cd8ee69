//! Unsynchronized concurrent aggregation (anti-pattern)
//!
//! Spawns one thread per location. Each thread produces a reading and adds it
//! to a [`RacyAccumulator`] shared by all of them, with no mutual exclusion.
//! Concurrent updates can overwrite each other, so the reported total may be
//! less than the sum of the printed readings. Nothing here reports that; the
//! total is silently wrong.
//!
//! Use [`ChannelAggregator`](super::channel::ChannelAggregator) for a correct
//! concurrent total.

use super::accumulator::RacyAccumulator;
use super::Aggregator;
use crate::config::Strategy;
use crate::generator::ReadingSource;
use crate::model::{Location, Reading};
use crate::output::Report;
use std::thread;
use std::time::Duration;
use tracing::{debug, trace};

/// One thread per location, shared total without synchronization
#[derive(Debug, Default, Clone)]
pub struct UnsynchronizedAggregator {
    race_window: Duration,
}

impl UnsynchronizedAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pause for `window` between reading and writing the shared total
    pub fn with_race_window(window: Duration) -> Self {
        Self { race_window: window }
    }
}

impl Aggregator for UnsynchronizedAggregator {
    fn strategy(&self) -> Strategy {
        Strategy::Unsynchronized
    }

    fn aggregate(&self, locations: &[Location], source: &dyn ReadingSource, report: &dyn Report) -> Reading {
        let accumulator = RacyAccumulator::with_window(self.race_window);

        // The scope joins every thread before returning
        thread::scope(|scope| {
            for (task, location) in locations.iter().enumerate() {
                let accumulator = &accumulator;
                scope.spawn(move || {
                    let reading = source.produce();
                    accumulator.add(reading);
                    trace!(task, %location, reading, "reading added to shared total");
                    report.reading(location, reading);
                });
            }
        });

        let total = accumulator.value();
        debug!(tasks = locations.len(), total, "unsynchronized aggregation finished");
        report.total(total);
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::fixed::FixedReadings;
    use crate::model::locations;
    use crate::output::capture::{reading_sum, CaptureReport, Line};
    use std::time::Instant;

    fn task_names(count: usize) -> Vec<Location> {
        locations((0..count).map(|i| format!("loc-{}", i)))
    }

    #[test]
    fn test_every_location_reported() {
        let source = FixedReadings::new(vec![10.0, 20.0]);
        let report = CaptureReport::new();

        let total = UnsynchronizedAggregator::new().aggregate(&locations(["A", "B"]), &source, &report);
        let lines = report.take();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], Line::Total(total));
        assert_eq!(reading_sum(&lines), 30.0);
        assert!(total <= 30.0);
    }

    #[test]
    fn test_total_never_exceeds_true_sum() {
        let list = task_names(100);
        let source = FixedReadings::new(vec![1.0; 100]);
        let aggregator = UnsynchronizedAggregator::new();

        for _ in 0..5 {
            source.reset();
            let report = CaptureReport::new();
            let total = aggregator.aggregate(&list, &source, &report);

            assert_eq!(reading_sum(&report.take()), 100.0);
            assert!(total <= 100.0, "total {} exceeds true sum", total);
        }
    }

    #[test]
    fn test_lost_updates_under_load() {
        let list = task_names(200);
        let source = FixedReadings::new(vec![1.0; 200]);
        let aggregator = UnsynchronizedAggregator::with_race_window(Duration::from_millis(2));

        // Accidental correctness is possible on any single run, so only
        // require the discrepancy to show up in one of several attempts
        let lost = (0..5).any(|_| {
            source.reset();
            aggregator.aggregate(&list, &source, &CaptureReport::new()) < 200.0
        });

        assert!(lost, "expected at least one run with lost updates");
    }

    #[test]
    fn test_empty_locations() {
        let source = FixedReadings::new(vec![1.0]);
        let report = CaptureReport::new();

        let total = UnsynchronizedAggregator::new().aggregate(&[], &source, &report);
        assert_eq!(total, 0.0);
        assert_eq!(report.take(), vec![Line::Total(0.0)]);
    }

    #[test]
    fn test_runs_in_parallel() {
        let list = task_names(20);
        let source = FixedReadings::new(vec![1.0; 20]).with_delay(Duration::from_millis(100));

        let start = Instant::now();
        let report = CaptureReport::new();
        let total = UnsynchronizedAggregator::new().aggregate(&list, &source, &report);
        let elapsed = start.elapsed();

        assert!(total <= source.sum());
        assert_eq!(reading_sum(&report.take()), source.sum());
        // Sequentially this would take two seconds
        assert!(elapsed < Duration::from_millis(1500), "took {:?}", elapsed);
    }
}
