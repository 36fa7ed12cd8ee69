//! Fixed reading source
//!
//! Hands out a predetermined sequence of readings, one per call, in call order.
//! Under concurrency the order in which tasks *receive* values is whatever
//! order they happen to call in; the multiset of values handed out is fixed.

use super::ReadingSource;
use crate::model::Reading;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Deterministic reading source
///
/// When the sequence is exhausted it wraps around to the first value. An empty
/// sequence yields `0.0`.
#[derive(Debug)]
pub struct FixedReadings {
    values: Vec<Reading>,
    cursor: AtomicUsize,
    delay: Duration,
}

impl FixedReadings {
    pub fn new(values: Vec<Reading>) -> Self {
        Self {
            values,
            cursor: AtomicUsize::new(0),
            delay: Duration::ZERO,
        }
    }

    /// Block for `delay` on every call before returning the value
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sum of the full sequence
    pub fn sum(&self) -> Reading {
        self.values.iter().sum()
    }

    /// Number of values handed out so far
    pub fn served(&self) -> usize {
        self.cursor.load(Ordering::Acquire)
    }

    /// Start over from the first value
    pub fn reset(&self) {
        self.cursor.store(0, Ordering::Release);
    }
}

impl ReadingSource for FixedReadings {
    fn produce(&self) -> Reading {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        if self.values.is_empty() {
            return 0.0;
        }

        let index = self.cursor.fetch_add(1, Ordering::AcqRel);
        self.values[index % self.values.len()]
    }
}
