//! Unsynchronized shared accumulator
//!
//! A floating-point total stored in an `AtomicU64` (as raw bits) whose `add`
//! is deliberately NOT atomic: it loads the current value, computes the new
//! one, and stores it in a separate step. Two threads that load the same value
//! both store their own sum and one of the two additions is lost.
//!
//! The atomic cell keeps every individual load and store well defined; only the
//! read-modify-write as a whole is racy. This is the anti-pattern, do not reuse
//! it where a correct total matters.
//!
//! # Lost updates only go down
//!
//! With non-negative readings a lost update drops a contribution and never
//! duplicates one, so the final value is at most the true sum.

use crate::model::Reading;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Shared total with a racy read-modify-write
#[derive(Debug)]
pub struct RacyAccumulator {
    bits: AtomicU64,
    window: Duration,
}

impl RacyAccumulator {
    pub fn new() -> Self {
        Self::with_window(Duration::ZERO)
    }

    /// Pause for `window` between the load and the store
    ///
    /// A zero window yields to the scheduler instead.
    pub fn with_window(window: Duration) -> Self {
        Self {
            bits: AtomicU64::new(0.0f64.to_bits()),
            window,
        }
    }

    /// `total += reading`, without mutual exclusion
    pub fn add(&self, reading: Reading) {
        let current = f64::from_bits(self.bits.load(Ordering::Relaxed));

        if self.window.is_zero() {
            std::thread::yield_now();
        } else {
            std::thread::sleep(self.window);
        }

        self.bits.store((current + reading).to_bits(), Ordering::Relaxed);
    }

    pub fn value(&self) -> Reading {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

impl Default for RacyAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
