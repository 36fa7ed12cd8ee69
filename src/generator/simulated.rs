//! Simulated temperature generator
//!
//! Blocks for a random whole number of time units, then returns a reading drawn
//! uniformly from `[0.0, max_reading)`.
//!
//! # RNG ownership
//!
//! Every call to [`produce`](ReadingSource::produce) seeds a fresh xoshiro256++
//! instance from the wall clock, so concurrent callers never share generator
//! state. The generator itself only holds immutable settings.

use super::ReadingSource;
use crate::config::GeneratorConfig;
use crate::model::Reading;
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Default length of one delay unit
pub const DEFAULT_TIME_UNIT: Duration = Duration::from_secs(1);

/// Default upper bound (inclusive) on the number of delay units
pub const DEFAULT_MAX_DELAY_UNITS: u32 = 4;

/// Default upper bound (exclusive) on readings
pub const DEFAULT_MAX_READING: Reading = 40.0;

/// Random-delay, random-value generator
#[derive(Debug, Clone)]
pub struct SimulatedGenerator {
    time_unit: Duration,
    max_delay_units: u32,
    max_reading: Reading,
}

impl SimulatedGenerator {
    /// Create a generator with the default one-second time unit
    pub fn new() -> Self {
        Self {
            time_unit: DEFAULT_TIME_UNIT,
            max_delay_units: DEFAULT_MAX_DELAY_UNITS,
            max_reading: DEFAULT_MAX_READING,
        }
    }

    /// Create a generator from configuration
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            time_unit: Duration::from_millis(config.time_unit_ms),
            max_delay_units: config.max_delay_units,
            max_reading: config.max_reading,
        }
    }

    /// Override the length of one delay unit
    ///
    /// `Duration::ZERO` turns the delay off, which keeps tests fast.
    pub fn with_time_unit(mut self, time_unit: Duration) -> Self {
        self.time_unit = time_unit;
        self
    }

    /// Draw a delay (in units) and a reading from `rng`
    ///
    /// The delay is drawn first, matching the order `produce` uses.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> (u32, Reading) {
        let units = rng.gen_range(0..=self.max_delay_units);
        let reading = rng.gen::<f64>() * self.max_reading;
        (units, reading)
    }
}

impl Default for SimulatedGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingSource for SimulatedGenerator {
    fn produce(&self) -> Reading {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(clock_seed());
        let (units, reading) = self.draw(&mut rng);

        let delay = self.time_unit * units;
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }

        tracing::trace!(units, reading, "simulated reading");
        reading
    }
}

/// Seed taken from the current time in nanoseconds
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
