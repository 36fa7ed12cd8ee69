//! Reading sources
//!
//! A reading source is the leaf dependency shared by every aggregation
//! strategy: each call produces one reading, possibly after blocking the
//! calling thread for a while to simulate slow, independent work.
//!
//! # Sources
//!
//! - **Simulated**: random delay, then a uniform random reading (the default)
//! - **Fixed**: hands out a predetermined sequence of readings (tests, replays)
//!
//! # Example
//!
//! ```
//! use tempfan::generator::{ReadingSource, fixed::FixedReadings};
//!
//! let source = FixedReadings::new(vec![10.0, 20.0]);
//! assert_eq!(source.produce(), 10.0);
//! assert_eq!(source.produce(), 20.0);
//! ```

use crate::model::Reading;

/// Source of readings for the aggregators
///
/// # Thread Safety
///
/// Sources are shared by reference across every task of a concurrent run, so
/// they must be `Send + Sync`. Implementations must not keep mutable random
/// state shared between calls; each call path owns whatever RNG it needs.
pub trait ReadingSource: Send + Sync {
    /// Produce the next reading
    ///
    /// May block the calling thread. Never fails.
    fn produce(&self) -> Reading;
}

pub mod fixed;
pub mod simulated;
