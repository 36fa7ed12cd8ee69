//! tempfan - aggregate simulated readings three ways
//!
//! Each run folds one simulated temperature reading per location into a total,
//! using one of three interchangeable strategies that share the same generator.
//!
//! # Architecture
//!
//! - **Generator**: random delay, then a random reading; one RNG per call
//! - **Sequential**: in-order, single-threaded baseline
//! - **Unsynchronized**: one thread per location, racy shared total (anti-pattern)
//! - **Channel**: one thread per location, fan-in through a rendezvous channel
//! - **Coordinator**: selects the strategy, times the run, reports elapsed time

pub mod aggregator;
pub mod config;
pub mod coordinator;
pub mod generator;
pub mod logging;
pub mod model;
pub mod output;
pub mod util;

// Re-export commonly used types
pub use aggregator::Aggregator;
pub use config::{RunConfig, Strategy};
pub use generator::ReadingSource;
pub use model::{Location, Reading};

/// Result type used throughout tempfan
pub type Result<T> = anyhow::Result<T>;
