//! Output formatting and sinks
//!
//! Aggregators emit human-readable lines through a [`Report`]. Concurrent
//! strategies call the report from many threads at once, so implementations
//! must be `Sync`; line order across threads is unspecified.

pub mod capture;
pub mod text;

use crate::model::{Location, Reading};
use std::time::Duration;

/// Sink for the lines a run emits
pub trait Report: Sync {
    /// One reading for one location
    fn reading(&self, location: &Location, reading: Reading);

    /// Final total of a strategy
    fn total(&self, total: Reading);

    /// Wall-clock time of the whole run
    fn elapsed(&self, label: &str, elapsed: Duration);
}

/// `The temperature in <location> is <reading> degrees.`
pub fn reading_line(location: &Location, reading: Reading) -> String {
    format!("The temperature in {} is {:.2} degrees.", location, reading)
}

/// `Total temperature: <total> degrees.`
pub fn total_line(total: Reading) -> String {
    format!("Total temperature: {:.2} degrees.", total)
}

/// `<label>: <elapsed>`
pub fn elapsed_line(label: &str, elapsed: Duration) -> String {
    format!("{}: {}", label, crate::util::time::format_duration(elapsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_line() {
        let line = reading_line(&Location::from("New York"), 12.345);
        assert_eq!(line, "The temperature in New York is 12.35 degrees.");
    }

    #[test]
    fn test_total_line() {
        assert_eq!(total_line(30.0), "Total temperature: 30.00 degrees.");
        assert_eq!(total_line(0.0), "Total temperature: 0.00 degrees.");
    }

    #[test]
    fn test_elapsed_line() {
        let line = elapsed_line("With threads and channel", Duration::from_millis(4010));
        assert_eq!(line, "With threads and channel: 4.01s");
    }
}
