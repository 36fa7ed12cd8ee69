//! Human-readable text output

use super::{elapsed_line, reading_line, total_line, Report};
use crate::model::{Location, Reading};
use std::time::Duration;

/// Print every line to stdout
///
/// `println!` takes the stdout lock per call, so concurrent lines never tear;
/// they only interleave.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextReport;

impl TextReport {
    pub fn stdout() -> Self {
        Self
    }
}

impl Report for TextReport {
    fn reading(&self, location: &Location, reading: Reading) {
        println!("{}", reading_line(location, reading));
    }

    fn total(&self, total: Reading) {
        println!("{}", total_line(total));
    }

    fn elapsed(&self, label: &str, elapsed: Duration) {
        println!("{}", elapsed_line(label, elapsed));
    }
}
