//! In-memory capture of emitted lines
//!
//! Used by tests and by callers embedding the aggregators. Lines are pushed to
//! a lock-free queue in the order threads emit them.

use super::{elapsed_line, reading_line, total_line, Report};
use crate::model::{Location, Reading};
use crossbeam::queue::SegQueue;
use std::time::Duration;

/// One captured event
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Reading { location: Location, reading: Reading },
    Total(Reading),
    Elapsed { label: String, elapsed: Duration },
}

impl Line {
    /// Render the event exactly as the text report would print it
    pub fn render(&self) -> String {
        match self {
            Line::Reading { location, reading } => reading_line(location, *reading),
            Line::Total(total) => total_line(*total),
            Line::Elapsed { label, elapsed } => elapsed_line(label, *elapsed),
        }
    }
}

/// Report that records lines instead of printing them
#[derive(Debug, Default)]
pub struct CaptureReport {
    lines: SegQueue<Line>,
}

impl CaptureReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain everything captured so far, in emission order
    pub fn take(&self) -> Vec<Line> {
        std::iter::from_fn(|| self.lines.pop()).collect()
    }

    /// Number of lines captured so far
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Report for CaptureReport {
    fn reading(&self, location: &Location, reading: Reading) {
        self.lines.push(Line::Reading {
            location: location.clone(),
            reading,
        });
    }

    fn total(&self, total: Reading) {
        self.lines.push(Line::Total(total));
    }

    fn elapsed(&self, label: &str, elapsed: Duration) {
        self.lines.push(Line::Elapsed {
            label: label.to_string(),
            elapsed,
        });
    }
}

/// Locations of the captured reading lines, in emission order
pub fn reading_locations(lines: &[Line]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| match line {
            Line::Reading { location, .. } => Some(location.to_string()),
            _ => None,
        })
        .collect()
}

/// Sum of the captured reading lines
pub fn reading_sum(lines: &[Line]) -> Reading {
    lines
        .iter()
        .filter_map(|line| match line {
            Line::Reading { reading, .. } => Some(*reading),
            _ => None,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_order() {
        let report = CaptureReport::new();
        report.reading(&Location::from("A"), 10.0);
        report.reading(&Location::from("B"), 20.0);
        report.total(30.0);

        let lines = report.take();
        assert_eq!(lines.len(), 3);
        assert_eq!(reading_locations(&lines), vec!["A", "B"]);
        assert_eq!(reading_sum(&lines), 30.0);
        assert_eq!(lines[2], Line::Total(30.0));
        assert!(report.is_empty());
    }

    #[test]
    fn test_render_matches_text_format() {
        let line = Line::Reading {
            location: Location::from("Chicago"),
            reading: 3.14159,
        };
        assert_eq!(line.render(), "The temperature in Chicago is 3.14 degrees.");
        assert_eq!(Line::Total(1.0).render(), "Total temperature: 1.00 degrees.");
    }
}
