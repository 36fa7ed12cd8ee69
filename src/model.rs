//! Core data types shared by every aggregation strategy

use serde::Deserialize;
use std::fmt;

/// One simulated temperature value for one location
pub type Reading = f64;

/// Opaque location label
///
/// A location has no identity beyond its text. Lists of locations are supplied
/// once per run and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Location {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Build a location list from plain names
pub fn locations<I, S>(names: I) -> Vec<Location>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Location::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_display() {
        let location = Location::from("New York");
        assert_eq!(location.to_string(), "New York");
        assert_eq!(location.as_str(), "New York");
    }

    #[test]
    fn test_locations_preserves_order() {
        let list = locations(["B", "A", "C"]);
        let names: Vec<&str> = list.iter().map(Location::as_str).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }
}
