//! Place - a named location with optional coordinates

use serde::{Deserialize, Serialize};

/// A resolved destination or pickup location
///
/// Coordinates are absent when the fixed catalog resolver is in use; the
/// discovery ranking treats missing coordinates as infinitely far away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Resolver-assigned identifier (e.g. a place ID or a slug)
    pub id: Option<String>,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
}

impl Place {
    /// Create a catalog entry with a name only
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            latitude: None,
            longitude: None,
            address: None,
        }
    }

    /// Coordinate pair, if both components are present
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }

    /// Airport heuristic: name or address contains "airport" (any case)
    pub fn looks_like_airport(&self) -> bool {
        let in_name = self.name.to_lowercase().contains("airport");
        let in_addr = self
            .address
            .as_deref()
            .is_some_and(|a| a.to_lowercase().contains("airport"));
        in_name || in_addr
    }
}
