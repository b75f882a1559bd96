//! The point-of-interest record indexed by this crate.

use serde::{Deserialize, Serialize};

/// A named, categorized geographic location.
///
/// Records are immutable once loaded. The text fields are dynamically
/// sized; any length bound belongs to the data loader, not the index.
///
/// The serde field name for [`category`](Poi::category) is `type`, matching
/// the column name in the delimited data sources this crate reads and the
/// key emitted in JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    /// Stable identifier from the data source.
    pub id: u64,
    /// Display name, free text.
    pub name: String,
    /// Category label, free text (`"library"`, `"food"`, ...).
    #[serde(rename = "type")]
    pub category: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl Poi {
    /// Create a new POI record.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        category: impl Into<String>,
        lat: f64,
        lon: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            lat,
            lon,
        }
    }
}
