//! Reading POI records out of delimited text sources.
//!
//! The index consumes a plain `Vec<Poi>`; file formats, header rows, and
//! malformed records all stay on this side of the boundary. A malformed
//! record aborts the load; partially parsed POIs never reach the index.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, info};

use crate::error::Result;
use crate::poi::Poi;

/// Load POI records from a comma-delimited file with an
/// `id,name,type,lat,lon` header row.
pub fn load_pois(path: impl AsRef<Path>) -> Result<Vec<Poi>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let pois = read_pois(file)?;
    info!("loaded {} POIs from {}", pois.len(), path.display());
    Ok(pois)
}

/// Read POI records from any CSV source with the standard header row.
pub fn read_pois(reader: impl Read) -> Result<Vec<Poi>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut pois = Vec::new();
    for record in csv_reader.deserialize() {
        let poi: Poi = record?;
        pois.push(poi);
    }
    debug!("parsed {} records", pois.len());
    Ok(pois)
}
