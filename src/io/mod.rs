//! File and byte-level reading and writing of GeoJSON feature collections.
//!
//! Conversion between `serde_json::Value` and the typed data model lives in
//! `geojson.rs` as methods on `FeatureCollection`.

mod geojson;

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::feature::FeatureCollection;

/// Parse a GeoJSON FeatureCollection from raw bytes.
pub fn parse_collection(bytes: &[u8]) -> Result<FeatureCollection> {
    let value: serde_json::Value = serde_json::from_slice(bytes)
        .context("Failed to parse GeoJSON bytes")?;
    FeatureCollection::from_geojson(&value)
}

/// Read a GeoJSON FeatureCollection from a file.
pub fn read_collection(path: &Path) -> Result<FeatureCollection> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_collection(&bytes)
        .with_context(|| format!("Invalid feature collection in {}", path.display()))
}

/// Write a FeatureCollection to a file as compact GeoJSON.
pub fn write_collection(path: &Path, collection: &FeatureCollection) -> Result<()> {
    let bytes = serde_json::to_vec(&collection.to_geojson())
        .context("Failed to serialize GeoJSON to bytes")?;
    fs::write(path, bytes)
        .with_context(|| format!("Failed to write {}", path.display()))
}
