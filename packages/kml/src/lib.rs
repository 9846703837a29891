#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! KML placemark reader.
//!
//! Loads a KML 2.2 document fully into memory, finds every `Placemark`
//! element in the KML namespace, and turns each one's boundary into a
//! [`ParsedLot`] keyed by placemark name.

pub mod coordinates;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use lot_map_lot_models::ParsedLot;

pub use coordinates::parse_coordinates;

/// Namespace URI of KML 2.2 documents.
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// Errors from reading a KML document.
#[derive(Debug, thiserror::Error)]
pub enum KmlError {
    /// The document could not be read from disk.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The document is not well-formed XML.
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// A coordinate tuple had a non-numeric longitude or latitude.
    #[error("Malformed coordinate tuple {tuple:?}: {source}")]
    Coordinate {
        /// The offending `lon,lat[,alt]` tuple.
        tuple: String,
        /// Underlying float parse error.
        source: std::num::ParseFloatError,
    },

    /// A coordinate tuple had a NaN or infinite longitude or latitude.
    #[error("Non-finite value in coordinate tuple {tuple:?}")]
    NonFinite {
        /// The offending `lon,lat[,alt]` tuple.
        tuple: String,
    },
}

/// A named placemark with its raw `<coordinates>` text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placemark {
    /// Trimmed text of the placemark's `<name>` child.
    pub name: String,
    /// Raw text of the first `<coordinates>` element under the placemark.
    pub coordinates: String,
}

/// Reads the KML file at `path` and returns its lots keyed by placemark
/// name.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not well-formed XML, or
/// contains a malformed coordinate tuple.
pub fn load(path: &Path) -> Result<BTreeMap<String, ParsedLot>, KmlError> {
    log::info!("Reading {}", path.display());
    let xml = std::fs::read_to_string(path).map_err(|source| KmlError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_lots(&xml)
}

/// Parses a KML document into lots keyed by placemark name.
///
/// Placemarks whose coordinates yield no points are dropped. When two
/// placemarks share a name the later one replaces the earlier one.
///
/// # Errors
///
/// Returns an error if the document is not well-formed XML or contains a
/// malformed coordinate tuple.
pub fn parse_lots(xml: &str) -> Result<BTreeMap<String, ParsedLot>, KmlError> {
    let mut lots = BTreeMap::new();

    for placemark in parse_placemarks(xml)? {
        let polygon = parse_coordinates(&placemark.coordinates)?;
        let Some(lot) = ParsedLot::from_polygon(polygon) else {
            log::debug!("Placemark {:?} has no coordinates, skipping", placemark.name);
            continue;
        };

        if lots.insert(placemark.name.clone(), lot).is_some() {
            log::warn!(
                "Duplicate placemark {:?}, keeping the last occurrence",
                placemark.name
            );
        }
    }

    Ok(lots)
}

/// Finds every KML `Placemark` in the document, in document order.
///
/// Placemarks without a non-empty `<name>` or without a `<coordinates>`
/// element carrying text are skipped.
///
/// # Errors
///
/// Returns [`KmlError::Xml`] if the document is not well-formed XML.
pub fn parse_placemarks(xml: &str) -> Result<Vec<Placemark>, KmlError> {
    let doc = roxmltree::Document::parse(xml)?;

    let placemarks = doc
        .descendants()
        .filter(|node| node.has_tag_name((KML_NAMESPACE, "Placemark")))
        .filter_map(|node| {
            let name = node
                .children()
                .find(|child| child.has_tag_name((KML_NAMESPACE, "name")))
                .and_then(|child| child.text())
                .map(str::trim)
                .filter(|name| !name.is_empty())?;

            let coordinates = node
                .descendants()
                .find(|child| child.has_tag_name((KML_NAMESPACE, "coordinates")))
                .and_then(|child| child.text())
                .filter(|text| !text.is_empty())?;

            Some(Placemark {
                name: name.to_string(),
                coordinates: coordinates.to_string(),
            })
        })
        .collect();

    Ok(placemarks)
}
