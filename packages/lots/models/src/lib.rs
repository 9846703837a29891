#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Parking lot geometry and output record types.
//!
//! Coordinates are always stored latitude-first, matching what Leaflet
//! expects on the front end. KML sources are longitude-first; the swap
//! happens once at parse time in `lot_map_kml`.

use serde::{Deserialize, Serialize};

/// Map center used by the front end when no lots are available
/// (Iowa City).
pub const DEFAULT_MAP_CENTER: LatLng = LatLng::new(41.6611, -91.5302);

/// A WGS84 point, serialized as a `[lat, lng]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(point: LatLng) -> Self {
        [point.lat, point.lng]
    }
}

/// A placemark boundary parsed out of a KML document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedLot {
    /// Boundary vertices in source order. Never empty.
    pub polygon: Vec<LatLng>,
    /// Vertex average of `polygon`.
    pub center: LatLng,
}

impl ParsedLot {
    /// Builds a lot from its boundary, computing the center.
    ///
    /// Returns `None` for an empty boundary; such placemarks carry no
    /// usable geometry and are dropped by the reader.
    #[must_use]
    pub fn from_polygon(polygon: Vec<LatLng>) -> Option<Self> {
        if polygon.is_empty() {
            return None;
        }
        let center = centroid(&polygon);
        Some(Self { polygon, center })
    }
}

/// A single entry of the generated `LOT_COORDINATES` mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotRecord {
    /// Lot identifier as used by the tracking sheet (e.g. `"lot-1"`).
    pub id: String,
    /// Human-readable lot name (e.g. `"Lot 3 - Library Lot"`).
    pub name: String,
    /// Vertex average of `polygon`, copied from the parsed placemark.
    pub center: LatLng,
    /// Boundary vertices in source order.
    pub polygon: Vec<LatLng>,
}

/// Arithmetic mean of the points on each axis.
///
/// This is a plain vertex average, not an area-weighted centroid. An empty
/// slice yields `(0, 0)`.
#[must_use]
pub fn centroid(points: &[LatLng]) -> LatLng {
    if points.is_empty() {
        return LatLng::new(0.0, 0.0);
    }

    #[allow(clippy::cast_precision_loss)]
    let count = points.len() as f64;
    let (lat_sum, lng_sum) = points
        .iter()
        .fold((0.0, 0.0), |(lat, lng), p| (lat + p.lat, lng + p.lng));

    LatLng::new(lat_sum / count, lng_sum / count)
}

/// Mean of every record's center, or [`DEFAULT_MAP_CENTER`] when there are
/// no records.
///
/// This is the reference behavior for the `getMapCenter()` function emitted
/// into the generated module; the template must compute the same value.
#[must_use]
pub fn aggregate_center(records: &[LotRecord]) -> LatLng {
    if records.is_empty() {
        return DEFAULT_MAP_CENTER;
    }
    let centers: Vec<LatLng> = records.iter().map(|r| r.center).collect();
    centroid(&centers)
}
