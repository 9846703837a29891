//! Renders joined lot records as an ES module for the map view.
//!
//! The module exports `LOT_COORDINATES` plus three accessors
//! (`getLotCoordinates`, `getAllLotCoordinates`, `getMapCenter`). Strings
//! and coordinate arrays are written as JSON, which is valid JavaScript.

use std::fmt::Write as _;

use lot_map_lot_models::{DEFAULT_MAP_CENTER, LotRecord};

use crate::GenerateError;

const HEADER: &str = "\
/**
 * Parking Lot Coordinates for TBTC Map View
 *
 * Generated from parking lot KML data by lot_map_generate. Do not edit by
 * hand; update the KML or the lot tables and regenerate.
 *
 * Each lot includes:
 * - id: Matches the lot ID in the Google Sheet
 * - name: Display name of the lot
 * - center: [latitude, longitude] for the lot center point
 * - polygon: Array of [lat, lng] points defining the lot boundary
";

const ACCESSORS: &str = "
/**
 * Get coordinates for a specific lot by ID
 * @param {string} lotId - The lot ID (e.g., 'lot-1')
 * @returns {object|null} - Lot coordinate data or null if not found
 */
export function getLotCoordinates(lotId) {
  return Object.prototype.hasOwnProperty.call(LOT_COORDINATES, lotId)
    ? LOT_COORDINATES[lotId]
    : null;
}

/**
 * Get all lot coordinates as an array
 * @returns {Array} - Array of all lot coordinate objects
 */
export function getAllLotCoordinates() {
  return Object.values(LOT_COORDINATES);
}
";

/// Renders the complete module source for `records`, in the given order.
///
/// # Errors
///
/// Returns an error if a record fails to serialize as JSON.
pub fn render_module(records: &[LotRecord]) -> Result<String, GenerateError> {
    let mut out = String::new();

    out.push_str(HEADER);
    writeln!(out, " *\n * Lots with boundary data: {}\n */\n", records.len())?;

    out.push_str("export const LOT_COORDINATES = {\n");
    for record in records {
        write_record(&mut out, record)?;
    }
    out.push_str("};\n");

    out.push_str(ACCESSORS);
    write_map_center(&mut out)?;

    Ok(out)
}

fn write_record(out: &mut String, record: &LotRecord) -> Result<(), GenerateError> {
    let id = serde_json::to_string(&record.id)?;

    writeln!(out, "  {id}: {{")?;
    writeln!(out, "    id: {id},")?;
    writeln!(out, "    name: {},", serde_json::to_string(&record.name)?)?;
    writeln!(out, "    center: {},", serde_json::to_string(&record.center)?)?;
    writeln!(out, "    polygon: {}", serde_json::to_string(&record.polygon)?)?;
    writeln!(out, "  }},")?;

    Ok(())
}

fn write_map_center(out: &mut String) -> Result<(), GenerateError> {
    let fallback = serde_json::to_string(&DEFAULT_MAP_CENTER)?;

    out.push_str(
        "
/**
 * Calculate the center point of all lots (for map initialization)
 * @returns {Array} - [latitude, longitude] of the center point
 */
export function getMapCenter() {
  const lots = getAllLotCoordinates();
",
    );
    writeln!(
        out,
        "  if (lots.length === 0) return {fallback}; // Default to Iowa City"
    )?;
    out.push_str(
        "
  const avgLat = lots.reduce((sum, lot) => sum + lot.center[0], 0) / lots.length;
  const avgLng = lots.reduce((sum, lot) => sum + lot.center[1], 0) / lots.length;

  return [avgLat, avgLng];
}
",
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use lot_map_lot_models::LatLng;

    use super::*;

    fn library_lot() -> LotRecord {
        LotRecord {
            id: "lot-1".to_string(),
            name: "Lot 3 - Library Lot".to_string(),
            center: LatLng::new(41.25, -91.25),
            polygon: vec![
                LatLng::new(41.0, -91.5),
                LatLng::new(41.0, -91.0),
                LatLng::new(41.5, -91.0),
                LatLng::new(41.5, -91.5),
            ],
        }
    }

    #[test]
    fn renders_record_entries() {
        let module = render_module(&[library_lot()]).unwrap();

        assert!(module.contains("  \"lot-1\": {\n    id: \"lot-1\",\n"));
        assert!(module.contains("    name: \"Lot 3 - Library Lot\",\n"));
        assert!(module.contains("    center: [41.25,-91.25],\n"));
        assert!(
            module.contains("    polygon: [[41.0,-91.5],[41.0,-91.0],[41.5,-91.0],[41.5,-91.5]]\n")
        );
    }

    #[test]
    fn renders_all_accessors() {
        let module = render_module(&[]).unwrap();

        assert!(module.contains("export const LOT_COORDINATES = {\n};\n"));
        assert!(module.contains("export function getLotCoordinates(lotId) {"));
        assert!(module.contains("export function getAllLotCoordinates() {"));
        assert!(module.contains("export function getMapCenter() {"));
        assert!(module.contains("return [41.6611,-91.5302];"));
    }

    #[test]
    fn escapes_display_names() {
        let mut record = library_lot();
        record.name = "Lot \"O'Brien\"".to_string();

        let module = render_module(&[record]).unwrap();
        assert!(module.contains(r#"    name: "Lot \"O'Brien\"","#));
    }

    #[test]
    fn preserves_record_order() {
        let mut second = library_lot();
        second.id = "lot-10".to_string();
        let mut third = library_lot();
        third.id = "lot-3".to_string();

        let module = render_module(&[library_lot(), second, third]).unwrap();
        let first_pos = module.find("\"lot-1\":").unwrap();
        let second_pos = module.find("\"lot-10\":").unwrap();
        let third_pos = module.find("\"lot-3\":").unwrap();
        assert!(first_pos < second_pos && second_pos < third_pos);
    }

    #[test]
    fn rendering_is_deterministic() {
        let records = [library_lot()];
        assert_eq!(
            render_module(&records).unwrap(),
            render_module(&records).unwrap()
        );
    }
}
