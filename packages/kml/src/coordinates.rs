//! Parsing of KML `<coordinates>` text.
//!
//! KML writes each vertex as `lon,lat[,alt]`, usually one tuple per line.
//! Spaces around the commas are tolerated, and a line may also hold several
//! space-separated tuples. Output points are latitude-first.

use lot_map_lot_models::LatLng;

use crate::KmlError;

/// Parses a `<coordinates>` text node into latitude-first points.
///
/// Tuples with fewer than two comma-separated fields are skipped. Any
/// altitude component is ignored.
///
/// # Errors
///
/// Returns [`KmlError::Coordinate`] if the longitude or latitude field of a
/// tuple is not a number, or [`KmlError::NonFinite`] if it parses to NaN or
/// infinity.
pub fn parse_coordinates(text: &str) -> Result<Vec<LatLng>, KmlError> {
    let mut points = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        // Drop whitespace around commas so only tuple separators remain.
        let compact = line.split(',').map(str::trim).collect::<Vec<_>>().join(",");

        for tuple in compact.split_whitespace() {
            let fields: Vec<&str> = tuple.split(',').collect();
            if fields.len() < 2 {
                log::debug!("Skipping coordinate tuple without lat/lng: {tuple:?}");
                continue;
            }

            let lng = parse_field(fields[0], tuple)?;
            let lat = parse_field(fields[1], tuple)?;
            points.push(LatLng::new(lat, lng));
        }
    }

    Ok(points)
}

fn parse_field(field: &str, tuple: &str) -> Result<f64, KmlError> {
    let value = field
        .trim()
        .parse::<f64>()
        .map_err(|source| KmlError::Coordinate {
            tuple: tuple.to_string(),
            source,
        })?;

    if !value.is_finite() {
        return Err(KmlError::NonFinite {
            tuple: tuple.to_string(),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swaps_lon_lat_into_lat_lng() {
        let points = parse_coordinates("-91.53,41.66,0").unwrap();
        assert_eq!(points, vec![LatLng::new(41.66, -91.53)]);
    }

    #[test]
    fn accepts_tuples_without_altitude() {
        let points = parse_coordinates("-91.53,41.66").unwrap();
        assert_eq!(points, vec![LatLng::new(41.66, -91.53)]);
    }

    #[test]
    fn parses_one_tuple_per_line_in_order() {
        let text = "
            -91.5400,41.6600,0
            -91.5390,41.6600,0
            -91.5390,41.6610,0
        ";
        let points = parse_coordinates(text).unwrap();
        assert_eq!(
            points,
            vec![
                LatLng::new(41.66, -91.54),
                LatLng::new(41.66, -91.539),
                LatLng::new(41.661, -91.539),
            ]
        );
    }

    #[test]
    fn parses_space_separated_tuples() {
        let points = parse_coordinates("1,2,0 3,4,0").unwrap();
        assert_eq!(points, vec![LatLng::new(2.0, 1.0), LatLng::new(4.0, 3.0)]);
    }

    #[test]
    fn skips_tuples_with_fewer_than_two_fields() {
        let points = parse_coordinates("1,2\nbad\n3,4").unwrap();
        assert_eq!(points, vec![LatLng::new(2.0, 1.0), LatLng::new(4.0, 3.0)]);
    }

    #[test]
    fn rejects_non_numeric_fields() {
        let err = parse_coordinates("1,2\nx,y\n3,4").unwrap_err();
        assert!(matches!(err, KmlError::Coordinate { ref tuple, .. } if tuple == "x,y"));
    }

    #[test]
    fn rejects_non_numeric_latitude() {
        assert!(parse_coordinates("-91.53,north,0").is_err());
    }

    #[test]
    fn tolerates_spaces_after_commas() {
        let points = parse_coordinates("-91.53, 41.66, 0\n-91.52,41.65,0").unwrap();
        assert_eq!(
            points,
            vec![LatLng::new(41.66, -91.53), LatLng::new(41.65, -91.52)]
        );
    }

    #[test]
    fn tolerates_spaces_before_commas() {
        let points = parse_coordinates("  -91.53 ,41.66 , 0  ").unwrap();
        assert_eq!(points, vec![LatLng::new(41.66, -91.53)]);
    }

    #[test]
    fn rejects_nan_longitude() {
        let err = parse_coordinates("nan,41.6,0").unwrap_err();
        assert!(matches!(err, KmlError::NonFinite { ref tuple } if tuple == "nan,41.6,0"));
    }

    #[test]
    fn rejects_infinite_latitude() {
        assert!(matches!(
            parse_coordinates("-91.5,inf"),
            Err(KmlError::NonFinite { .. })
        ));
        assert!(matches!(
            parse_coordinates("-91.5,-infinity,0"),
            Err(KmlError::NonFinite { .. })
        ));
    }

    #[test]
    fn empty_input_yields_no_points() {
        assert!(parse_coordinates("").unwrap().is_empty());
        assert!(parse_coordinates("  \n\t ").unwrap().is_empty());
    }
}
