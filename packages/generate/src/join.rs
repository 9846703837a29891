//! Joins the lot tables against the lots parsed from KML.

use std::collections::BTreeMap;

use lot_map_lot_models::{LotRecord, ParsedLot};

use crate::lots::LotTables;

/// Whether a source-table entry found its placemark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEntry {
    /// Lot ID from the source table.
    pub lot_id: String,
    /// KML placemark name the lot is mapped to.
    pub placemark: String,
    /// Whether the placemark was present in the parsed KML.
    pub matched: bool,
}

/// Output of [`join_lots`].
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedLots {
    /// Records to emit, in display-table order.
    pub records: Vec<LotRecord>,
    /// One entry per source-table row, in source-table order.
    pub report: Vec<MatchEntry>,
}

impl JoinedLots {
    /// Source-table entries whose placemark was not in the KML.
    pub fn unmatched(&self) -> impl Iterator<Item = &MatchEntry> {
        self.report.iter().filter(|entry| !entry.matched)
    }
}

/// Builds one [`LotRecord`] per display-table lot that has a placemark
/// mapping and whose placemark was parsed.
///
/// Lots with no mapping are skipped silently; they are known to have no
/// boundary data. Lots whose mapped placemark is missing are skipped with a
/// warning, since that points at a stale mapping or an incomplete KML file.
#[must_use]
pub fn join_lots(tables: &LotTables<'_>, lots: &BTreeMap<String, ParsedLot>) -> JoinedLots {
    let mut records = Vec::new();

    for &(lot_id, display_name) in tables.display_names {
        let Some(placemark) = tables.source_name(lot_id) else {
            continue;
        };

        let Some(lot) = lots.get(placemark) else {
            log::warn!("{lot_id}: placemark {placemark:?} not found in KML, omitting");
            continue;
        };

        records.push(LotRecord {
            id: lot_id.to_string(),
            name: display_name.to_string(),
            center: lot.center,
            polygon: lot.polygon.clone(),
        });
    }

    let report = tables
        .source_names
        .iter()
        .map(|&(lot_id, placemark)| MatchEntry {
            lot_id: lot_id.to_string(),
            placemark: placemark.to_string(),
            matched: lots.contains_key(placemark),
        })
        .collect();

    JoinedLots { records, report }
}
