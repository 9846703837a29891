//! Compiled-in lot tables.
//!
//! Both tables are ordered slices so the generated module is diff-stable:
//! output order follows [`LOT_DISPLAY_NAMES`], the console report follows
//! [`LOT_SOURCE_NAMES`].

/// Lot ID → KML placemark name, for lots with boundary data.
pub const LOT_SOURCE_NAMES: &[(&str, &str)] = &[
    ("lot-1", "Library Lot"),
    ("lot-3", "Hancher Commuter Lot"),
    ("lot-4", "Lot 48"),
    ("lot-5", "Lot 53"),
    ("lot-6", "Lot 49"),
    ("lot-9", "Arena Commuter Lot"),
    ("lot-10", "Lot 46/47"),
    ("lot-11", "Lot 40"),
    ("lot-12", "Finkbine Commuter Lot"),
    // Lot 43 has a single polygon in the KML covering all three sections.
    ("lot-13", "Lot 43"),
    ("lot-14", "Lot 43"),
    ("lot-15", "Lot 43"),
    ("lot-16", "Hawkeye Commuter Lot"),
    ("lot-19", "Lot 71"),
    ("lot-21", "Lot 73"),
];

/// Lot ID → display name, for every tracked lot.
pub const LOT_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("lot-1", "Lot 3 - Library Lot"),
    ("lot-2", "Lot 11 - Jail Lot"),
    ("lot-3", "Lot 55 - Hancher"),
    ("lot-4", "Lot 48 - Myrtle"),
    ("lot-5", "Lot 53 - Melrose Court"),
    ("lot-6", "Lot 49 - Red Barn"),
    ("lot-7", "Lot 58 - Adjacent to Lot 49"),
    ("lot-8", "Ramp 4 (South Side)"),
    ("lot-9", "Lot 75 - Arena Commuter"),
    ("lot-10", "Lot 46 - Carver"),
    ("lot-11", "Lot 40 - Dental Lot"),
    ("lot-12", "Lot 65 - Finkbine"),
    ("lot-13", "Lot 43 N - N of Hawkeye Ramp"),
    ("lot-14", "Lot 43 NW - Rec Bldg Area"),
    ("lot-15", "Lot 43 W - West of Kinnick"),
    ("lot-16", "Lot 85 - Hawkeye Commuter"),
    ("lot-17", "Soccer Lot - Lower Finkbine"),
    ("lot-18", "Softball Lot"),
    ("lot-19", "Lot 71 - Hall of Fame"),
    ("lot-20", "Golf Course"),
    ("lot-21", "Lot 73 - University Club"),
    ("lot-22", "Lot 22 - Placeholder"),
];

/// The pair of lookup tables the joiner works from.
#[derive(Debug, Clone, Copy)]
pub struct LotTables<'a> {
    /// Lot ID → KML placemark name.
    pub source_names: &'a [(&'a str, &'a str)],
    /// Lot ID → display name. Determines output order.
    pub display_names: &'a [(&'a str, &'a str)],
}

impl LotTables<'static> {
    /// The tables compiled into the binary.
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            source_names: LOT_SOURCE_NAMES,
            display_names: LOT_DISPLAY_NAMES,
        }
    }
}

impl<'a> LotTables<'a> {
    /// Returns the KML placemark name mapped to `lot_id`, if any.
    #[must_use]
    pub fn source_name(&self, lot_id: &str) -> Option<&'a str> {
        lookup(self.source_names, lot_id)
    }

    /// Returns the display name for `lot_id`, if any.
    #[must_use]
    pub fn display_name(&self, lot_id: &str) -> Option<&'a str> {
        lookup(self.display_names, lot_id)
    }
}

fn lookup<'a>(table: &[(&'a str, &'a str)], key: &str) -> Option<&'a str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn every_source_id_has_a_display_name() {
        let tables = LotTables::builtin();
        for (id, _) in LOT_SOURCE_NAMES {
            assert!(
                tables.display_name(id).is_some(),
                "{id} has a placemark but no display name"
            );
        }
    }

    #[test]
    fn table_ids_are_unique() {
        for table in [LOT_SOURCE_NAMES, LOT_DISPLAY_NAMES] {
            let ids: BTreeSet<&str> = table.iter().map(|(id, _)| *id).collect();
            assert_eq!(ids.len(), table.len());
        }
    }

    #[test]
    fn looks_up_both_tables() {
        let tables = LotTables::builtin();
        assert_eq!(tables.source_name("lot-1"), Some("Library Lot"));
        assert_eq!(tables.display_name("lot-1"), Some("Lot 3 - Library Lot"));
        assert_eq!(tables.source_name("lot-2"), None);
        assert_eq!(tables.display_name("lot-2"), Some("Lot 11 - Jail Lot"));
        assert_eq!(tables.display_name("lot-99"), None);
    }
}
