#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Library for generating the parking lot coordinate module consumed by the
//! map view.
//!
//! Reads lot boundaries from a KML file, joins them against the compiled-in
//! lot tables, and writes an ES module exporting `LOT_COORDINATES` plus its
//! accessor functions.
//!
//! The module is rendered fully in memory and written with an atomic
//! write-then-rename, so a failed run never leaves a partial file behind.
//! Output that already matches what is on disk is not rewritten.

pub mod join;
pub mod lots;
pub mod render;

use std::path::{Path, PathBuf};

use lot_map_kml::KmlError;
use lot_map_lot_models::{LatLng, aggregate_center};

use crate::join::join_lots;
use crate::lots::LotTables;

/// Default KML input path, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "Polygons.kml";

/// Default module output path, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "src/data/lotCoordinates.js";

/// Errors that can occur while generating the module.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Reading or parsing the KML input failed.
    #[error(transparent)]
    Kml(#[from] KmlError),

    /// Writing the output module failed.
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        /// Path that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Serializing a record failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Formatting into the output buffer failed.
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// Arguments for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// KML file to read.
    pub input: PathBuf,

    /// Module file to write.
    pub output: PathBuf,

    /// Render the module without writing it.
    pub dry_run: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            dry_run: false,
        }
    }
}

/// What happened to the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    /// The file was created or replaced.
    Written,
    /// The file already held identical content.
    UpToDate,
    /// Nothing was written because of `dry_run`.
    Skipped,
}

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOutput {
    /// The rendered module source.
    pub module: String,
    /// Number of lots emitted into the module.
    pub record_count: usize,
    /// Lot IDs whose mapped placemark was missing from the KML.
    pub unmatched: Vec<String>,
    /// Value `getMapCenter()` returns for the emitted records.
    pub map_center: LatLng,
    /// What happened to the output file.
    pub status: WriteStatus,
}

/// Runs the pipeline using the compiled-in lot tables.
///
/// # Errors
///
/// Returns an error if the KML cannot be read or parsed, or if the output
/// cannot be written.
pub fn run(args: &GenerateArgs) -> Result<GenerateOutput, GenerateError> {
    run_with_tables(args, &LotTables::builtin())
}

/// Runs the pipeline against an explicit pair of lot tables.
///
/// # Errors
///
/// Returns an error if the KML cannot be read or parsed, or if the output
/// cannot be written.
pub fn run_with_tables(
    args: &GenerateArgs,
    tables: &LotTables<'_>,
) -> Result<GenerateOutput, GenerateError> {
    log::info!("Parsing KML file...");
    let lots = lot_map_kml::load(&args.input)?;
    log::info!("Found {} lots in KML file", lots.len());

    let joined = join_lots(tables, &lots);

    log::info!("Matched lots:");
    for entry in &joined.report {
        if entry.matched {
            log::info!("  ✓ {}: {}", entry.lot_id, entry.placemark);
        } else {
            log::info!("  ✗ {}: {} (NOT FOUND)", entry.lot_id, entry.placemark);
        }
    }

    let map_center = aggregate_center(&joined.records);
    log::info!(
        "Generating module for {} lots, map center [{}, {}]",
        joined.records.len(),
        map_center.lat,
        map_center.lng
    );
    let module = render::render_module(&joined.records)?;

    let status = if args.dry_run {
        WriteStatus::Skipped
    } else {
        write_if_changed(&args.output, &module)?
    };

    match status {
        WriteStatus::Written => log::info!("✓ Generated {}", args.output.display()),
        WriteStatus::UpToDate => log::info!("{} is up-to-date", args.output.display()),
        WriteStatus::Skipped => log::info!("Dry run, not writing {}", args.output.display()),
    }

    Ok(GenerateOutput {
        module,
        record_count: joined.records.len(),
        unmatched: joined.unmatched().map(|e| e.lot_id.clone()).collect(),
        map_center,
        status,
    })
}

/// Writes `contents` to `path` unless the file already holds exactly that
/// content.
///
/// Uses an atomic write pattern (write to `.tmp`, then rename) so readers
/// never observe a half-written module. The `.tmp` file is removed if the
/// rename fails.
///
/// # Errors
///
/// Returns an error if the parent directory, temp file, or rename fails.
pub fn write_if_changed(path: &Path, contents: &str) -> Result<WriteStatus, GenerateError> {
    if std::fs::read_to_string(path).is_ok_and(|existing| existing == contents) {
        return Ok(WriteStatus::UpToDate);
    }

    let io_err = |source: std::io::Error| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    let tmp_path = PathBuf::from(tmp_path);

    std::fs::write(&tmp_path, contents).map_err(io_err)?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        if let Err(cleanup) = std::fs::remove_file(&tmp_path) {
            log::warn!("Failed to remove {}: {cleanup}", tmp_path.display());
        }
        return Err(io_err(e));
    }

    Ok(WriteStatus::Written)
}
