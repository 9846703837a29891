#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! CLI tool for generating the parking lot coordinate module from KML.
//!
//! Reads `Polygons.kml`, joins its placemarks against the compiled-in lot
//! tables, and writes `src/data/lotCoordinates.js` for the map view.

use std::path::PathBuf;

use clap::Parser;
use lot_map_generate::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, GenerateArgs};

#[derive(Parser)]
#[command(name = "lot_map_generate", about = "Lot coordinate module generator")]
struct Cli {
    /// KML file containing the lot boundary placemarks
    #[arg(long, default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Path of the generated ES module
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Print the generated module to stdout instead of writing it
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();
    let cli = Cli::parse();

    let args = GenerateArgs {
        input: cli.input,
        output: cli.output,
        dry_run: cli.dry_run,
    };

    let output = lot_map_generate::run(&args)?;

    if args.dry_run {
        print!("{}", output.module);
    }

    Ok(())
}
