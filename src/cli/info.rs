//! Info command implementation.
//!
//! Loads the world and prints the map inventory plus every derived position.

use std::path::PathBuf;

use clap::Args;

use crate::error::{MapError, Result};
use crate::output::Printer;
use crate::world::{default_maps_dir, WorldData};

/// Print the loaded maps and derived positions
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Directory containing the map files (default: maps/ beside the binary)
    #[arg(long)]
    pub maps_dir: Option<PathBuf>,

    /// Emit the summary as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: InfoArgs, printer: &Printer) -> Result<()> {
    let maps_dir = args.maps_dir.unwrap_or_else(default_maps_dir);
    let world = WorldData::load(&maps_dir)?;
    let summary = world.summary();

    if args.json {
        let json = serde_json::to_string_pretty(&summary).map_err(|e| MapError::Io {
            path: maps_dir.clone(),
            message: e.to_string(),
        })?;
        // Machine-readable output goes to stdout, nothing else does.
        println!("{}", json);
        return Ok(());
    }

    for dims in &summary.maps {
        printer.info("Map", &format!("{} ({}x{})", dims.id, dims.rows, dims.cols));
    }

    printer.info("Start", &summary.start.to_string());
    printer.info("Lost Woods", &summary.lost_woods.to_string());

    for (id, pos) in &summary.entrances {
        printer.info("Entrance", &format!("{} at {}", id, pos));
    }
    for (id, pos) in &summary.portals {
        printer.info("Portal", &format!("{} at {}", id, pos));
    }
    for (id, pos) in &summary.pendants {
        printer.info("Pendant", &format!("{} at {}", id, pos));
    }

    Ok(())
}
