//! Check command implementation.
//!
//! Loads every map file the game would load at startup and reports the
//! first failure as a diagnostic. Mirrors the real startup path: no retry,
//! no partial success.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::parser::parse_map;
use crate::world::{default_maps_dir, DUNGEON_MAP_FILES, HYRULE_MAP_FILE};

/// Load every map file and report problems
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Directory containing the map files (default: maps/ beside the binary)
    #[arg(long)]
    pub maps_dir: Option<PathBuf>,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let maps_dir = args.maps_dir.unwrap_or_else(default_maps_dir);

    let mut checked = 0;
    for file in std::iter::once(HYRULE_MAP_FILE).chain(DUNGEON_MAP_FILES) {
        let path = maps_dir.join(file);
        let (grid, markers) = parse_map(&path)?;

        printer.status(
            "Loading",
            &format!(
                "{} ({}x{}, {})",
                file,
                grid.height(),
                grid.width(),
                plural(markers.len(), "marker", "markers")
            ),
        );
        checked += 1;
    }

    printer.status("Checked", &plural(checked, "map", "maps"));
    Ok(())
}
