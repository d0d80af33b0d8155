//! Startup orchestration: load every map and derive the named positions.
//!
//! The rest of the game treats all of this as read-only. [`WorldData::load`]
//! is an explicit function rather than lazy module state so it can be unit
//! tested against fixture directories and so a failed load aborts startup in
//! one visible place.

use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::parser::parse_map;
use crate::types::{MapGrid, Marker, MarkerTable, Position};

/// The overworld map file.
pub const HYRULE_MAP_FILE: &str = "hyrule_map.csv";

/// The dungeon map files, in load order. `dungeon1` is index 0.
pub const DUNGEON_MAP_FILES: [&str; 3] =
    ["dungeon1_map.csv", "dungeon2_map.csv", "dungeon3_map.csv"];

/// Everything the game needs from the map files, built once at startup.
#[derive(Debug, Clone)]
pub struct WorldData {
    /// The overworld grid.
    pub hyrule: MapGrid,

    /// Marker coordinates found on the overworld, in encounter order.
    /// Kept whole so consumers can reach markers with no derived table
    /// (`MS`, repeated occurrences).
    pub hyrule_markers: MarkerTable,

    /// Dungeon id (`dungeon1`..) -> that dungeon's grid.
    pub dungeons: BTreeMap<String, MapGrid>,

    /// First `L` on the overworld.
    pub start: Position,

    /// First `LW` on the overworld.
    pub lost_woods: Position,

    /// Overworld `MA` coordinates sorted ascending (row, then col), bound
    /// positionally: the smallest becomes `dungeon1`'s entrance.
    pub entrances: BTreeMap<String, Position>,

    /// First `E` inside each dungeon: where Link appears on entry and
    /// leaves from.
    pub portals: BTreeMap<String, Position>,

    /// First `P` inside each dungeon.
    pub pendants: BTreeMap<String, Position>,
}

impl WorldData {
    /// Load the overworld and all dungeons from `maps_dir` and derive the
    /// named position tables.
    ///
    /// Any parse failure aborts the whole load; there is no partial success.
    /// Missing markers are not errors: the affected derived position is
    /// [`Position::UNDEFINED`].
    pub fn load(maps_dir: &Path) -> Result<WorldData> {
        let (hyrule, hyrule_markers) = parse_map(&maps_dir.join(HYRULE_MAP_FILE))?;

        let mut dungeons = BTreeMap::new();
        let mut portals = BTreeMap::new();
        let mut pendants = BTreeMap::new();

        for (i, file) in DUNGEON_MAP_FILES.iter().enumerate() {
            let id = dungeon_id(i);
            let (grid, markers) = parse_map(&maps_dir.join(file))?;

            portals.insert(id.clone(), first_or_undefined(&markers, Marker::Portal));
            pendants.insert(id.clone(), first_or_undefined(&markers, Marker::Pendant));
            dungeons.insert(id, grid);
        }

        let start = first_or_undefined(&hyrule_markers, Marker::Link);
        let lost_woods = first_or_undefined(&hyrule_markers, Marker::LostWoods);

        let entrances = bind_entrances(&hyrule_markers);

        Ok(WorldData {
            hyrule,
            hyrule_markers,
            dungeons,
            start,
            lost_woods,
            entrances,
            portals,
            pendants,
        })
    }

    /// A serializable digest of the loaded world, for machine output.
    pub fn summary(&self) -> WorldSummary {
        let mut maps = vec![MapDims {
            id: "hyrule".to_string(),
            rows: self.hyrule.height(),
            cols: self.hyrule.width(),
        }];
        maps.extend(self.dungeons.iter().map(|(id, grid)| MapDims {
            id: id.clone(),
            rows: grid.height(),
            cols: grid.width(),
        }));

        WorldSummary {
            maps,
            start: self.start,
            lost_woods: self.lost_woods,
            entrances: self.entrances.clone(),
            portals: self.portals.clone(),
            pendants: self.pendants.clone(),
        }
    }
}

/// Digest of a loaded world for JSON export.
#[derive(Debug, Clone, Serialize)]
pub struct WorldSummary {
    pub maps: Vec<MapDims>,
    pub start: Position,
    pub lost_woods: Position,
    pub entrances: BTreeMap<String, Position>,
    pub portals: BTreeMap<String, Position>,
    pub pendants: BTreeMap<String, Position>,
}

/// Dimensions of one loaded map.
#[derive(Debug, Clone, Serialize)]
pub struct MapDims {
    pub id: String,
    pub rows: usize,
    pub cols: usize,
}

/// Where the map files live when no directory is given explicitly.
///
/// Resolves beside the executable rather than the current working directory,
/// falling back to a plain `maps` path when the executable's location is
/// unavailable or has no `maps/` next to it.
pub fn default_maps_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("maps")))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from("maps"))
}

/// Bind overworld `MA` coordinates to dungeon ids.
///
/// Coordinates are sorted ascending (row, then col) before assignment, so
/// the smallest coordinate is always `dungeon1`'s entrance. The binding is
/// purely positional; nothing in the cell says which dungeon it leads to.
fn bind_entrances(hyrule_markers: &MarkerTable) -> BTreeMap<String, Position> {
    let mut coords = hyrule_markers.positions(Marker::DungeonEntrance).to_vec();
    coords.sort();
    coords
        .into_iter()
        .enumerate()
        .map(|(i, pos)| (dungeon_id(i), pos))
        .collect()
}

fn dungeon_id(index: usize) -> String {
    format!("dungeon{}", index + 1)
}

fn first_or_undefined(markers: &MarkerTable, marker: Marker) -> Position {
    markers.first(marker).unwrap_or(Position::UNDEFINED)
}
