//! hymap - Hyrule map loading and indexing
//!
//! Loads the overworld and dungeon grids from comma-separated map files,
//! translates their cell legend into terrain codes, and indexes every point
//! of interest (start position, dungeon entrances, portals, pendants) into
//! lookup tables the game consumes. Pathfinding over the resulting cost
//! grid lives elsewhere.

pub mod cli;
pub mod error;
pub mod output;
pub mod parser;
pub mod types;
pub mod world;

pub use error::{MapError, Result};
pub use parser::parse_map;
pub use types::{MapGrid, Marker, MarkerTable, Position};
pub use world::{
    default_maps_dir, WorldData, WorldSummary, DUNGEON_MAP_FILES, HYRULE_MAP_FILE,
};
