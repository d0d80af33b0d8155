//! Core domain types for hymap.
//!
//! - `Position` - (row, col) grid coordinates with an "undefined" sentinel
//! - `MapGrid` - ordered rows of terrain codes
//! - `Marker` / `MarkerTable` - point-of-interest symbols and where they sit
//! - `terrain` - the token legend and movement cost tables

mod grid;
mod marker;
mod position;
pub mod terrain;

pub use grid::MapGrid;
pub use marker::{Marker, MarkerTable};
pub use position::Position;
