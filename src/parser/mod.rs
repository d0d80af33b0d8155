//! Parsers for hymap input files.
//!
//! One format today: comma-separated map grids. See [`map::parse_map`].

mod map;

pub use map::parse_map;
