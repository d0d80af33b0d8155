//! Terrain legend and movement cost tables.
//!
//! Map cells hold symbolic tokens; the legend translates each trimmed token
//! to a numeric terrain code. Codes index into the cost table used by the
//! pathfinding layer. Both tables are fixed for the life of the process.

/// Terrain codes.
pub const GRASS: u8 = 0;
pub const SAND: u8 = 1;
pub const FOREST: u8 = 2;
pub const MOUNTAIN: u8 = 3;
pub const WATER: u8 = 4;
pub const FLOOR: u8 = 5;
pub const WALL: u8 = 6;

/// Code assigned to tokens the legend does not recognize.
///
/// Unknown cells are walls: impassable by default rather than silently
/// walkable.
pub const UNKNOWN: u8 = WALL;

/// Token -> terrain code legend.
///
/// Marker tokens (`L`, `MS`, `MA`, `LW`, `E`, `P`) translate to ordinary
/// terrain so the grid stays walkable where they stand; their coordinates are
/// recorded separately in the marker table.
pub const LEGEND: &[(&str, u8)] = &[
    ("G", GRASS),
    ("S", SAND),
    ("F", FOREST),
    ("M", MOUNTAIN),
    ("A", WATER),
    ("", FLOOR),
    ("X", WALL),
    ("L", GRASS),
    ("MS", GRASS),
    ("MA", GRASS),
    ("LW", FOREST),
    ("E", FLOOR),
    ("P", FLOOR),
];

/// Terrain code -> movement cost. `INFINITY` marks impassable terrain.
pub const TERRAIN_COSTS: &[(u8, f64)] = &[
    (GRASS, 10.0),
    (SAND, 20.0),
    (FOREST, 100.0),
    (MOUNTAIN, 150.0),
    (WATER, 180.0),
    (FLOOR, 10.0),
    (WALL, f64::INFINITY),
];

/// Translate a trimmed cell token to its terrain code.
///
/// Tokens absent from the legend map to [`UNKNOWN`].
pub fn terrain_code(token: &str) -> u8 {
    LEGEND
        .iter()
        .find(|(t, _)| *t == token)
        .map_or(UNKNOWN, |(_, code)| *code)
}

/// Movement cost for a terrain code.
///
/// Codes outside the table cost infinity, matching the unknown-is-impassable
/// rule of the legend.
pub fn terrain_cost(code: u8) -> f64 {
    TERRAIN_COSTS
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(f64::INFINITY, |(_, cost)| *cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_code_known_tokens() {
        assert_eq!(terrain_code("G"), GRASS);
        assert_eq!(terrain_code("S"), SAND);
        assert_eq!(terrain_code("F"), FOREST);
        assert_eq!(terrain_code("M"), MOUNTAIN);
        assert_eq!(terrain_code("A"), WATER);
        assert_eq!(terrain_code("X"), WALL);
    }

    #[test]
    fn test_terrain_code_empty_is_floor() {
        assert_eq!(terrain_code(""), FLOOR);
    }

    #[test]
    fn test_terrain_code_markers_stay_walkable() {
        assert_eq!(terrain_code("L"), GRASS);
        assert_eq!(terrain_code("MS"), GRASS);
        assert_eq!(terrain_code("MA"), GRASS);
        assert_eq!(terrain_code("LW"), FOREST);
        assert_eq!(terrain_code("E"), FLOOR);
        assert_eq!(terrain_code("P"), FLOOR);
    }

    #[test]
    fn test_terrain_code_unknown_token() {
        assert_eq!(terrain_code("Z"), UNKNOWN);
        assert_eq!(terrain_code("grass"), UNKNOWN);
    }

    #[test]
    fn test_terrain_cost_table() {
        assert_eq!(terrain_cost(GRASS), 10.0);
        assert_eq!(terrain_cost(SAND), 20.0);
        assert_eq!(terrain_cost(FOREST), 100.0);
        assert_eq!(terrain_cost(MOUNTAIN), 150.0);
        assert_eq!(terrain_cost(WATER), 180.0);
        assert_eq!(terrain_cost(FLOOR), 10.0);
    }

    #[test]
    fn test_terrain_cost_wall_is_infinite() {
        assert!(terrain_cost(WALL).is_infinite());
    }

    #[test]
    fn test_terrain_cost_out_of_table() {
        assert!(terrain_cost(42).is_infinite());
    }
}
