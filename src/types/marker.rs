//! Point-of-interest markers and their coordinate table.

use std::collections::HashMap;

use super::position::Position;

/// The recognized marker symbols.
///
/// Markers are matched against the exact trimmed cell text, case-sensitive.
/// `l` or `ma ` in a map file is not a marker (it translates through the
/// legend like any other token).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// `L` - Link's start position on the overworld.
    Link,
    /// `MS` - the Master Sword.
    MasterSword,
    /// `E` - a dungeon's portal cell (spawn point on entry, exit back out).
    Portal,
    /// `P` - a pendant inside a dungeon.
    Pendant,
    /// `MA` - a dungeon entrance on the overworld.
    DungeonEntrance,
    /// `LW` - the Lost Woods cell on the overworld.
    LostWoods,
}

impl Marker {
    pub const ALL: [Marker; 6] = [
        Marker::Link,
        Marker::MasterSword,
        Marker::Portal,
        Marker::Pendant,
        Marker::DungeonEntrance,
        Marker::LostWoods,
    ];

    /// The token this marker appears as in map files.
    pub fn token(&self) -> &'static str {
        match self {
            Marker::Link => "L",
            Marker::MasterSword => "MS",
            Marker::Portal => "E",
            Marker::Pendant => "P",
            Marker::DungeonEntrance => "MA",
            Marker::LostWoods => "LW",
        }
    }

    /// Match a trimmed cell token against the marker set.
    pub fn from_token(token: &str) -> Option<Marker> {
        match token {
            "L" => Some(Marker::Link),
            "MS" => Some(Marker::MasterSword),
            "E" => Some(Marker::Portal),
            "P" => Some(Marker::Pendant),
            "MA" => Some(Marker::DungeonEntrance),
            "LW" => Some(Marker::LostWoods),
            _ => None,
        }
    }
}

/// Coordinates of every marker found in one map, in row-major encounter
/// order. Markers that never appeared have no entry.
#[derive(Debug, Clone, Default)]
pub struct MarkerTable {
    entries: HashMap<Marker, Vec<Position>>,
}

impl MarkerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an occurrence. Called in scan order, so per-marker lists stay
    /// sorted by encounter.
    pub fn record(&mut self, marker: Marker, position: Position) {
        self.entries.entry(marker).or_default().push(position);
    }

    /// All recorded coordinates for a marker, in encounter order.
    pub fn positions(&self, marker: Marker) -> &[Position] {
        self.entries.get(&marker).map_or(&[], Vec::as_slice)
    }

    /// The first recorded coordinate for a marker, if any appeared.
    pub fn first(&self, marker: Marker) -> Option<Position> {
        self.positions(marker).first().copied()
    }

    pub fn contains(&self, marker: Marker) -> bool {
        self.entries.contains_key(&marker)
    }

    /// Total occurrences across all markers.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_token_round_trip() {
        for marker in Marker::ALL {
            assert_eq!(Marker::from_token(marker.token()), Some(marker));
        }
    }

    #[test]
    fn test_from_token_rejects_non_markers() {
        assert_eq!(Marker::from_token("G"), None);
        assert_eq!(Marker::from_token("X"), None);
        assert_eq!(Marker::from_token(""), None);
        // Case-sensitive, exact match only.
        assert_eq!(Marker::from_token("l"), None);
        assert_eq!(Marker::from_token("MA "), None);
    }

    #[test]
    fn test_table_preserves_encounter_order() {
        let mut table = MarkerTable::new();
        table.record(Marker::DungeonEntrance, Position::new(5, 5));
        table.record(Marker::DungeonEntrance, Position::new(2, 2));

        assert_eq!(
            table.positions(Marker::DungeonEntrance),
            &[Position::new(5, 5), Position::new(2, 2)]
        );
        assert_eq!(
            table.first(Marker::DungeonEntrance),
            Some(Position::new(5, 5))
        );
    }

    #[test]
    fn test_absent_marker_has_no_entry() {
        let table = MarkerTable::new();
        assert!(!table.contains(Marker::Portal));
        assert_eq!(table.first(Marker::Portal), None);
        assert!(table.positions(Marker::Portal).is_empty());
    }
}
