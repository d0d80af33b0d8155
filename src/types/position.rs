//! Grid coordinates.

use std::fmt;

use serde::Serialize;

/// A (row, column) coordinate on a map grid.
///
/// Derived position tables use [`Position::UNDEFINED`] when the marker that
/// would define them never appeared in the source file. Callers must check
/// [`is_defined`](Position::is_defined) before treating a derived position as
/// a real cell.
///
/// The derived `Ord` is row-major: rows compare first, then columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Sentinel for "this marker was absent from the map".
    pub const UNDEFINED: Position = Position { row: -1, col: -1 };

    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Whether this position refers to an actual grid cell.
    pub fn is_defined(&self) -> bool {
        *self != Self::UNDEFINED
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self {
            row: row as i32,
            col: col as i32,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_defined() {
            write!(f, "({}, {})", self.row, self.col)
        } else {
            write!(f, "(undefined)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ordering_is_row_major() {
        let mut positions = vec![
            Position::new(5, 5),
            Position::new(2, 9),
            Position::new(2, 2),
            Position::new(0, 7),
        ];
        positions.sort();

        assert_eq!(
            positions,
            vec![
                Position::new(0, 7),
                Position::new(2, 2),
                Position::new(2, 9),
                Position::new(5, 5),
            ]
        );
    }

    #[test]
    fn test_undefined_sentinel() {
        assert_eq!(Position::UNDEFINED, Position::new(-1, -1));
        assert!(!Position::UNDEFINED.is_defined());
        assert!(Position::new(0, 0).is_defined());
    }

    #[test]
    fn test_position_from_grid_indices() {
        let pos: Position = (3usize, 7usize).into();
        assert_eq!(pos, Position::new(3, 7));
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(2, 4).to_string(), "(2, 4)");
        assert_eq!(Position::UNDEFINED.to_string(), "(undefined)");
    }
}
