//! Map grid of terrain codes.

use super::position::Position;

/// A parsed map: ordered rows of terrain codes (row-major: `rows[row][col]`).
///
/// Rows mirror the source file, so a ragged source produces a ragged grid.
/// `width()` reports the first row's length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapGrid {
    rows: Vec<Vec<u8>>,
}

impl MapGrid {
    pub fn new(rows: Vec<Vec<u8>>) -> Self {
        Self { rows }
    }

    /// Width in cells (first row), 0 for an empty grid.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Height in cells.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Terrain code at a cell, or `None` outside the grid. Undefined
    /// positions are always outside.
    pub fn get(&self, position: Position) -> Option<u8> {
        if position.row < 0 || position.col < 0 {
            return None;
        }
        self.rows
            .get(position.row as usize)
            .and_then(|row| row.get(position.col as usize))
            .copied()
    }

    /// The raw rows.
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Iterate over all cells with their positions, row-major.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Position, u8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &code)| (Position::from((r, c)), code))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dimensions() {
        let grid = MapGrid::new(vec![vec![0, 1, 2], vec![3, 4, 5]]);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(!grid.is_empty());
    }

    #[test]
    fn test_grid_get() {
        let grid = MapGrid::new(vec![vec![0, 1], vec![2, 3]]);
        assert_eq!(grid.get(Position::new(0, 0)), Some(0));
        assert_eq!(grid.get(Position::new(1, 1)), Some(3));
        assert_eq!(grid.get(Position::new(2, 0)), None);
        assert_eq!(grid.get(Position::UNDEFINED), None);
    }

    #[test]
    fn test_ragged_rows_are_preserved() {
        let grid = MapGrid::new(vec![vec![0, 1, 2], vec![3]]);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.rows()[1].len(), 1);
        assert_eq!(grid.get(Position::new(1, 2)), None);
    }

    #[test]
    fn test_iter_cells_row_major() {
        let grid = MapGrid::new(vec![vec![0, 1], vec![2, 3]]);
        let cells: Vec<_> = grid.iter_cells().collect();
        assert_eq!(
            cells,
            vec![
                (Position::new(0, 0), 0),
                (Position::new(0, 1), 1),
                (Position::new(1, 0), 2),
                (Position::new(1, 1), 3),
            ]
        );
    }

    #[test]
    fn test_empty_grid() {
        let grid = MapGrid::new(vec![]);
        assert!(grid.is_empty());
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 0);
    }
}
