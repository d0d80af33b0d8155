//! CSV map file parser.
//!
//! Maps are comma-separated text files, one line per grid row. Each cell is
//! trimmed and translated through the terrain legend; cells whose trimmed
//! text is a marker token additionally get their coordinates recorded.

use std::fs;
use std::io;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{MapError, Result};
use crate::types::terrain::terrain_code;
use crate::types::{MapGrid, Marker, MarkerTable, Position};

/// Parse a map file into its terrain grid and marker table.
///
/// Blank lines are skipped entirely: they produce no grid row and do not
/// count toward the row indices recorded for markers. Standard CSV quoting
/// applies, so a field may be quoted to contain the delimiter. Rows are not
/// required to share a length.
///
/// Fails with [`MapError::NotFound`] when `path` does not exist, and with
/// [`MapError::Malformed`] when no rows remain after skipping blank lines or
/// when the file cannot be read or decoded.
pub fn parse_map(path: &Path) -> Result<(MapGrid, MarkerTable)> {
    match fs::metadata(path) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(MapError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(MapError::Io {
                path: path.to_path_buf(),
                message: e.to_string(),
            });
        }
    }

    // Reader owns the file handle; it closes when this function returns.
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| malformed(path, e))?;

    let mut rows: Vec<Vec<u8>> = Vec::new();
    let mut markers = MarkerTable::new();

    for record in reader.records() {
        let record = record.map_err(|e| malformed(path, e))?;
        let row_index = rows.len();
        let mut row = Vec::with_capacity(record.len());

        for (col_index, field) in record.iter().enumerate() {
            let token = field.trim();
            row.push(terrain_code(token));

            if let Some(marker) = Marker::from_token(token) {
                markers.record(marker, Position::from((row_index, col_index)));
            }
        }

        rows.push(row);
    }

    if rows.is_empty() {
        return Err(MapError::Malformed {
            path: path.to_path_buf(),
            message: "no usable rows".to_string(),
            help: Some("A map file needs at least one non-blank line".to_string()),
        });
    }

    Ok((MapGrid::new(rows), markers))
}

/// Wrap a read/decode failure as `Malformed`, keeping the underlying
/// description and the path.
fn malformed(path: &Path, error: csv::Error) -> MapError {
    MapError::Malformed {
        path: path.to_path_buf(),
        message: error.to_string(),
        help: None,
    }
}
