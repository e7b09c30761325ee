//! Snapshot module - the serializable grid state
//!
//! The snapshot is the persistence boundary object: `{size, nbColors,
//! columns}`, with `null` for empty cells on the wire. A persistence
//! collaborator serializes it verbatim (e.g. as JSON) and later feeds it
//! back for exact reconstruction.

use serde::{Deserialize, Serialize};

use same_gravity_types::Cell;

use crate::grid::Grid;

/// Grid dimensions as stored in a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub x: u16,
    pub y: u16,
}

/// Serializable snapshot of a grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub size: GridSize,
    #[serde(rename = "nbColors")]
    pub nb_colors: u8,
    pub columns: Vec<Vec<Cell>>,
}

impl Grid {
    /// Capture the grid as a snapshot with full-height columns
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            size: GridSize {
                x: self.width,
                y: self.height,
            },
            nb_colors: self.nb_colors,
            columns: (0..self.width as usize)
                .map(|x| self.column_slice(x).to_vec())
                .collect(),
        }
    }

    /// Reconstruct a grid from a snapshot.
    ///
    /// Columns shorter than the recorded height are padded with empty cells
    /// (saved boards may carry compacted columns). Contents are not
    /// re-validated; a well-formed snapshot is the saving side's contract.
    pub fn from_snapshot(snapshot: &GridSnapshot) -> Self {
        let width = snapshot.size.x;
        let height = snapshot.size.y;
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for x in 0..width as usize {
            let column = snapshot.columns.get(x);
            for y in 0..height as usize {
                let cell = column.and_then(|col| col.get(y).copied()).flatten();
                cells.push(cell);
            }
        }
        Self {
            width,
            height,
            nb_colors: snapshot.nb_colors,
            cells,
            gravity: None,
        }
    }
}
