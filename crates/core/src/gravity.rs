//! Gravity resolver - directional compaction and move maps
//!
//! Gravity is an axis plus a sign, giving four directions. Computing a
//! gravity yields a move map: per line perpendicular to the axis, the list
//! of cells that will shift and by how much. The rendering collaborator
//! animates those displacements from 0.0 to 1.0, then `apply_gravity`
//! performs the authoritative compaction. The engine itself has no timing.

use same_gravity_types::{Axis, Cell, Color, GravityDirection};

use crate::grid::Grid;

/// One moving cell within a line of a move map.
///
/// `pos` is the coordinate along the gravity axis before compaction; the
/// cell comes to rest at `pos - amount`. Unreversed directions produce
/// positive amounts and reversed ones negative, so the subtraction always
/// moves the cell toward the gravity's target edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Displacement {
    pub pos: u16,
    pub amount: i32,
}

impl Displacement {
    /// The resting coordinate after compaction
    pub fn target(&self) -> i32 {
        i32::from(self.pos) - self.amount
    }
}

/// Per-line displacement records describing the end state of one
/// compaction.
///
/// Lines are indexed by the coordinate perpendicular to the gravity axis:
/// one list per column for a vertical gravity, one per row for a horizontal
/// one. Cells with no empty space ahead of them produce no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveMap {
    axis: Axis,
    lines: Vec<Vec<Displacement>>,
}

impl MoveMap {
    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn lines(&self) -> &[Vec<Displacement>] {
        &self.lines
    }

    /// True when no cell has anywhere to fall
    pub fn is_settled(&self) -> bool {
        self.lines.iter().all(|line| line.is_empty())
    }
}

impl Grid {
    /// (length along the gravity axis, number of perpendicular lines)
    fn axis_extents(&self, axis: Axis) -> (u16, u16) {
        match axis {
            Axis::X => (self.width, self.height),
            Axis::Y => (self.height, self.width),
        }
    }

    fn axis_cell(&self, axis: Axis, perp: u16, along: u16) -> Cell {
        let (x, y) = match axis {
            Axis::X => (along, perp),
            Axis::Y => (perp, along),
        };
        self.get_value(i32::from(x), i32::from(y))
    }

    fn set_axis_cell(&mut self, axis: Axis, perp: u16, along: u16, cell: Cell) {
        let (x, y) = match axis {
            Axis::X => (along, perp),
            Axis::Y => (perp, along),
        };
        self.set(i32::from(x), i32::from(y), cell);
    }

    /// Compute the move map for one gravity direction without mutating the
    /// grid.
    ///
    /// Each perpendicular line is scanned along the axis starting from the
    /// gravity-facing edge, accumulating a running count of empty cells;
    /// every occupied cell found after at least one empty records that count
    /// as its (signed) displacement.
    pub fn compute_gravity(&self, direction: GravityDirection) -> MoveMap {
        let axis = direction.axis();
        let reversed = direction.is_reversed();
        let (axis_len, perp_len) = self.axis_extents(axis);

        let mut lines = vec![Vec::new(); perp_len as usize];
        for (perp, line) in lines.iter_mut().enumerate() {
            let mut empties = 0i32;
            for step in 0..axis_len {
                let along = if reversed { axis_len - 1 - step } else { step };
                if self.axis_cell(axis, perp as u16, along).is_none() {
                    empties += 1;
                } else if empties > 0 {
                    line.push(Displacement {
                        pos: along,
                        amount: if reversed { -empties } else { empties },
                    });
                }
            }
        }
        MoveMap { axis, lines }
    }

    /// Compact every perpendicular line along the gravity axis: occupied
    /// cells keep their order and pack against the gravity-facing edge,
    /// leaving the freed cells empty on the far edge.
    ///
    /// Idempotent: a second application of the same direction finds an
    /// already compacted board and changes nothing. The direction is
    /// recorded once applied.
    pub fn apply_gravity(&mut self, direction: GravityDirection) {
        let axis = direction.axis();
        let reversed = direction.is_reversed();
        let (axis_len, perp_len) = self.axis_extents(axis);

        let mut survivors: Vec<Color> = Vec::with_capacity(axis_len as usize);
        for perp in 0..perp_len {
            survivors.clear();
            for step in 0..axis_len {
                let along = if reversed { axis_len - 1 - step } else { step };
                if let Some(color) = self.axis_cell(axis, perp, along) {
                    survivors.push(color);
                }
            }
            for step in 0..axis_len {
                let along = if reversed { axis_len - 1 - step } else { step };
                let cell = survivors.get(step as usize).copied();
                self.set_axis_cell(axis, perp, along, cell);
            }
        }
        self.gravity = Some(direction);
    }
}
