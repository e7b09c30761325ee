//! Grid module - the block grid and its destruction logic
//!
//! The grid is a `width` x `height` field of cells, each empty or holding a
//! color index. Storage is a flat column-major buffer (`x * height + y`) for
//! cache locality; `(0, 0)` is the bottom-left cell.
//!
//! All coordinate queries are defensive: out-of-range positions (including
//! negative ones) answer false/empty instead of failing, so callers can pass
//! raw pointer hits and neighbor offsets unchecked.

use same_gravity_types::{Brick, Cell, Color, GravityDirection, Point};

use crate::rng::SimpleRng;

/// The game grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) nb_colors: u8,
    /// Flat array of cells, column-major order (x * height + y)
    pub(crate) cells: Vec<Cell>,
    /// Last applied gravity direction, None until the first compaction
    pub(crate) gravity: Option<GravityDirection>,
}

impl Grid {
    /// Create an empty grid
    pub fn empty(width: u16, height: u16, nb_colors: u8) -> Self {
        Self {
            width,
            height,
            nb_colors,
            cells: vec![None; width as usize * height as usize],
            gravity: None,
        }
    }

    /// Generate a grid filled with uniformly random colors
    pub fn generate(width: u16, height: u16, nb_colors: u8, seed: u32) -> Self {
        let mut grid = Self::empty(width, height, nb_colors);
        if nb_colors == 0 {
            return grid;
        }
        let mut rng = SimpleRng::new(seed);
        for cell in &mut grid.cells {
            *cell = Some(rng.next_range(u32::from(nb_colors)) as Color);
        }
        grid
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= i32::from(self.width) || y < 0 || y >= i32::from(self.height) {
            return None;
        }
        Some(x as usize * self.height as usize + y as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn nb_colors(&self) -> u8 {
        self.nb_colors
    }

    /// Last applied gravity direction (for serialization/replay; never
    /// consulted for correctness of the next compaction)
    pub fn gravity(&self) -> Option<GravityDirection> {
        self.gravity
    }

    /// True iff (x, y) is within bounds and occupied
    pub fn exists(&self, x: i32, y: i32) -> bool {
        self.get_value(x, y).is_some()
    }

    /// Color at (x, y), or None when empty or out of range
    pub fn get_value(&self, x: i32, y: i32) -> Cell {
        self.index(x, y).and_then(|idx| self.cells[idx])
    }

    /// True iff (x, y) is occupied by exactly `color`
    pub fn check_value(&self, x: i32, y: i32, color: Color) -> bool {
        self.get_value(x, y) == Some(color)
    }

    /// Set the cell at (x, y). Returns false when out of range.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Number of occupied cells
    pub fn count_blocks(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Total cell capacity of the grid
    pub fn total_cells(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub(crate) fn column_slice(&self, x: usize) -> &[Cell] {
        let height = self.height as usize;
        &self.cells[x * height..(x + 1) * height]
    }

    /// One column bottom-to-top; empty slice when out of range
    pub fn column(&self, x: i32) -> &[Cell] {
        if x < 0 || x >= i32::from(self.width) {
            return &[];
        }
        self.column_slice(x as usize)
    }

    /// One row left-to-right; empty when out of range
    pub fn line(&self, y: i32) -> Vec<Cell> {
        if y < 0 || y >= i32::from(self.height) {
            return Vec::new();
        }
        (0..i32::from(self.width))
            .map(|x| self.get_value(x, y))
            .collect()
    }

    /// Every occupied cell with its color, column by column
    pub fn bricks(&self) -> impl Iterator<Item = Brick> + '_ {
        let height = self.height as usize;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|color| Brick {
                x: (idx / height) as u16,
                y: (idx % height) as u16,
                color,
            })
        })
    }

    /// True iff the brick at (x, y) can be destroyed: it exists and at least
    /// one of its 4-neighbors shares its color. Diagonals never count.
    pub fn is_destroyable(&self, x: i32, y: i32) -> bool {
        match self.get_value(x, y) {
            Some(color) => {
                self.check_value(x, y - 1, color)
                    || self.check_value(x, y + 1, color)
                    || self.check_value(x + 1, y, color)
                    || self.check_value(x - 1, y, color)
            }
            None => false,
        }
    }

    /// Compute the destroy propagation from a seed brick.
    ///
    /// Returns every cell 4-connected to the seed through cells of the
    /// seed's color, without duplicates; empty when the seed is missing or
    /// not destroyable. The fill runs on an explicit worklist so deep
    /// components cannot exhaust the call stack.
    pub fn compute_destroy(&self, x: i32, y: i32) -> Vec<Point> {
        if !self.is_destroyable(x, y) {
            return Vec::new();
        }
        let color = match self.get_value(x, y) {
            Some(color) => color,
            None => return Vec::new(),
        };

        let mut seen = vec![false; self.cells.len()];
        let mut pending = vec![(x, y)];
        let mut computed = Vec::new();
        while let Some((cx, cy)) = pending.pop() {
            let idx = match self.index(cx, cy) {
                Some(idx) => idx,
                None => continue,
            };
            if seen[idx] || self.cells[idx] != Some(color) {
                continue;
            }
            seen[idx] = true;
            computed.push(Point::new(cx as u16, cy as u16));
            pending.push((cx, cy - 1));
            pending.push((cx, cy + 1));
            pending.push((cx - 1, cy));
            pending.push((cx + 1, cy));
        }
        computed
    }

    /// Blank every listed cell. No compaction happens here; that is an
    /// explicit, separate `apply_gravity` step.
    pub fn apply_destroy(&mut self, destroy: &[Point]) {
        for point in destroy {
            if let Some(idx) = self.index(i32::from(point.x), i32::from(point.y)) {
                self.cells[idx] = None;
            }
        }
    }

    /// True when no color index occurs more than once anywhere on the grid
    pub fn no_more_same_colors(&self) -> bool {
        let mut counts = [0u32; Color::MAX as usize + 1];
        for cell in &self.cells {
            if let Some(color) = cell {
                let count = &mut counts[*color as usize];
                *count += 1;
                if *count > 1 {
                    return false;
                }
            }
        }
        true
    }

    /// Full scan: is any brick on the grid currently destroyable?
    pub fn any_destroyable(&self) -> bool {
        for x in 0..i32::from(self.width) {
            for y in 0..i32::from(self.height) {
                if self.is_destroyable(x, y) {
                    return true;
                }
            }
        }
        false
    }

    fn column_is_empty(&self, x: usize) -> bool {
        self.column_slice(x).iter().all(|cell| cell.is_none())
    }

    /// Every non-empty column must share the occupancy pattern of the first
    /// non-empty one; fully empty columns are skipped.
    fn occupied_columns_match(&self) -> bool {
        let mut reference: Option<&[Cell]> = None;
        for x in 0..self.width as usize {
            let column = self.column_slice(x);
            if column.iter().all(|cell| cell.is_none()) {
                continue;
            }
            match reference {
                None => reference = Some(column),
                Some(model) => {
                    let same_motif = model
                        .iter()
                        .zip(column.iter())
                        .all(|(a, b)| a.is_some() == b.is_some());
                    if !same_motif {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Check if the game is probably finished. Heuristic: does not detect
    /// every terminal state, and deliberately answers "not finished" for any
    /// board that is gapped or non-rectangular instead of running a full
    /// reachability analysis.
    pub fn no_more_destroyable(&self) -> bool {
        // No two same colors left: trivially over
        if self.no_more_same_colors() {
            return true;
        }

        // A gap in the sequence of columns, or inside any single column,
        // means the board has not settled into its final silhouette yet
        if has_gap((0..self.width as usize).map(|x| !self.column_is_empty(x))) {
            return false;
        }
        for x in 0..self.width as usize {
            if has_gap(self.column_slice(x).iter().map(|cell| cell.is_some())) {
                return false;
            }
        }

        // Non-rectangular remains are probably still resolvable
        if !self.occupied_columns_match() {
            return false;
        }

        !self.any_destroyable()
    }
}

/// A gap is a brick appearing after a hole that itself followed a brick.
/// Leading holes do not count.
fn has_gap(occupancy: impl Iterator<Item = bool>) -> bool {
    let mut seen_brick = false;
    let mut hole_after_brick = false;
    for occupied in occupancy {
        if occupied {
            if hole_after_brick {
                return true;
            }
            seen_brick = true;
        } else if seen_brick {
            hole_after_brick = true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_calculation() {
        let grid = Grid::empty(5, 10, 4);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(0, 9), Some(9));
        assert_eq!(grid.index(1, 0), Some(10));
        assert_eq!(grid.index(4, 9), Some(49));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(5, 0), None);
        assert_eq!(grid.index(0, 10), None);
    }

    #[test]
    fn test_generate_fills_with_valid_colors() {
        let grid = Grid::generate(6, 7, 3, 12345);
        assert_eq!(grid.count_blocks(), 42);
        for brick in grid.bricks() {
            assert!(brick.color < 3);
        }
    }

    #[test]
    fn test_generate_deterministic() {
        let a = Grid::generate(5, 10, 4, 777);
        let b = Grid::generate(5, 10, 4, 777);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_zero_colors_is_empty() {
        let grid = Grid::generate(4, 4, 0, 1);
        assert_eq!(grid.count_blocks(), 0);
    }

    #[test]
    fn test_has_gap() {
        assert!(!has_gap([false; 0].into_iter()));
        assert!(!has_gap([false, false].into_iter()));
        assert!(!has_gap([true, true, false].into_iter()));
        assert!(!has_gap([false, false, true, true].into_iter()));
        assert!(has_gap([true, false, true].into_iter()));
        assert!(has_gap([false, true, false, false, true].into_iter()));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut grid = Grid::empty(3, 3, 2);
        grid.set(1, 1, Some(1));
        let copy = grid.clone();

        grid.set(1, 1, None);
        assert_eq!(copy.get_value(1, 1), Some(1));
        assert_eq!(grid.get_value(1, 1), None);
    }
}
