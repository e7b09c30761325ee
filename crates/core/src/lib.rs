//! Core grid engine - pure, deterministic, and testable
//!
//! This crate contains the whole grid simulation: the block grid,
//! connectivity-based destruction, directional gravity resolution, and
//! game-end detection. It has **zero dependencies** on UI, timing, or I/O,
//! making it:
//!
//! - **Deterministic**: the same seed produces the same starting grid
//! - **Synchronous**: every operation runs to completion with no suspension
//! - **Portable**: usable from any driver (canvas, terminal, headless tests)
//!
//! # Module Structure
//!
//! - [`grid`]: the block grid with flood-fill destruction and the
//!   game-end heuristic
//! - [`gravity`]: directional compaction and the move maps that feed
//!   falling animations
//! - [`palette`]: display colors behind brick color indices
//! - [`rng`]: seeded LCG for reproducible generation
//! - [`snapshot`]: the serializable save/restore boundary object
//!
//! # Example
//!
//! ```
//! use same_gravity_core::Grid;
//! use same_gravity_types::{
//!     GravityDirection, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_NB_COLORS,
//! };
//!
//! let mut grid = Grid::generate(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT, DEFAULT_NB_COLORS, 12345);
//!
//! // Destroy the first destroyable group, then let the rest fall
//! let seed = (0..i32::from(grid.width()))
//!     .flat_map(|x| (0..i32::from(grid.height())).map(move |y| (x, y)))
//!     .find(|&(x, y)| grid.is_destroyable(x, y));
//! if let Some((x, y)) = seed {
//!     let destroyed = grid.compute_destroy(x, y);
//!     grid.apply_destroy(&destroyed);
//!     grid.apply_gravity(GravityDirection::Down);
//! }
//!
//! let game_over = grid.no_more_destroyable();
//! # let _ = game_over;
//! ```

pub mod gravity;
pub mod grid;
pub mod palette;
pub mod rng;
pub mod snapshot;

pub use same_gravity_types as types;

// Re-export commonly used types for convenience
pub use gravity::{Displacement, MoveMap};
pub use grid::Grid;
pub use palette::{pick_colors, Rgb, PALETTE, PALETTE_SIZE};
pub use rng::SimpleRng;
pub use snapshot::{GridSize, GridSnapshot};
