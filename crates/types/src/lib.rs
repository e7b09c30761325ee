//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, rendering, persistence).
//!
//! # Coordinates
//!
//! The grid is addressed as `(x, y)` where `x` grows rightward and `y` grows
//! upward: `(0, 0)` is the bottom-left cell. Queries accept `i32` so callers
//! may pass unchecked positions (pointer hits, neighbor offsets) and get a
//! defensive answer instead of a panic.
//!
//! # Gravity directions
//!
//! A gravity direction is an axis plus a sign. The unreversed direction of an
//! axis compacts blocks toward index 0 of that axis (the bottom or left
//! edge); the reversed one compacts toward the far edge. The string forms
//! used for serialization and replay are `"y"` (down), `"-y"` (up), `"x"`
//! (left) and `"-x"` (right).
//!
//! # Examples
//!
//! ```
//! use same_gravity_types::{Axis, GravityDirection};
//!
//! let dir = GravityDirection::from_str("-x").unwrap();
//! assert_eq!(dir, GravityDirection::Right);
//! assert_eq!(dir.axis(), Axis::X);
//! assert!(dir.is_reversed());
//! assert_eq!(dir.as_str(), "-x");
//! ```

/// Default grid dimensions and color count for a fresh game
pub const DEFAULT_GRID_WIDTH: u16 = 5;
pub const DEFAULT_GRID_HEIGHT: u16 = 10;
pub const DEFAULT_NB_COLORS: u8 = 4;

/// A color index in `[0, nb_colors)`
pub type Color = u8;

/// Cell on the grid (None = empty, Some = brick with a color index)
pub type Cell = Option<Color>;

/// An in-range cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// An occupied cell together with its color, as consumed by rendering and
/// scoring collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Brick {
    pub x: u16,
    pub y: u16,
    pub color: Color,
}

/// Grid axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// The four gravity directions blocks can compact toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GravityDirection {
    /// Toward y = 0 (`"y"`)
    Down,
    /// Toward y = height - 1 (`"-y"`)
    Up,
    /// Toward x = 0 (`"x"`)
    Left,
    /// Toward x = width - 1 (`"-x"`)
    Right,
}

impl GravityDirection {
    /// The axis blocks move along
    pub fn axis(&self) -> Axis {
        match self {
            GravityDirection::Down | GravityDirection::Up => Axis::Y,
            GravityDirection::Left | GravityDirection::Right => Axis::X,
        }
    }

    /// True when blocks compact toward the far edge of the axis
    pub fn is_reversed(&self) -> bool {
        matches!(self, GravityDirection::Up | GravityDirection::Right)
    }

    /// Recompose a direction from its axis and sign
    pub fn from_axis(axis: Axis, reversed: bool) -> Self {
        match (axis, reversed) {
            (Axis::Y, false) => GravityDirection::Down,
            (Axis::Y, true) => GravityDirection::Up,
            (Axis::X, false) => GravityDirection::Left,
            (Axis::X, true) => GravityDirection::Right,
        }
    }

    /// Parse from the axis+sign string form
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "y" => Some(GravityDirection::Down),
            "-y" => Some(GravityDirection::Up),
            "x" => Some(GravityDirection::Left),
            "-x" => Some(GravityDirection::Right),
            _ => None,
        }
    }

    /// Convert to the axis+sign string form
    pub fn as_str(&self) -> &'static str {
        match self {
            GravityDirection::Down => "y",
            GravityDirection::Up => "-y",
            GravityDirection::Left => "x",
            GravityDirection::Right => "-x",
        }
    }

    /// Map a device orientation angle (degrees) to a gravity direction.
    ///
    /// Portrait (0) is down, the two landscape angles tilt gravity sideways,
    /// and anything else (upside down) is up.
    pub fn from_orientation(degrees: i32) -> Self {
        match degrees {
            0 => GravityDirection::Down,
            -90 => GravityDirection::Left,
            90 => GravityDirection::Right,
            _ => GravityDirection::Up,
        }
    }
}
