//! Palette module - display colors behind brick color indices
//!
//! The engine itself deals only in color indices; these are the fixed
//! display colors a rendering collaborator maps indices onto. Selection is a
//! pure function of the caller's RNG state, so there is no shared mutable
//! palette anywhere in the process.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;

/// Number of distinct display colors available
pub const PALETTE_SIZE: usize = 5;

/// An sRGB display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The full display palette
pub const PALETTE: [Rgb; PALETTE_SIZE] = [
    Rgb::new(0xD3, 0x40, 0x40), // red
    Rgb::new(0x82, 0xD3, 0x40), // green
    Rgb::new(0x40, 0xC2, 0xD3), // cyan
    Rgb::new(0x8B, 0x40, 0xD3), // purple
    Rgb::new(0xD3, 0xC8, 0x40), // yellow
];

/// Select `nb` distinct display colors (at most the whole palette).
///
/// Color index `i` on a grid maps to the `i`-th entry of the selection.
pub fn pick_colors(rng: &mut SimpleRng, nb: usize) -> ArrayVec<Rgb, PALETTE_SIZE> {
    let mut pool = PALETTE;
    rng.shuffle(&mut pool);
    pool.iter().copied().take(nb.min(PALETTE_SIZE)).collect()
}
