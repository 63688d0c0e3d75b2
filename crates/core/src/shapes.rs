//! The immutable shape table: rotation masks for the seven piece kinds.
//!
//! Each kind maps to an ordered sequence of [`ShapeMask`]s; the sequence
//! order is the rotation order and its length varies per kind (the I, S and
//! Z pieces have two distinct orientations, the O piece one, the rest four).
//! The table is process-wide static data and never mutated.

use blockfall_types::PieceKind;

/// Occupied cells of one rotation state, as a rectangular boolean matrix in
/// the piece-local frame (row 0 = top of the bounding box).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeMask {
    rows: &'static [&'static [bool]],
}

impl ShapeMask {
    /// Build a mask from static row data.
    ///
    /// Evaluated at compile time for the table below, so a ragged or empty
    /// literal fails the build rather than misbehaving at runtime.
    pub const fn new(rows: &'static [&'static [bool]]) -> Self {
        assert!(!rows.is_empty(), "shape mask has no rows");
        assert!(!rows[0].is_empty(), "shape mask has no columns");
        let width = rows[0].len();
        let mut i = 1;
        while i < rows.len() {
            assert!(rows[i].len() == width, "ragged shape mask");
            i += 1;
        }
        Self { rows }
    }

    /// Height of the bounding box in cells.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width of the bounding box in cells.
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn filled(&self, row: usize, col: usize) -> bool {
        self.rows[row][col]
    }

    pub fn rows(&self) -> &'static [&'static [bool]] {
        self.rows
    }
}

/// Rotation states for a kind, in rotation order. The first entry is the
/// spawn orientation.
pub fn rotations(kind: PieceKind) -> &'static [ShapeMask] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::L => &L_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
    }
}

// Mask literals: X = filled, F = free.
const X: bool = true;
const F: bool = false;

static I_STATES: [ShapeMask; 2] = [
    ShapeMask::new(&[&[X, X, X, X]]),
    ShapeMask::new(&[&[X], &[X], &[X], &[X]]),
];

static O_STATES: [ShapeMask; 1] = [ShapeMask::new(&[&[X, X], &[X, X]])];

static T_STATES: [ShapeMask; 4] = [
    ShapeMask::new(&[&[F, X, F], &[X, X, X]]),
    ShapeMask::new(&[&[X, F], &[X, X], &[X, F]]),
    ShapeMask::new(&[&[X, X, X], &[F, X, F]]),
    ShapeMask::new(&[&[F, X], &[X, X], &[F, X]]),
];

static L_STATES: [ShapeMask; 4] = [
    ShapeMask::new(&[&[F, F, X], &[X, X, X]]),
    ShapeMask::new(&[&[X, F], &[X, F], &[X, X]]),
    ShapeMask::new(&[&[X, X, X], &[X, F, F]]),
    ShapeMask::new(&[&[X, X], &[F, X], &[F, X]]),
];

static J_STATES: [ShapeMask; 4] = [
    ShapeMask::new(&[&[X, F, F], &[X, X, X]]),
    ShapeMask::new(&[&[X, X], &[X, F], &[X, F]]),
    ShapeMask::new(&[&[X, X, X], &[F, F, X]]),
    ShapeMask::new(&[&[F, X], &[F, X], &[X, X]]),
];

static S_STATES: [ShapeMask; 2] = [
    ShapeMask::new(&[&[F, X, X], &[X, X, F]]),
    ShapeMask::new(&[&[X, F], &[X, X], &[F, X]]),
];

static Z_STATES: [ShapeMask; 2] = [
    ShapeMask::new(&[&[X, X, F], &[F, X, X]]),
    ShapeMask::new(&[&[F, X], &[X, X], &[X, F]]),
];
