//! The falling piece and the collision test shared by move and rotate.

use arrayvec::ArrayVec;
use blockfall_types::{PieceKind, BOARD_COLUMNS};

use crate::board::Board;
use crate::shapes::{rotations, ShapeMask};

/// A falling tetromino: a kind, a rotation index into that kind's mask
/// sequence, and the board position of the mask's top-left corner.
///
/// The rotation index is kept in range by the operations in
/// [`crate::game_state`]; the struct itself is plain copyable data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: usize,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// New piece in its spawn orientation, horizontally centered at the top
    /// of the well.
    pub fn spawn(kind: PieceKind) -> Self {
        let width = rotations(kind)[0].width() as i8;
        Self {
            kind,
            rotation: 0,
            x: (BOARD_COLUMNS / 2) as i8 - width / 2,
            y: 0,
        }
    }

    /// Mask for the current rotation state.
    pub fn mask(&self) -> &'static ShapeMask {
        &rotations(self.kind)[self.rotation]
    }

    /// Absolute board coordinates of the piece's occupied cells.
    pub fn cells(&self) -> ArrayVec<(i8, i8), 4> {
        let mut out = ArrayVec::new();
        for (row, cols) in self.mask().rows().iter().enumerate() {
            for (col, &filled) in cols.iter().enumerate() {
                if filled {
                    out.push((self.x + col as i8, self.y + row as i8));
                }
            }
        }
        out
    }
}

/// Collision test: would `mask` anchored at `(x, y)` overlap a wall, the
/// floor, or a locked cell?
///
/// Used unchanged by both movement (current mask, shifted position) and
/// rotation (next mask, same position). Rows above the well never collide
/// by themselves; see [`Board::is_occupied`].
pub fn collides(board: &Board, mask: &ShapeMask, x: i8, y: i8) -> bool {
    for (row, cols) in mask.rows().iter().enumerate() {
        for (col, &filled) in cols.iter().enumerate() {
            if filled && board.is_occupied(x + col as i8, y + row as i8) {
                return true;
            }
        }
    }
    false
}
