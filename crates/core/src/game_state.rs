//! Game state: the well, the active piece, and the phase.
//!
//! All mutation goes through explicit operations on [`GameState`]; there is
//! no ambient global. Every operation either applies cleanly or is a no-op.
//! The only terminal condition is a spawn that collides, which flips the
//! phase to [`Phase::GameOver`].

use blockfall_types::PieceKind;

use crate::board::Board;
use crate::piece::{collides, Piece};
use crate::rng::PiecePicker;
use crate::shapes::rotations;

/// Durable engine phases.
///
/// Spawning and locking are transient steps inside [`GameState::spawn`] and
/// the engine's drop transition; they never persist across calls, so only
/// the two states that do are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Falling,
    GameOver,
}

/// The complete game state.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    picker: PiecePicker,
    phase: Phase,
}

impl GameState {
    /// Fresh state with an empty well and no active piece yet. Call
    /// [`spawn`](Self::spawn) (or let the engine do it) to start play.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            picker: PiecePicker::new(seed),
            phase: Phase::Falling,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the well, for scenario setup in tests and tools.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Falling
    }

    /// Spawn a new piece of a uniformly random kind.
    ///
    /// If the fresh piece already collides with the stack, the game is over:
    /// the phase flips to `GameOver`, no piece is installed, and `false` is
    /// returned.
    pub fn spawn(&mut self) -> bool {
        let kind = self.picker.next();
        self.spawn_kind(kind)
    }

    /// Spawn a piece of a specific kind. Same game-over rule as
    /// [`spawn`](Self::spawn).
    pub fn spawn_kind(&mut self, kind: PieceKind) -> bool {
        let piece = Piece::spawn(kind);
        if collides(&self.board, piece.mask(), piece.x, piece.y) {
            self.phase = Phase::GameOver;
            self.active = None;
            return false;
        }
        self.active = Some(piece);
        true
    }

    /// Try to translate the active piece by `(dx, dy)`.
    ///
    /// Commits and returns `true` when the target position is free; leaves
    /// the piece untouched and returns `false` otherwise. Deciding what a
    /// failed downward move means (locking) is the engine's job.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        if collides(&self.board, active.mask(), active.x + dx, active.y + dy) {
            return false;
        }
        self.active = Some(Piece {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        });
        true
    }

    /// Try to advance the active piece to its next rotation state.
    ///
    /// The candidate mask is tested at the piece's current position; there
    /// is no wall-kick retry. A blocked rotation is a silent no-op.
    pub fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let states = rotations(active.kind);
        let next = (active.rotation + 1) % states.len();
        if collides(&self.board, &states[next], active.x, active.y) {
            return false;
        }
        self.active = Some(Piece {
            rotation: next,
            ..active
        });
        true
    }

    /// Lock the active piece into the well and clear any filled rows.
    ///
    /// Returns the number of rows cleared. The active slot is left empty;
    /// the caller spawns the replacement.
    pub fn lock_active(&mut self) -> usize {
        let Some(piece) = self.active.take() else {
            return 0;
        };
        self.board.place(&piece);
        self.board.clear_filled_rows()
    }
}
