//! Core game rules: board, shapes, piece movement, and game state.
//!
//! This crate is pure and deterministic. It has no dependency on the
//! terminal, input handling, or timing, which keeps every rule unit-testable:
//!
//! - [`board`]: the 16x21 well, occupancy queries, and line clearing
//! - [`shapes`]: the immutable rotation-mask table for the seven kinds
//! - [`piece`]: the falling piece and the shared collision test
//! - [`rng`]: seeded uniform piece selection
//! - [`game_state`]: board + active piece + phase, with the move/rotate/lock
//!   operations
//!
//! Timing (gravity cadence, frame pacing) lives in the engine crate; this
//! crate only answers "does this mutation apply?".

pub mod board;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod shapes;

pub use blockfall_types as types;

pub use board::Board;
pub use game_state::{GameState, Phase};
pub use piece::{collides, Piece};
pub use rng::{PiecePicker, SimpleRng};
pub use shapes::{rotations, ShapeMask};
