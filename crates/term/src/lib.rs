//! Terminal rendering for the game.
//!
//! The view layer is pure: [`GameView`] maps a `GameState` into a [`Frame`]
//! of styled characters, which makes it unit-testable without a terminal.
//! [`TerminalRenderer`] owns the raw-mode/alternate-screen lifecycle and
//! flushes whole frames (the game is small enough that diffing buys
//! nothing).

pub mod frame;
pub mod renderer;
pub mod view;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use frame::{Frame, Glyph};
pub use renderer::TerminalRenderer;
pub use view::{GameView, Viewport};
