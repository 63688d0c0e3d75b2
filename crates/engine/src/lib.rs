//! Engine: drives spawn, fall, lock, clear, respawn, and game over.
//!
//! The host loop calls [`Engine::tick`] once per frame and
//! [`Engine::handle`] for each input command, in arrival order. Everything
//! is synchronous and single-threaded; the engine never blocks.
//!
//! The one rule worth spelling out: only a blocked *downward* step locks a
//! piece. Gravity and soft drop both funnel through the same transition,
//! while a blocked horizontal move or rotation is just discarded.

use blockfall_core::{GameState, Phase};
use blockfall_types::{Command, GRAVITY_INTERVAL_TICKS};

/// The game-loop orchestrator: owns the game state and the gravity counter.
#[derive(Debug, Clone)]
pub struct Engine {
    state: GameState,
    gravity_ticks: u32,
}

impl Engine {
    /// New game from a seed: empty well, first piece spawned.
    pub fn new(seed: u32) -> Self {
        Self::from_state(GameState::new(seed))
    }

    /// Wrap a prepared state (e.g. a pre-filled well), spawning the first
    /// piece if none is active yet.
    ///
    /// A spawn that collides with the prepared stack ends the game before a
    /// single piece is shown falling.
    pub fn from_state(mut state: GameState) -> Self {
        if state.is_running() && state.active().is_none() {
            state.spawn();
        }
        Self {
            state,
            gravity_ticks: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.phase() == Phase::GameOver
    }

    /// Advance one tick. Every [`GRAVITY_INTERVAL_TICKS`]th tick forces one
    /// downward step. Ignored entirely once the game is over.
    pub fn tick(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.gravity_ticks += 1;
        if self.gravity_ticks >= GRAVITY_INTERVAL_TICKS {
            self.gravity_ticks = 0;
            self.drop_active();
        }
    }

    /// Apply one player command, immediately. Ignored once the game is over.
    pub fn handle(&mut self, command: Command) {
        if self.is_game_over() {
            return;
        }
        match command {
            Command::MoveLeft => {
                self.state.try_move(-1, 0);
            }
            Command::MoveRight => {
                self.state.try_move(1, 0);
            }
            Command::SoftDrop => self.drop_active(),
            Command::Rotate => {
                self.state.try_rotate();
            }
            // Quit is the host loop's business.
            Command::Quit => {}
        }
    }

    /// The lock transition: one downward step, and on failure place the
    /// piece, clear filled rows, and spawn the next piece (which may end
    /// the game).
    fn drop_active(&mut self) {
        if self.state.try_move(0, 1) {
            return;
        }
        self.state.lock_active();
        self.state.spawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_types::PieceKind;

    fn engine_with(kind: PieceKind) -> Engine {
        let mut state = GameState::new(1);
        assert!(state.spawn_kind(kind));
        Engine::from_state(state)
    }

    #[test]
    fn gravity_fires_on_the_interval() {
        let mut engine = engine_with(PieceKind::T);
        let y0 = engine.state().active().unwrap().y;

        for _ in 0..GRAVITY_INTERVAL_TICKS - 1 {
            engine.tick();
        }
        assert_eq!(engine.state().active().unwrap().y, y0);

        engine.tick();
        assert_eq!(engine.state().active().unwrap().y, y0 + 1);
    }

    #[test]
    fn soft_drop_does_not_reset_the_gravity_counter() {
        let mut engine = engine_with(PieceKind::T);
        for _ in 0..GRAVITY_INTERVAL_TICKS - 1 {
            engine.tick();
        }
        engine.handle(Command::SoftDrop);
        let y = engine.state().active().unwrap().y;

        // The very next tick is still the 30th: gravity fires on top of the
        // soft drop.
        engine.tick();
        assert_eq!(engine.state().active().unwrap().y, y + 1);
    }

    #[test]
    fn blocked_soft_drop_locks_and_respawns() {
        let mut engine = engine_with(PieceKind::O);
        while engine.state().active().unwrap().kind == PieceKind::O
            && engine.state().active().unwrap().y < 19
        {
            engine.handle(Command::SoftDrop);
        }
        // One more drop attempt is blocked by the floor: lock + respawn.
        engine.handle(Command::SoftDrop);

        let board = engine.state().board();
        assert_eq!(board.get(7, 19), Some(Some(PieceKind::O)));
        assert_eq!(board.get(8, 20), Some(Some(PieceKind::O)));
        let respawned = engine.state().active().unwrap();
        assert_eq!(respawned.rotation, 0);
        assert_eq!(respawned.y, 0);
    }

    #[test]
    fn game_over_freezes_the_engine() {
        let mut state = GameState::new(1);
        for x in 0..state.board().width() as i8 {
            state.board_mut().set(x, 0, Some(PieceKind::L));
        }
        let mut engine = Engine::from_state(state);

        assert!(engine.is_game_over());
        assert!(engine.state().active().is_none());

        // Ticks and commands are all rejected in the terminal phase.
        engine.tick();
        engine.handle(Command::MoveLeft);
        engine.handle(Command::Rotate);
        assert!(engine.is_game_over());
        assert!(engine.state().active().is_none());
    }
}
