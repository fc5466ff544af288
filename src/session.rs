//! Per-session ownership of a game, plus the collaborator-side helpers
//! for driving the computer opponent.

use crate::game::Game;
use crate::types::{BoardSize, Mark};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, instrument};

/// Delay between the human's move and the computer's reply.
pub const AI_THINK_DELAY: Duration = Duration::from_millis(1500);

/// How a game is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum GameMode {
    /// Two humans sharing the board.
    #[strum(serialize = "2 Players")]
    TwoPlayer,
    /// One human as X against the computer as O.
    #[strum(serialize = "vs AI")]
    VersusAi,
}

impl GameMode {
    /// Checks whether this mode enables the computer opponent.
    pub fn ai_enabled(self) -> bool {
        self == GameMode::VersusAi
    }
}

/// A single play session.
///
/// Created when the player picks a mode and size, dropped when they return
/// to the menu. The renderer/input collaborator feeds it moves and reads
/// state back; nothing persists beyond the session.
#[derive(Debug, Clone)]
pub struct GameSession {
    mode: GameMode,
    game: Game,
}

impl GameSession {
    /// Starts a session with a fresh game.
    #[instrument]
    pub fn new(size: BoardSize, mode: GameMode) -> Self {
        info!(%size, %mode, "Starting game session");
        Self {
            mode,
            game: Game::new(size, mode.ai_enabled()),
        }
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the game mutably, for applying moves.
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// Checks whether the collaborator should schedule a computer move:
    /// computer enabled, O to move, game still running.
    pub fn is_ai_turn(&self) -> bool {
        self.game.ai_enabled() && self.game.current_player() == Mark::O && !self.game.is_over()
    }
}

/// Poll-based thinking delay, owned by the collaborator.
///
/// The engine never reads a clock; the collaborator accumulates frame
/// times here and triggers [`Game::run_ai_turn`](crate::Game::run_ai_turn)
/// once the timer fires.
#[derive(Debug, Clone)]
pub struct ThinkTimer {
    delay: Duration,
    elapsed: Duration,
}

impl ThinkTimer {
    /// Creates a timer that fires after `delay`.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            elapsed: Duration::ZERO,
        }
    }

    /// Accumulates elapsed time; true once the delay has been reached.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(elapsed);
        self.elapsed >= self.delay
    }

    /// Rewinds the timer for the next computer turn.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

impl Default for ThinkTimer {
    fn default() -> Self {
        Self::new(AI_THINK_DELAY)
    }
}
