//! Game state machine: move application and terminal-state detection.

use crate::board::Board;
use crate::rules::check_winner;
use crate::types::{BoardSize, Cell, GameStatus, Mark};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Errors that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Cell is already occupied.
    #[display("Cell is already occupied")]
    CellOccupied,
    /// Game has already ended.
    #[display("Game is already over")]
    GameFinished,
    /// Coordinates fall outside the board.
    #[display("Coordinates out of bounds")]
    OutOfBounds,
}

/// A single game of tic-tac-toe.
///
/// Created fresh per session on size and mode selection, mutated move by
/// move, and dropped on return to the menu. The computer opponent, when
/// enabled, always plays [`Mark::O`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) current_player: Mark,
    pub(crate) status: GameStatus,
    pub(crate) ai_enabled: bool,
    pub(crate) thinking: bool,
}

impl Game {
    /// Creates a new game. `ai_enabled` is fixed for the life of the game.
    #[instrument]
    pub fn new(size: BoardSize, ai_enabled: bool) -> Self {
        Self {
            board: Board::new(size),
            current_player: Mark::X,
            status: GameStatus::InProgress,
            ai_enabled,
            thinking: false,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose turn it is.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, if the game ended with one.
    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }

    /// Checks whether the game has ended, by win or draw.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Checks whether the computer opponent is enabled.
    pub fn ai_enabled(&self) -> bool {
        self.ai_enabled
    }

    /// True while a computer move is pending. The collaborator driving the
    /// display uses this to gate input and schedule the thinking delay; the
    /// engine itself never waits.
    pub fn thinking(&self) -> bool {
        self.thinking
    }

    /// Places the current player's mark at the given coordinates.
    ///
    /// On success the move either ends the game (a win for the mover, or a
    /// draw when the board fills) or passes the turn to the other mark. When
    /// the turn passes to a computer-controlled O, the `thinking` flag is
    /// raised for the collaborator to pick up.
    ///
    /// # Errors
    ///
    /// Fails without mutating the board when the game is over, the cell is
    /// occupied, or the coordinates fall outside the board.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameFinished);
        }
        match self.board.get(row, col) {
            None => return Err(MoveError::OutOfBounds),
            Some(Cell::Occupied(_)) => return Err(MoveError::CellOccupied),
            Some(Cell::Empty) => {}
        }

        let mark = self.current_player;
        self.board.put(row, col, Cell::Occupied(mark));

        if check_winner(&self.board) {
            debug!(winner = %mark, "Game won");
            self.status = GameStatus::Won(mark);
        } else if self.board.is_full() {
            debug!("Game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.current_player = mark.opponent();
            if self.ai_enabled && self.current_player == Mark::O {
                self.thinking = true;
            }
        }
        Ok(self.status)
    }
}
