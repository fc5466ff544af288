//! Greedy move selection for the computer opponent.
//!
//! Single-ply policy, no game-tree search: win now, block the opponent's
//! win, take the center, otherwise pick a random empty cell. The first
//! matching branch commits the move and short-circuits the rest.

use crate::game::Game;
use crate::rules::check_winner;
use crate::types::{Cell, GameStatus, Mark};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// The computer always plays O.
pub const AI_MARK: Mark = Mark::O;

impl Game {
    /// Chooses and applies one move for the computer opponent.
    ///
    /// The collaborator invokes this after the thinking delay elapses, only
    /// when the computer is enabled, it is O's turn, and the game is not
    /// over. The blocking branch places O on the opponent's winning cell and
    /// hands the turn back; it can never itself win, because the win-now
    /// branch already proved no empty cell wins for O. The center and random
    /// branches check for a win but not a draw.
    #[instrument(skip(self, rng))]
    pub fn run_ai_turn(&mut self, rng: &mut impl Rng) {
        self.thinking = false;

        // Win now: try O in every empty cell, row-major
        for (row, col) in self.board.empty_cells() {
            self.board.put(row, col, Cell::Occupied(AI_MARK));
            if check_winner(&self.board) {
                debug!(row, col, "AI takes winning cell");
                self.status = GameStatus::Won(AI_MARK);
                return;
            }
            self.board.put(row, col, Cell::Empty);
        }

        // Block: try the opponent in every empty cell, claim the first
        // cell that would win for them
        for (row, col) in self.board.empty_cells() {
            self.board.put(row, col, Cell::Occupied(AI_MARK.opponent()));
            if check_winner(&self.board) {
                debug!(row, col, "AI blocks opponent");
                self.board.put(row, col, Cell::Occupied(AI_MARK));
                self.current_player = AI_MARK.opponent();
                return;
            }
            self.board.put(row, col, Cell::Empty);
        }

        // Take the center if available
        let (row, col) = self.board.size().center();
        if self.board.is_empty(row, col) {
            debug!(row, col, "AI takes center");
            self.commit(row, col);
            return;
        }

        // Fall back to a uniformly random empty cell
        if let Some(&(row, col)) = self.board.empty_cells().choose(rng) {
            debug!(row, col, "AI takes random cell");
            self.commit(row, col);
        }
    }

    /// Places O and finalizes: a win ends the game, anything else hands the
    /// turn back to the opponent.
    fn commit(&mut self, row: usize, col: usize) {
        self.board.put(row, col, Cell::Occupied(AI_MARK));
        if check_winner(&self.board) {
            self.status = GameStatus::Won(AI_MARK);
        } else {
            self.current_player = AI_MARK.opponent();
        }
    }
}
