//! Core domain types for variable-size tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A player's symbol.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Mark {
    /// X moves first.
    X,
    /// O moves second; in games against the computer, O is the computer.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Unoccupied cell.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

/// Supported board sizes.
///
/// The win length is derived from the size. The 4x4 board keeps the
/// three-in-a-row rule; only 5x5 raises it to four.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum BoardSize {
    /// 3x3 board, three in a row wins.
    #[strum(serialize = "3 x 3")]
    Three,
    /// 4x4 board, three in a row wins.
    #[strum(serialize = "4 x 4")]
    Four,
    /// 5x5 board, four in a row wins.
    #[strum(serialize = "5 x 5")]
    Five,
}

impl BoardSize {
    /// Cells per side.
    pub fn side(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Four => 4,
            BoardSize::Five => 5,
        }
    }

    /// Number of consecutive same-mark cells required to win.
    pub fn win_length(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Four => 3,
            BoardSize::Five => 4,
        }
    }

    /// The center cell, rounding down on even sides.
    pub fn center(self) -> (usize, usize) {
        let mid = self.side() / 2;
        (mid, mid)
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won(Mark),
    /// Game ended with a full board and no winner.
    Draw,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_round_trip() {
        for mark in Mark::iter() {
            assert_eq!(mark.opponent().opponent(), mark);
        }
        assert_eq!(Mark::X.opponent(), Mark::O);
    }

    #[test]
    fn test_win_length_table() {
        assert_eq!(BoardSize::Three.win_length(), 3);
        assert_eq!(BoardSize::Four.win_length(), 3);
        assert_eq!(BoardSize::Five.win_length(), 4);
    }

    #[test]
    fn test_center_cell() {
        assert_eq!(BoardSize::Three.center(), (1, 1));
        assert_eq!(BoardSize::Four.center(), (2, 2));
        assert_eq!(BoardSize::Five.center(), (2, 2));
    }
}
