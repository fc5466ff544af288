//! Draw detection.

use super::win::check_winner;
use crate::board::Board;

/// Checks whether the game is drawn: every cell occupied, no winning run.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !check_winner(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoardSize, Cell, Mark};

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new(BoardSize::Three)));
    }

    #[test]
    fn test_full_board_without_run_is_draw() {
        let mut board = Board::new(BoardSize::Three);
        // X O X / O X O / O X O: full with no three-in-a-row
        let layout = [
            [Mark::X, Mark::O, Mark::X],
            [Mark::O, Mark::X, Mark::O],
            [Mark::O, Mark::X, Mark::O],
        ];
        for (row, marks) in layout.iter().enumerate() {
            for (col, mark) in marks.iter().enumerate() {
                board.put(row, col, Cell::Occupied(*mark));
            }
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_run_is_not_draw() {
        let mut board = Board::new(BoardSize::Three);
        for row in 0..3 {
            for col in 0..3 {
                board.put(row, col, Cell::Occupied(Mark::X));
            }
        }
        assert!(!is_draw(&board));
    }
}
