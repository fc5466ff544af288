//! Win detection across variable board sizes.

use crate::board::Board;
use crate::types::Cell;

/// Checks whether any run of the board's win length exists.
///
/// Scans every anchor cell for a run of identical non-empty marks along
/// a row, a column, or either diagonal direction. A pure function of the
/// board contents, which lets the move heuristic use it as a what-if
/// oracle: place a mark, check, revert.
pub fn check_winner(board: &Board) -> bool {
    let side = board.side();
    let win = board.size().win_length();

    // Rows
    for row in 0..side {
        for col in 0..=(side - win) {
            if run_matches(board, row, col, 0, 1, win) {
                return true;
            }
        }
    }

    // Columns
    for row in 0..=(side - win) {
        for col in 0..side {
            if run_matches(board, row, col, 1, 0, win) {
                return true;
            }
        }
    }

    // Diagonals, both directions, anchored at the top of each run
    for row in 0..=(side - win) {
        for col in 0..=(side - win) {
            if run_matches(board, row, col, 1, 1, win) {
                return true;
            }
            if run_matches(board, row, col + win - 1, 1, -1, win) {
                return true;
            }
        }
    }

    false
}

/// True when `len` cells starting at the anchor, stepping by
/// `(d_row, d_col)`, all hold the anchor's non-empty mark.
fn run_matches(
    board: &Board,
    row: usize,
    col: usize,
    d_row: isize,
    d_col: isize,
    len: usize,
) -> bool {
    let anchor = board.get(row, col);
    let Some(Cell::Occupied(_)) = anchor else {
        return false;
    };
    (1..len).all(|k| {
        let r = row as isize + d_row * k as isize;
        let c = col as isize + d_col * k as isize;
        board.get(r as usize, c as usize) == anchor
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoardSize, Mark};

    fn place(board: &mut Board, cells: &[(usize, usize)], mark: Mark) {
        for &(row, col) in cells {
            board.put(row, col, Cell::Occupied(mark));
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert!(!check_winner(&Board::new(BoardSize::Three)));
        assert!(!check_winner(&Board::new(BoardSize::Five)));
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new(BoardSize::Three);
        place(&mut board, &[(0, 0), (0, 1), (0, 2)], Mark::X);
        assert!(check_winner(&board));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new(BoardSize::Three);
        place(&mut board, &[(0, 2), (1, 2), (2, 2)], Mark::O);
        assert!(check_winner(&board));
    }

    #[test]
    fn test_winner_descending_diagonal() {
        let mut board = Board::new(BoardSize::Three);
        place(&mut board, &[(0, 0), (1, 1), (2, 2)], Mark::O);
        assert!(check_winner(&board));
    }

    #[test]
    fn test_winner_ascending_diagonal() {
        let mut board = Board::new(BoardSize::Three);
        place(&mut board, &[(2, 0), (1, 1), (0, 2)], Mark::X);
        assert!(check_winner(&board));
    }

    #[test]
    fn test_mixed_marks_do_not_win() {
        let mut board = Board::new(BoardSize::Three);
        place(&mut board, &[(0, 0), (0, 2)], Mark::X);
        place(&mut board, &[(0, 1)], Mark::O);
        assert!(!check_winner(&board));
    }

    #[test]
    fn test_removing_any_cell_breaks_run() {
        let run = [(1, 0), (1, 1), (1, 2)];
        for &(row, col) in &run {
            let mut board = Board::new(BoardSize::Three);
            place(&mut board, &run, Mark::X);
            board.put(row, col, Cell::Empty);
            assert!(!check_winner(&board));
        }
    }

    #[test]
    fn test_four_by_four_wins_with_three() {
        let mut board = Board::new(BoardSize::Four);
        place(&mut board, &[(1, 1), (2, 2), (3, 3)], Mark::O);
        assert!(check_winner(&board));
    }

    #[test]
    fn test_interior_run_on_four_by_four() {
        let mut board = Board::new(BoardSize::Four);
        place(&mut board, &[(2, 1), (2, 2), (2, 3)], Mark::X);
        assert!(check_winner(&board));
    }

    #[test]
    fn test_five_by_five_needs_four() {
        let mut board = Board::new(BoardSize::Five);
        place(&mut board, &[(0, 0), (0, 1), (0, 2)], Mark::X);
        assert!(!check_winner(&board));
        board.put(0, 3, Cell::Occupied(Mark::X));
        assert!(check_winner(&board));
    }

    #[test]
    fn test_five_by_five_ascending_diagonal() {
        let mut board = Board::new(BoardSize::Five);
        place(&mut board, &[(4, 1), (3, 2), (2, 3), (1, 4)], Mark::O);
        assert!(check_winner(&board));
    }
}
