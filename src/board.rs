//! N x N board storage and cell queries.

use crate::types::{BoardSize, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Square board of cells, stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the given size.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.side() * size.side()],
        }
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Cells per side.
    pub fn side(&self) -> usize {
        self.size.side()
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Gets the cell at the given coordinates, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.side() && col < self.side() {
            Some(self.cells[row * self.side() + col])
        } else {
            None
        }
    }

    /// Sets a cell. Callers validate bounds first.
    pub(crate) fn put(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(row < self.side() && col < self.side());
        let side = self.side();
        self.cells[row * side + col] = cell;
    }

    /// Checks whether a cell is empty. Out-of-bounds coordinates are not empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// Checks whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// All empty cells as `(row, col)` pairs, in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let side = self.side();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| (i / side, i % side))
            .collect()
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let side = self.side();
        let mut result = String::new();
        for row in 0..side {
            for col in 0..side {
                let symbol = match self.cells[row * side + col] {
                    Cell::Empty => '.',
                    Cell::Occupied(Mark::X) => 'X',
                    Cell::Occupied(Mark::O) => 'O',
                };
                result.push(symbol);
                if col < side - 1 {
                    result.push('|');
                }
            }
            if row < side - 1 {
                result.push('\n');
            }
        }
        result
    }
}
