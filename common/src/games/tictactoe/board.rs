use std::fmt;

use super::types::Mark;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Nine cells in row-major order:
/// ```text
/// 0 | 1 | 2
/// 3 | 4 | 5
/// 6 | 7 | 8
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    /// Copy of this board with `mark` placed at `index`. The receiver is untouched.
    pub fn with_move(&self, index: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[index] = mark;
        next
    }

    /// Empty cell indices in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row_index > 0 {
                writeln!(f, "---------")?;
            }
            let symbols: Vec<&str> = row
                .iter()
                .map(|cell| match cell {
                    Mark::Empty => " ",
                    Mark::Human => "X",
                    Mark::Computer => "O",
                })
                .collect();
            writeln!(f, "{}", symbols.join(" | "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.available_moves(), (0..CELL_COUNT).collect::<Vec<_>>());
        assert!(!board.is_full());
        assert_eq!(board.count(Mark::Empty), CELL_COUNT);
    }

    #[test]
    fn test_with_move_returns_copy() {
        let board = Board::new();
        let next = board.with_move(4, Mark::Human);
        assert_eq!(board.get(4), Some(Mark::Empty));
        assert_eq!(next.get(4), Some(Mark::Human));
        assert_eq!(next.available_moves(), vec![0, 1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_is_valid_move() {
        let board = Board::new().with_move(0, Mark::Computer);
        assert!(!board.is_valid_move(0));
        assert!(board.is_valid_move(8));
        assert!(!board.is_valid_move(9));
    }

    #[test]
    fn test_is_full() {
        use Mark::{Computer as O, Human as X};
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_display_renders_grid() {
        let board = Board::new().with_move(0, Mark::Human).with_move(4, Mark::Computer);
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "X |   |  ");
        assert_eq!(lines[2], "  | O |  ");
    }
}
