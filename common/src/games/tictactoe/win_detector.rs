use super::board::Board;
use super::types::{Mark, Player, WinningLine};

pub const WINNING_COMBINATIONS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn has_winner(mark: Mark, board: &Board) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    WINNING_COMBINATIONS
        .iter()
        .any(|combination| is_line_of(board, combination, mark))
}

pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

pub fn check_win(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|line| line.player)
}

/// First completed combination in table order.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for combination in &WINNING_COMBINATIONS {
        let first = board.get(combination[0])?;
        let Some(player) = first.owner() else {
            continue;
        };
        if is_line_of(board, combination, first) {
            return Some(WinningLine::new(player, *combination));
        }
    }
    None
}

fn is_line_of(board: &Board, combination: &[usize; 3], mark: Mark) -> bool {
    combination
        .iter()
        .all(|&index| board.get(index) == Some(mark))
}
