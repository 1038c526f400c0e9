use super::board::{Board, CELL_COUNT};
use super::error::InvalidMoveError;
use super::types::{GameStatus, Player, WinningLine};
use super::win_detector::{check_win_with_line, has_winner, is_full};

/// Board plus turn and outcome. The human always opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    current_turn: Player,
    status: GameStatus,
    winning_line: Option<WinningLine>,
    last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Player::Human,
            status: GameStatus::InProgress,
            winning_line: None,
            last_move: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn apply_move(&mut self, index: usize) -> Result<(), InvalidMoveError> {
        if self.status.is_over() {
            return Err(InvalidMoveError::GameOver);
        }

        if index >= CELL_COUNT {
            return Err(InvalidMoveError::OutOfRange(index));
        }

        if !self.board.is_valid_move(index) {
            return Err(InvalidMoveError::Occupied(index));
        }

        self.board.set(index, self.current_turn.mark());
        self.last_move = Some(index);
        self.current_turn = self.current_turn.opponent();

        self.evaluate_terminal();

        Ok(())
    }

    /// Checks the side that just moved for a win, then the board for a draw.
    /// Only the last mover can have completed a line, so the other side is skipped.
    pub fn evaluate_terminal(&mut self) -> GameStatus {
        if self.status.is_over() || self.last_move.is_none() {
            return self.status;
        }

        let just_moved = self.current_turn.opponent();
        if has_winner(just_moved.mark(), &self.board) {
            self.status = GameStatus::won_by(just_moved);
            self.winning_line =
                check_win_with_line(&self.board).filter(|line| line.player == just_moved);
        } else if is_full(&self.board) {
            self.status = GameStatus::Draw;
        }

        self.status
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }
}

/// Every distinct position reachable through `apply_move` from a fresh game.
#[cfg(test)]
pub(crate) fn reachable_states() -> Vec<TicTacToeGameState> {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    let mut states = Vec::new();
    let mut pending = vec![TicTacToeGameState::new()];

    while let Some(state) = pending.pop() {
        if !seen.insert(state.board) {
            continue;
        }
        if !state.is_over() {
            for index in state.board.available_moves() {
                let mut next = state.clone();
                if next.apply_move(index).is_ok() {
                    pending.push(next);
                }
            }
        }
        states.push(state);
    }

    states
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::Mark;

    fn play(state: &mut TicTacToeGameState, moves: &[usize]) {
        for &index in moves {
            state.apply_move(index).unwrap();
        }
    }

    #[test]
    fn test_new_game_starts_with_human() {
        let state = TicTacToeGameState::new();
        assert_eq!(state.current_turn(), Player::Human);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.winner(), None);
        assert_eq!(*state.board(), Board::new());
    }

    #[test]
    fn test_apply_move_places_mark_and_flips_turn() {
        let mut state = TicTacToeGameState::new();
        state.apply_move(4).unwrap();
        assert_eq!(state.board().get(4), Some(Mark::Human));
        assert_eq!(state.current_turn(), Player::Computer);
        state.apply_move(0).unwrap();
        assert_eq!(state.board().get(0), Some(Mark::Computer));
        assert_eq!(state.current_turn(), Player::Human);
        assert_eq!(state.last_move(), Some(0));
    }

    #[test]
    fn test_apply_move_rejects_out_of_range() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(state.apply_move(9), Err(InvalidMoveError::OutOfRange(9)));
        assert_eq!(state, TicTacToeGameState::new());
    }

    #[test]
    fn test_apply_move_rejects_occupied_cell() {
        let mut state = TicTacToeGameState::new();
        state.apply_move(3).unwrap();
        let before = state.clone();
        assert_eq!(state.apply_move(3), Err(InvalidMoveError::Occupied(3)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_human_row_win_ends_game() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);
        assert!(state.is_over());
        assert_eq!(state.winner(), Some(Player::Human));
        assert_eq!(
            state.winning_line(),
            Some(WinningLine::new(Player::Human, [0, 1, 2]))
        );
    }

    #[test]
    fn test_computer_column_win_ends_game() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0, 2, 1, 5, 4, 8]);
        assert_eq!(state.status(), GameStatus::ComputerWon);
        assert_eq!(state.winner(), Some(Player::Computer));
    }

    #[test]
    fn test_moves_rejected_after_game_over() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);
        let before = state.clone();
        assert_eq!(state.apply_move(8), Err(InvalidMoveError::GameOver));
        assert_eq!(state, before);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut state = TicTacToeGameState::new();
        // X O X / X O O / O X X
        play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(state.is_over());
        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(state.winner(), None);
        assert_eq!(state.winning_line(), None);
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        let mut state = TicTacToeGameState::new();
        // X O X / O X O / O X X -- ninth move completes the 0-4-8 diagonal
        play(&mut state, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);
        assert_eq!(state.status(), GameStatus::HumanWon);
    }

    #[test]
    fn test_reset_after_draw_restores_start_state() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        state.reset();
        assert_eq!(state, TicTacToeGameState::new());
        play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(state.is_over());
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_reachable_positions_never_have_two_winners() {
        use crate::games::tictactoe::win_detector::has_winner;

        let states = reachable_states();
        assert_eq!(states.len(), 5478);
        for state in states {
            let board = state.board();
            assert!(
                !(has_winner(Mark::Human, board) && has_winner(Mark::Computer, board)),
                "two winners on\n{}",
                board
            );
            let lead = board.count(Mark::Human) - board.count(Mark::Computer);
            assert!(lead <= 1);
            assert_eq!(state.current_turn() == Player::Human, lead == 0);
        }
    }

    #[test]
    fn test_evaluate_terminal_is_idempotent() {
        let mut state = TicTacToeGameState::new();
        play(&mut state, &[0, 3, 1, 4, 2]);
        assert_eq!(state.evaluate_terminal(), GameStatus::HumanWon);
        assert_eq!(state.evaluate_terminal(), GameStatus::HumanWon);
        assert_eq!(TicTacToeGameState::new().evaluate_terminal(), GameStatus::InProgress);
    }
}
