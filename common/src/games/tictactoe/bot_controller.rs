//! Full-depth minimax for the computer side.
//!
//! The human is modelled as the maximizing side and the computer as the
//! minimizing one. A line completed by the human scores `BASE_PENALTY - depth`,
//! one completed by the computer scores `depth - BASE_PENALTY`, a full board
//! scores zero. `depth` counts plies from the root and starts at 1, so quicker
//! wins sit further from zero.
//!
//! The tree has at most 9! leaves, small enough to search exhaustively
//! without pruning or memoization.

use crate::log_debug;

use super::board::Board;
use super::error::InvalidStateError;
use super::types::{Mark, Player};
use super::win_detector::has_winner;

pub const BASE_PENALTY: f64 = 10.0;

/// Best score reachable from a position and the root-level cell that reaches it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    pub score: f64,
    pub index: Option<usize>,
}

pub fn select_move(board: &Board) -> Result<usize, InvalidStateError> {
    select_move_for(board, Player::Computer)
}

/// Same search with an arbitrary side to move, so the engine can also stand in for the human.
pub fn select_move_for(board: &Board, mover: Player) -> Result<usize, InvalidStateError> {
    validate_searchable(board)?;

    let outcome = search(board, mover, 1);
    let index = outcome.index.ok_or(InvalidStateError::Full)?;

    log_debug!(
        "{:?} plays cell {} (score {:.1}, {} candidates)",
        mover,
        index,
        outcome.score,
        board.count(Mark::Empty)
    );

    Ok(index)
}

/// Root candidates in enumeration order with the score the search assigns each.
pub fn score_moves(board: &Board, mover: Player) -> Result<Vec<(usize, f64)>, InvalidStateError> {
    validate_searchable(board)?;

    Ok(board
        .available_moves()
        .into_iter()
        .map(|index| (index, score_candidate(board, index, mover, 1)))
        .collect())
}

pub fn search(board: &Board, mover: Player, depth: u32) -> SearchOutcome {
    let mut best = SearchOutcome {
        score: worst_score(mover),
        index: None,
    };

    for index in board.available_moves() {
        let score = score_candidate(board, index, mover, depth);

        // Strict improvement only: on ties the earliest candidate stays.
        if is_improvement(mover, score, best.score) {
            best = SearchOutcome {
                score,
                index: Some(index),
            };
        }
    }

    best
}

fn score_candidate(board: &Board, index: usize, mover: Player, depth: u32) -> f64 {
    let next = board.with_move(index, mover.mark());

    if has_winner(mover.mark(), &next) {
        return terminal_score(mover, depth);
    }

    if next.is_full() {
        return 0.0;
    }

    search(&next, mover.opponent(), depth + 1).score
}

fn terminal_score(winner: Player, depth: u32) -> f64 {
    match winner {
        Player::Human => BASE_PENALTY - depth as f64,
        Player::Computer => depth as f64 - BASE_PENALTY,
    }
}

fn worst_score(mover: Player) -> f64 {
    match mover {
        Player::Human => f64::NEG_INFINITY,
        Player::Computer => f64::INFINITY,
    }
}

fn is_improvement(mover: Player, score: f64, best: f64) -> bool {
    match mover {
        Player::Human => score > best,
        Player::Computer => score < best,
    }
}

fn validate_searchable(board: &Board) -> Result<(), InvalidStateError> {
    let human_won = has_winner(Mark::Human, board);
    let computer_won = has_winner(Mark::Computer, board);

    if human_won && computer_won {
        return Err(InvalidStateError::Impossible("both sides have a completed line"));
    }

    let human_marks = board.count(Mark::Human);
    let computer_marks = board.count(Mark::Computer);
    if human_marks < computer_marks || human_marks - computer_marks > 1 {
        return Err(InvalidStateError::Impossible("mark counts break the turn order"));
    }

    if human_won || computer_won {
        return Err(InvalidStateError::Terminal);
    }

    if board.is_full() {
        return Err(InvalidStateError::Full);
    }

    Ok(())
}
