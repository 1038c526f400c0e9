mod board;
mod bot_controller;
mod controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, CELL_COUNT};
pub use bot_controller::{BASE_PENALTY, SearchOutcome, score_moves, search, select_move, select_move_for};
pub use controller::{GameController, PlayerGlyphs, Renderer};
pub use error::{InvalidMoveError, InvalidStateError};
pub use game_state::TicTacToeGameState;
pub use types::{GameStatus, Mark, Player, Position, WinningLine};
pub use win_detector::{WINNING_COMBINATIONS, check_win, check_win_with_line, has_winner, is_full};
