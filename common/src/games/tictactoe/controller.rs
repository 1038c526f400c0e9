use crate::log;

use super::board::Board;
use super::bot_controller::select_move;
use super::error::InvalidMoveError;
use super::game_state::TicTacToeGameState;
use super::types::{GameStatus, Player};

/// Presentation side of the game. Called after every state change.
pub trait Renderer {
    fn render(&mut self, board: &Board, status_message: &str);
}

impl<F> Renderer for F
where
    F: FnMut(&Board, &str),
{
    fn render(&mut self, board: &Board, status_message: &str) {
        self(board, status_message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerGlyphs {
    pub human: String,
    pub computer: String,
}

impl PlayerGlyphs {
    pub fn new(human: impl Into<String>, computer: impl Into<String>) -> Self {
        Self {
            human: human.into(),
            computer: computer.into(),
        }
    }

    pub fn glyph(&self, player: Player) -> &str {
        match player {
            Player::Human => &self.human,
            Player::Computer => &self.computer,
        }
    }
}

impl Default for PlayerGlyphs {
    fn default() -> Self {
        Self::new("X", "O")
    }
}

pub struct GameController<R: Renderer> {
    state: TicTacToeGameState,
    renderer: R,
    glyphs: PlayerGlyphs,
}

impl<R: Renderer> GameController<R> {
    pub fn new(renderer: R, glyphs: PlayerGlyphs) -> Self {
        Self {
            state: TicTacToeGameState::new(),
            renderer,
            glyphs,
        }
    }

    pub fn start(&mut self) {
        self.state.reset();
        log!("New game started");
        self.render();
    }

    pub fn handle_reset(&mut self) {
        self.start();
    }

    /// Applies the human's choice and, unless that ended the game, the computer's reply.
    /// A rejected choice changes nothing and renders nothing.
    pub fn handle_human_move(&mut self, index: usize) -> Result<(), InvalidMoveError> {
        if !self.state.is_over() && self.state.current_turn() != Player::Human {
            return Err(InvalidMoveError::NotHumanTurn);
        }

        self.state.apply_move(index)?;
        log!("Human marked cell {}", index);
        self.render();

        if !self.state.is_over() {
            self.computer_turn();
        }

        if self.state.is_over() {
            log!("Game over: {:?}", self.state.status());
        }

        Ok(())
    }

    fn computer_turn(&mut self) {
        let index = match select_move(self.state.board()) {
            Ok(index) => index,
            Err(e) => {
                log!("Computer could not move: {}", e);
                return;
            }
        };

        match self.state.apply_move(index) {
            Ok(()) => {
                log!("Computer marked cell {}", index);
                self.render();
            }
            Err(e) => log!("Computer move {} rejected: {}", index, e),
        }
    }

    pub fn status_message(&self) -> String {
        match self.state.status() {
            GameStatus::InProgress => format!(
                "It is now: {}'s turn",
                self.glyphs.glyph(self.state.current_turn())
            ),
            GameStatus::HumanWon => format!("The winner is: {}", self.glyphs.human),
            GameStatus::ComputerWon => format!("The winner is: {}", self.glyphs.computer),
            GameStatus::Draw => "The Game ended in a tie".to_string(),
        }
    }

    fn render(&mut self) {
        let message = self.status_message();
        self.renderer.render(self.state.board(), &message);
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn glyphs(&self) -> &PlayerGlyphs {
        &self.glyphs
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
