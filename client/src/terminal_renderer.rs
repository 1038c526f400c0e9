use std::io::Write;

use tictactoe_common::log;
use tictactoe_common::tictactoe::{BOARD_SIZE, Board, Mark, PlayerGlyphs, Renderer};

pub struct TerminalRenderer<W: Write> {
    out: W,
    glyphs: PlayerGlyphs,
    show_cell_hints: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, glyphs: PlayerGlyphs, show_cell_hints: bool) -> Self {
        Self {
            out,
            glyphs,
            show_cell_hints,
        }
    }

    pub fn out(&self) -> &W {
        &self.out
    }

    fn cell_text(&self, index: usize, mark: Mark) -> String {
        match mark.owner() {
            Some(player) => self.glyphs.glyph(player).to_string(),
            None if self.show_cell_hints => index.to_string(),
            None => " ".to_string(),
        }
    }

    fn draw(&mut self, board: &Board, status_message: &str) -> std::io::Result<()> {
        let width = self
            .glyphs
            .human
            .chars()
            .count()
            .max(self.glyphs.computer.chars().count())
            .max(1);

        writeln!(self.out)?;
        for (row_index, row) in board.cells().chunks(BOARD_SIZE).enumerate() {
            if row_index > 0 {
                let separator = vec!["-".repeat(width + 2); BOARD_SIZE].join("+");
                writeln!(self.out, "{}", separator)?;
            }
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(column, &mark)| {
                    let text = self.cell_text(row_index * BOARD_SIZE + column, mark);
                    format!(" {:^width$} ", text, width = width)
                })
                .collect();
            writeln!(self.out, "{}", cells.join("|"))?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "{}", status_message)?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, board: &Board, status_message: &str) {
        if let Err(e) = self.draw(board, status_message) {
            log!("Failed to draw board: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(renderer: &TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.out().clone()).unwrap()
    }

    #[test]
    fn test_renders_glyphs_and_hints() {
        let mut renderer = TerminalRenderer::new(Vec::new(), PlayerGlyphs::default(), true);
        let board = Board::new().with_move(0, Mark::Human).with_move(4, Mark::Computer);
        renderer.render(&board, "It is now: X's turn");

        let text = rendered(&renderer);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], " X | 1 | 2 ");
        assert_eq!(lines[2], "---+---+---");
        assert_eq!(lines[3], " 3 | O | 5 ");
        assert_eq!(lines.last(), Some(&"It is now: X's turn"));
    }

    #[test]
    fn test_renders_blank_cells_without_hints() {
        let mut renderer = TerminalRenderer::new(Vec::new(), PlayerGlyphs::new("×", "○"), false);
        renderer.render(&Board::new().with_move(8, Mark::Computer), "status");

        let text = rendered(&renderer);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "   |   |   ");
        assert_eq!(lines[5], "   |   | ○ ");
    }
}
