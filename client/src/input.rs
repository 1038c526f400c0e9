use tictactoe_common::tictactoe::{CELL_COUNT, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    Reset,
    Quit,
    Help,
}

pub const HELP: &str =
    "Enter a cell index (0-8) or a column and row (\"2 0\"), 'r' to restart, 'q' to quit";

/// Accepts a cell index, an `x y` coordinate pair, or one of the word commands.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim().to_ascii_lowercase();
    match trimmed.as_str() {
        "r" | "reset" | "restart" => return Ok(Command::Reset),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "h" | "help" | "?" => return Ok(Command::Help),
        "" => return Err(HELP.to_string()),
        _ => {}
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [index] => {
            let index: usize = index
                .parse()
                .map_err(|_| format!("'{}' is not a cell index. {}", line.trim(), HELP))?;
            if index >= CELL_COUNT {
                return Err(format!("Cell index must be below {}", CELL_COUNT));
            }
            Ok(Command::Place(index))
        }
        [x, y] => {
            let (Ok(x), Ok(y)) = (x.parse::<usize>(), y.parse::<usize>()) else {
                return Err(format!("'{}' is not a coordinate pair. {}", line.trim(), HELP));
            };
            Position::new(x, y)
                .to_index()
                .map(Command::Place)
                .ok_or_else(|| format!("Coordinates ({}, {}) are off the board", x, y))
        }
        _ => Err(HELP.to_string()),
    }
}
