use super::board::BOARD_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    pub fn mark(&self) -> Mark {
        match self {
            Player::Human => Mark::Human,
            Player::Computer => Mark::Computer,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    Human,
    Computer,
}

impl Mark {
    pub fn owner(&self) -> Option<Player> {
        match self {
            Mark::Human => Some(Player::Human),
            Mark::Computer => Some(Player::Computer),
            Mark::Empty => None,
        }
    }

    pub fn opponent(&self) -> Option<Mark> {
        self.owner().map(|player| player.opponent().mark())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    HumanWon,
    ComputerWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }

    /// `None` both while the game runs and after a draw.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::HumanWon => Some(Player::Human),
            GameStatus::ComputerWon => Some(Player::Computer),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Human => GameStatus::HumanWon,
            Player::Computer => GameStatus::ComputerWon,
        }
    }
}

/// Column/row address of a cell, for collaborators that think in coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= BOARD_SIZE * BOARD_SIZE {
            return None;
        }
        Some(Self::new(index % BOARD_SIZE, index / BOARD_SIZE))
    }

    pub fn to_index(&self) -> Option<usize> {
        if self.x >= BOARD_SIZE || self.y >= BOARD_SIZE {
            return None;
        }
        Some(self.y * BOARD_SIZE + self.x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(player: Player, cells: [usize; 3]) -> Self {
        Self { player, cells }
    }

    pub fn start(&self) -> Option<Position> {
        Position::from_index(self.cells[0])
    }

    pub fn end(&self) -> Option<Position> {
        Position::from_index(self.cells[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_opponent_is_involution() {
        assert_eq!(Player::Human.opponent(), Player::Computer);
        assert_eq!(Player::Computer.opponent().opponent(), Player::Computer);
    }

    #[test]
    fn test_mark_owner_and_opponent() {
        assert_eq!(Mark::Human.owner(), Some(Player::Human));
        assert_eq!(Mark::Empty.owner(), None);
        assert_eq!(Mark::Computer.opponent(), Some(Mark::Human));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_status_winner() {
        assert_eq!(GameStatus::HumanWon.winner(), Some(Player::Human));
        assert_eq!(GameStatus::Draw.winner(), None);
        assert!(GameStatus::Draw.is_over());
        assert!(!GameStatus::InProgress.is_over());
    }

    #[test]
    fn test_position_index_conversion() {
        assert_eq!(Position::from_index(5), Some(Position::new(2, 1)));
        assert_eq!(Position::new(1, 2).to_index(), Some(7));
        assert_eq!(Position::from_index(9), None);
        assert_eq!(Position::new(3, 0).to_index(), None);
    }

    #[test]
    fn test_winning_line_endpoints() {
        let line = WinningLine::new(Player::Computer, [2, 4, 6]);
        assert_eq!(line.start(), Some(Position::new(2, 0)));
        assert_eq!(line.end(), Some(Position::new(0, 2)));
    }
}
