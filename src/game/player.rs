use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    PlayerOne,
    PlayerTwo,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::PlayerOne => Cell::PlayerOne,
            Player::PlayerTwo => Cell::PlayerTwo,
        }
    }

    /// Owner of an occupied cell; `None` for empty cells.
    pub fn from_cell(cell: Cell) -> Option<Player> {
        match cell {
            Cell::PlayerOne => Some(Player::PlayerOne),
            Cell::PlayerTwo => Some(Player::PlayerTwo),
            Cell::Empty => None,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::PlayerOne => "PlayerOne",
            Player::PlayerTwo => "PlayerTwo",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::PlayerOne.other(), Player::PlayerTwo);
        assert_eq!(Player::PlayerTwo.other(), Player::PlayerOne);
    }

    #[test]
    fn test_cell_roundtrip() {
        for player in [Player::PlayerOne, Player::PlayerTwo] {
            assert_eq!(Player::from_cell(player.to_cell()), Some(player));
        }
        assert_eq!(Player::from_cell(Cell::Empty), None);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::PlayerOne.name(), "PlayerOne");
        assert_eq!(Player::PlayerTwo.name(), "PlayerTwo");
    }
}
