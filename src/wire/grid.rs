//! Token-grid match snapshot: seven column arrays of six one-character
//! tokens, bottom row first. `X` is the first player, `O` the second, and
//! `" "`, `"."` or `""` mark an empty cell.

use serde::Deserialize;

use crate::error::WireError;
use crate::game::{Board, Cell, GameState, Player, COLS, ROWS};

use super::GAME_NAME;

#[derive(Debug, Clone, Deserialize)]
pub struct GridMatch {
    #[serde(default)]
    pub game: Option<String>,
    pub board: Vec<Vec<String>>,
    pub next_player: String,
}

fn parse_token(token: &str) -> Option<Cell> {
    match token {
        "" | " " | "." => Some(Cell::Empty),
        "X" | "x" => Some(Cell::PlayerOne),
        "O" | "o" => Some(Cell::PlayerTwo),
        _ => None,
    }
}

impl GridMatch {
    pub fn into_state(self) -> Result<GameState, WireError> {
        if let Some(game) = self.game {
            if game != GAME_NAME {
                return Err(WireError::WrongGame(game));
            }
        }
        let to_move = parse_token(&self.next_player)
            .and_then(Player::from_cell)
            .ok_or_else(|| WireError::UnknownPlayer(self.next_player.clone()))?;

        if self.board.len() != COLS || self.board.iter().any(|c| c.len() != ROWS) {
            return Err(WireError::GridShape);
        }
        let mut board = Board::new();
        for (col, column) in self.board.iter().enumerate() {
            for (row, token) in column.iter().enumerate() {
                let cell = parse_token(token).ok_or_else(|| WireError::UnknownCell {
                    index: col * ROWS + row,
                    value: token.clone(),
                })?;
                board.set(col, row, cell);
            }
        }

        super::finish(board, to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(columns: &[&str], next: &str) -> GridMatch {
        GridMatch {
            game: None,
            board: columns
                .iter()
                .map(|col| col.chars().map(|c| c.to_string()).collect())
                .collect(),
            next_player: next.to_string(),
        }
    }

    const EMPTY: &str = "......";

    #[test]
    fn test_bottom_row_first() {
        let m = grid(&["XO....", EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, "O....."], "X");
        let state = m.into_state().unwrap();
        assert_eq!(state.board().get(0, 0), Cell::PlayerOne);
        assert_eq!(state.board().get(0, 1), Cell::PlayerTwo);
        assert_eq!(state.board().get(6, 0), Cell::PlayerTwo);
        assert_eq!(state.to_move(), Player::PlayerOne);
    }

    #[test]
    fn test_space_and_empty_tokens() {
        let mut m = grid(&[EMPTY; 7], "o");
        m.board[1][0] = " ".to_string();
        m.board[2][0] = String::new();
        let state = m.into_state().unwrap();
        assert_eq!(state.board().piece_count(), 0);
        assert_eq!(state.to_move(), Player::PlayerTwo);
    }

    #[test]
    fn test_wrong_shape() {
        let m = grid(&[EMPTY; 6], "X");
        assert!(matches!(m.into_state(), Err(WireError::GridShape)));

        let m = grid(&["....", EMPTY, EMPTY, EMPTY, EMPTY, EMPTY, EMPTY], "X");
        assert!(matches!(m.into_state(), Err(WireError::GridShape)));
    }

    #[test]
    fn test_unknown_token() {
        let m = grid(&[EMPTY, "Z.....", EMPTY, EMPTY, EMPTY, EMPTY, EMPTY], "X");
        let err = m.into_state().unwrap_err();
        assert!(matches!(err, WireError::UnknownCell { index: 6, .. }));
    }

    #[test]
    fn test_next_player_must_be_a_piece() {
        let m = grid(&[EMPTY; 7], ".");
        assert!(matches!(m.into_state(), Err(WireError::UnknownPlayer(_))));
    }

    #[test]
    fn test_floating_piece_rejected() {
        let m = grid(&[EMPTY, EMPTY, "..X...", EMPTY, EMPTY, EMPTY, EMPTY], "O");
        assert!(matches!(m.into_state(), Err(WireError::FloatingPiece)));
    }
}
