//! The original match snapshot: a flat column-major array of 42 cells where
//! `null` is empty, `0` the first player and `1` the second.

use serde::Deserialize;

use crate::error::WireError;
use crate::game::{Board, Cell, GameState, Player, CELLS};

use super::GAME_NAME;

#[derive(Debug, Clone, Deserialize)]
pub struct FlatMatch {
    #[serde(default)]
    pub game: Option<String>,
    pub status: FlatStatus,
    pub state: FlatBoard,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlatStatus {
    pub state: String,
    #[serde(default)]
    pub next_player: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlatBoard {
    pub board: Vec<Option<i64>>,
}

fn player_from_index(index: i64) -> Result<Player, WireError> {
    match index {
        0 => Ok(Player::PlayerOne),
        1 => Ok(Player::PlayerTwo),
        other => Err(WireError::UnknownPlayer(other.to_string())),
    }
}

impl FlatMatch {
    pub fn into_state(self) -> Result<GameState, WireError> {
        if let Some(game) = self.game {
            if game != GAME_NAME {
                return Err(WireError::WrongGame(game));
            }
        }
        if self.status.state != "in_progress" {
            return Err(WireError::MatchOver(self.status.state));
        }
        let to_move = self
            .status
            .next_player
            .ok_or(WireError::MissingField("status.next_player"))
            .and_then(player_from_index)?;

        let raw = self.state.board;
        if raw.len() != CELLS {
            return Err(WireError::BoardSize {
                expected: CELLS,
                found: raw.len(),
            });
        }
        let mut cells = [Cell::Empty; CELLS];
        for (index, value) in raw.into_iter().enumerate() {
            cells[index] = match value {
                None => Cell::Empty,
                Some(0) => Cell::PlayerOne,
                Some(1) => Cell::PlayerTwo,
                Some(other) => {
                    return Err(WireError::UnknownCell {
                        index,
                        value: other.to_string(),
                    })
                }
            };
        }

        super::finish(Board::from_cells(cells), to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(board: &[Option<i64>], state: &str, next: Option<i64>) -> String {
        serde_json::json!({
            "id": 1,
            "game": "connect4",
            "status": { "state": state, "next_player": next },
            "state": { "board": board },
        })
        .to_string()
    }

    fn parse(raw: &str) -> Result<GameState, WireError> {
        serde_json::from_str::<FlatMatch>(raw)?.into_state()
    }

    #[test]
    fn test_empty_board() {
        let state = parse(&payload(&[None; 42], "in_progress", Some(0))).unwrap();
        assert_eq!(state, GameState::initial());
    }

    #[test]
    fn test_column_major_indexing() {
        let mut board = vec![None; 42];
        board[2 * 6] = Some(1);
        board[2 * 6 + 1] = Some(0);
        let state = parse(&payload(&board, "in_progress", Some(1))).unwrap();
        assert_eq!(state.board().get(2, 0), Cell::PlayerTwo);
        assert_eq!(state.board().get(2, 1), Cell::PlayerOne);
        assert_eq!(state.to_move(), Player::PlayerTwo);
    }

    #[test]
    fn test_wrong_length() {
        let err = parse(&payload(&[None; 41], "in_progress", Some(0))).unwrap_err();
        assert!(matches!(
            err,
            WireError::BoardSize {
                expected: 42,
                found: 41
            }
        ));
    }

    #[test]
    fn test_unknown_sentinel() {
        let mut board = vec![None; 42];
        board[0] = Some(2);
        let err = parse(&payload(&board, "in_progress", Some(0))).unwrap_err();
        assert!(matches!(err, WireError::UnknownCell { index: 0, .. }));
    }

    #[test]
    fn test_finished_match_rejected() {
        let err = parse(&payload(&[None; 42], "over", Some(0))).unwrap_err();
        assert!(matches!(err, WireError::MatchOver(s) if s == "over"));
    }

    #[test]
    fn test_missing_next_player() {
        let err = parse(&payload(&[None; 42], "in_progress", None)).unwrap_err();
        assert!(matches!(err, WireError::MissingField("status.next_player")));
    }

    #[test]
    fn test_bad_next_player() {
        let err = parse(&payload(&[None; 42], "in_progress", Some(2))).unwrap_err();
        assert!(matches!(err, WireError::UnknownPlayer(_)));
    }

    #[test]
    fn test_floating_piece_rejected() {
        let mut board = vec![None; 42];
        board[3 * 6 + 2] = Some(0);
        let err = parse(&payload(&board, "in_progress", Some(1))).unwrap_err();
        assert!(matches!(err, WireError::FloatingPiece));
    }

    #[test]
    fn test_wrong_game() {
        let raw = serde_json::json!({
            "game": "chess",
            "status": { "state": "in_progress", "next_player": 0 },
            "state": { "board": vec![serde_json::Value::Null; 42] },
        })
        .to_string();
        let err = parse(&raw).unwrap_err();
        assert!(matches!(err, WireError::WrongGame(g) if g == "chess"));
    }
}
