//! Translation between external match descriptions and [`GameState`].
//!
//! Each wire format is an adapter behind [`parse_external_state`]; the
//! engine itself only ever sees a validated game state.

mod flat;
mod grid;

use serde::{Deserialize, Serialize};

use crate::error::WireError;
use crate::game::{Board, GameState, Player};

pub use flat::FlatMatch;
pub use grid::GridMatch;

/// Name reported in every move response.
pub const GAME_NAME: &str = "connect4";

/// Supported match encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum WireFormat {
    /// Flat 42-cell array with `null`/`0`/`1` sentinels.
    FlatV1,
    /// Seven columns of six single-character tokens.
    GridV2,
    /// Try `FlatV1`, then `GridV2`.
    #[default]
    Auto,
}

/// Parse a raw match payload into a game state.
pub fn parse_external_state(raw: &str, format: WireFormat) -> Result<GameState, WireError> {
    match format {
        WireFormat::FlatV1 => serde_json::from_str::<FlatMatch>(raw)?.into_state(),
        WireFormat::GridV2 => serde_json::from_str::<GridMatch>(raw)?.into_state(),
        WireFormat::Auto => {
            let value: serde_json::Value = serde_json::from_str(raw)?;
            if let Ok(m) = FlatMatch::deserialize(&value) {
                return m.into_state();
            }
            if let Ok(m) = GridMatch::deserialize(&value) {
                return m.into_state();
            }
            Err(WireError::UnrecognizedFormat)
        }
    }
}

/// Response body naming the chosen column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    pub game: String,
    pub column: usize,
}

impl MoveResponse {
    pub fn new(column: usize) -> Self {
        MoveResponse {
            game: GAME_NAME.to_string(),
            column,
        }
    }
}

/// Serialize a chosen column as `{"game":"connect4","column":N}`.
pub fn format_move(column: usize) -> Result<String, WireError> {
    Ok(serde_json::to_string(&MoveResponse::new(column))?)
}

/// Shared final check for every adapter.
fn finish(board: Board, to_move: Player) -> Result<GameState, WireError> {
    if board.has_floating_pieces() {
        return Err(WireError::FloatingPiece);
    }
    Ok(GameState::new(board, to_move))
}
