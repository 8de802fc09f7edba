//! Core Connect Four game logic: column-major board, player types, terminal
//! detection and value-semantics game state.

mod board;
pub mod detector;
#[cfg(test)]
pub(crate) mod fixtures;
mod player;
mod state;

pub use board::{Board, Cell, LegalColumns, MoveError, CELLS, COLS, ROWS};
pub use player::Player;
pub use state::{GameState, GameStatus, Outcome};
