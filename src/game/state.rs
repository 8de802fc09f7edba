use super::board::{Board, LegalColumns, MoveError, COLS};
use super::detector;
use super::Player;

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// Classification of a board by the terminal detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    /// The finished-game outcome, or `None` while the game is in progress.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(p) => Some(Outcome::Winner(p)),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }

    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Board plus the player to move. `Copy`, so every clone is an independent
/// value and simulating from a copy never touches the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    to_move: Player,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            to_move: Player::PlayerOne,
        }
    }

    pub fn new(board: Board, to_move: Player) -> Self {
        GameState { board, to_move }
    }

    /// Player whose piece the next move drops.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Columns that accept a move, ascending. Empty iff the board is full.
    pub fn legal_columns(&self) -> LegalColumns {
        self.board.legal_columns()
    }

    pub fn status(&self) -> GameStatus {
        detector::evaluate(&self.board)
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<Outcome> {
        self.status().outcome()
    }

    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply a move in place. Returns the row the piece landed in.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<usize, MoveError> {
        let row = self.board.drop_piece(column, self.to_move.to_cell())?;
        self.to_move = self.to_move.other();
        Ok(row)
    }

    /// Apply a column already known to be legal. Playout hot path.
    #[inline]
    pub(crate) fn play_legal(&mut self, column: usize) {
        debug_assert!(column < COLS && !self.board.is_column_full(column));
        let row = self.board.column_height(column);
        self.board.set(column, row, self.to_move.to_cell());
        self.to_move = self.to_move.other();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
