//! Board fixtures shared by unit tests. Each call builds a fresh board.

use super::board::{Board, Cell, ROWS};

/// Full board without any four-in-a-row: even columns read X X O O X X
/// bottom-up, odd columns the inverse.
pub fn drawn_board() -> Board {
    let mut board = Board::new();
    for col in 0..7 {
        for row in 0..ROWS {
            let one = ((row / 2) % 2 == 0) == (col % 2 == 0);
            let cell = if one { Cell::PlayerOne } else { Cell::PlayerTwo };
            board.set(col, row, cell);
        }
    }
    board
}

/// Fill `column` bottom-up with an alternating pattern that cannot form a
/// vertical four.
pub fn fill_column(board: &mut Board, column: usize, first: Cell) {
    let second = match first {
        Cell::PlayerOne => Cell::PlayerTwo,
        _ => Cell::PlayerOne,
    };
    for row in 0..ROWS {
        let cell = if (row / 2) % 2 == 0 { first } else { second };
        board.set(column, row, cell);
    }
}
