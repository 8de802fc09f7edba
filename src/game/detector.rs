//! Terminal-state detection by exhaustive four-in-a-row scan.
//!
//! Works on any board, including ones not reachable by legal play, so it
//! makes no assumption about move-count parity or who moved last.

use super::board::{Board, Cell, COLS, ROWS};
use super::player::Player;
use super::state::GameStatus;

/// Line families as `(dcol, drow, columns, rows)`: step per cell and the range
/// of starting cells that keep a four-run inside the grid. Scan order is
/// horizontal, vertical, ascending diagonal, descending diagonal.
const LINES: [(isize, isize, (usize, usize), (usize, usize)); 4] = [
    (1, 0, (0, COLS - 3), (0, ROWS)),
    (0, 1, (0, COLS), (0, ROWS - 3)),
    (1, 1, (0, COLS - 3), (0, ROWS - 3)),
    (1, -1, (0, COLS - 3), (3, ROWS)),
];

/// Classify a board as won, drawn or in progress.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(player) = winner(board) {
        return GameStatus::Won(player);
    }
    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// Owner of the first four-in-a-row found, if any.
pub fn winner(board: &Board) -> Option<Player> {
    for &(dc, dr, (c0, c1), (r0, r1)) in &LINES {
        // Horizontal runs are reported row by row.
        if dr == 0 {
            for row in r0..r1 {
                for col in c0..c1 {
                    if let Some(p) = run_owner(board, col, row, dc, dr) {
                        return Some(p);
                    }
                }
            }
        } else {
            for col in c0..c1 {
                for row in r0..r1 {
                    if let Some(p) = run_owner(board, col, row, dc, dr) {
                        return Some(p);
                    }
                }
            }
        }
    }
    None
}

#[inline]
fn run_owner(board: &Board, col: usize, row: usize, dc: isize, dr: isize) -> Option<Player> {
    let piece = board.get(col, row);
    if piece == Cell::Empty {
        return None;
    }
    let same = (1..4).all(|i| {
        let c = (col as isize + dc * i) as usize;
        let r = (row as isize + dr * i) as usize;
        board.get(c, r) == piece
    });
    if same {
        Player::from_cell(piece)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::fixtures::drawn_board;

    fn board_with(cells: &[(usize, usize, Cell)]) -> Board {
        let mut board = Board::new();
        for &(col, row, cell) in cells {
            board.set(col, row, cell);
        }
        board
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = drawn_board();
        assert!(board.is_full());
        assert_eq!(winner(&board), None);
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }

    #[test]
    fn test_horizontal_edges() {
        for row in 0..ROWS {
            for start in [0, 3] {
                let cells: Vec<_> = (start..start + 4)
                    .map(|c| (c, row, Cell::PlayerTwo))
                    .collect();
                let board = board_with(&cells);
                assert_eq!(
                    evaluate(&board),
                    GameStatus::Won(Player::PlayerTwo),
                    "row {row} start {start}"
                );
            }
        }
    }

    #[test]
    fn test_vertical_edges() {
        for col in [0, 6] {
            for start in [0, 2] {
                let cells: Vec<_> = (start..start + 4)
                    .map(|r| (col, r, Cell::PlayerOne))
                    .collect();
                let board = board_with(&cells);
                assert_eq!(evaluate(&board), GameStatus::Won(Player::PlayerOne));
            }
        }
    }

    #[test]
    fn test_ascending_diagonal_corners() {
        let low = board_with(&[
            (0, 0, Cell::PlayerOne),
            (1, 1, Cell::PlayerOne),
            (2, 2, Cell::PlayerOne),
            (3, 3, Cell::PlayerOne),
        ]);
        assert_eq!(winner(&low), Some(Player::PlayerOne));

        let high = board_with(&[
            (3, 2, Cell::PlayerTwo),
            (4, 3, Cell::PlayerTwo),
            (5, 4, Cell::PlayerTwo),
            (6, 5, Cell::PlayerTwo),
        ]);
        assert_eq!(winner(&high), Some(Player::PlayerTwo));
    }

    #[test]
    fn test_descending_diagonal_corners() {
        let top_left = board_with(&[
            (0, 5, Cell::PlayerTwo),
            (1, 4, Cell::PlayerTwo),
            (2, 3, Cell::PlayerTwo),
            (3, 2, Cell::PlayerTwo),
        ]);
        assert_eq!(winner(&top_left), Some(Player::PlayerTwo));

        let bottom_right = board_with(&[
            (3, 3, Cell::PlayerOne),
            (4, 2, Cell::PlayerOne),
            (5, 1, Cell::PlayerOne),
            (6, 0, Cell::PlayerOne),
        ]);
        assert_eq!(winner(&bottom_right), Some(Player::PlayerOne));
    }

    #[test]
    fn test_three_is_not_a_win() {
        let board = board_with(&[
            (0, 0, Cell::PlayerOne),
            (1, 0, Cell::PlayerOne),
            (2, 0, Cell::PlayerOne),
            (3, 0, Cell::PlayerTwo),
        ]);
        assert_eq!(evaluate(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_no_wrap_between_columns() {
        // Column-major neighbours: top of column 0 and bottom of column 1
        // are adjacent in memory but not on the board.
        let board = board_with(&[
            (0, 4, Cell::PlayerOne),
            (0, 5, Cell::PlayerOne),
            (1, 0, Cell::PlayerOne),
            (1, 1, Cell::PlayerOne),
        ]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_no_wrap_between_rows() {
        let board = board_with(&[
            (5, 0, Cell::PlayerTwo),
            (6, 0, Cell::PlayerTwo),
            (0, 1, Cell::PlayerTwo),
            (1, 1, Cell::PlayerTwo),
        ]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_mixed_run_is_not_a_win() {
        let board = board_with(&[
            (2, 0, Cell::PlayerOne),
            (2, 1, Cell::PlayerOne),
            (2, 2, Cell::PlayerTwo),
            (2, 3, Cell::PlayerOne),
        ]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let mut board = drawn_board();
        for col in 0..4 {
            board.set(col, 5, Cell::PlayerTwo);
        }
        assert_eq!(evaluate(&board), GameStatus::Won(Player::PlayerTwo));
    }
}
