use std::fmt;
use std::ops::Deref;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CELLS: usize = COLS * ROWS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single-character rendering used by `Display` and the grid wire format.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {0} is out of range (expected 0..7)")]
    InvalidColumn(usize),
}

/// A 7x6 Connect Four grid stored column-major: `index = column * ROWS + row`,
/// with row 0 at the bottom.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELLS],
}

#[inline]
const fn index(column: usize, row: usize) -> usize {
    column * ROWS + row
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Build a board from a flat column-major cell array.
    pub fn from_cells(cells: [Cell; CELLS]) -> Self {
        Board { cells }
    }

    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Get the cell at a specific position. Row 0 is the bottom.
    #[inline]
    pub fn get(&self, column: usize, row: usize) -> Cell {
        self.cells[index(column, row)]
    }

    /// Overwrite a single cell. Does not enforce gravity.
    pub fn set(&mut self, column: usize, row: usize, cell: Cell) {
        self.cells[index(column, row)] = cell;
    }

    /// A column is full when its top cell is occupied. Out-of-range columns
    /// count as full.
    #[inline]
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= COLS {
            return true;
        }
        !self.cells[index(column, ROWS - 1)].is_empty()
    }

    /// Lowest empty row in `column`, or `ROWS` when the column is full.
    #[inline]
    pub fn column_height(&self, column: usize) -> usize {
        let base = index(column, 0);
        self.cells[base..base + ROWS]
            .iter()
            .position(|c| c.is_empty())
            .unwrap_or(ROWS)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, column: usize, cell: Cell) -> Result<usize, MoveError> {
        if column >= COLS {
            return Err(MoveError::InvalidColumn(column));
        }
        if self.is_column_full(column) {
            return Err(MoveError::ColumnFull(column));
        }
        let row = self.column_height(column);
        self.cells[index(column, row)] = cell;
        Ok(row)
    }

    /// Columns whose top cell is empty, ascending.
    pub fn legal_columns(&self) -> LegalColumns {
        (0..COLS).filter(|&c| !self.is_column_full(c)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// True if some column has an occupied cell above an empty one.
    pub fn has_floating_pieces(&self) -> bool {
        (0..COLS).any(|col| {
            let height = self.column_height(col);
            (height..ROWS).any(|row| !self.get(col, row).is_empty())
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                write!(f, "{}", self.get(col, row).symbol())?;
            }
            writeln!(f)?;
        }
        for col in 0..COLS {
            write!(f, "{col}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\n{self}\n)")
    }
}

/// Fixed-capacity list of playable columns. Never allocates.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LegalColumns {
    columns: [usize; COLS],
    len: usize,
}

impl LegalColumns {
    pub fn new() -> Self {
        LegalColumns {
            columns: [0; COLS],
            len: 0,
        }
    }

    pub fn push(&mut self, column: usize) {
        debug_assert!(self.len < COLS, "more than {COLS} legal columns");
        self.columns[self.len] = column;
        self.len += 1;
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.columns[..self.len]
    }
}

impl Default for LegalColumns {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for LegalColumns {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        self.as_slice()
    }
}

impl FromIterator<usize> for LegalColumns {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut legal = LegalColumns::new();
        for column in iter {
            legal.push(column);
        }
        legal
    }
}

impl fmt::Debug for LegalColumns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
