use std::fmt;

/// Zero-based cell coordinates inside a [`Grid`](super::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Position {
        Position {row, column}
    }

    pub fn below(&self) -> Position {
        Position::new(self.row + 1, self.column)
    }

    pub fn right(&self, offset: usize) -> Position {
        Position::new(self.row, self.column + offset)
    }
}

impl fmt::Display for Position {
    // Human-readable, one-based like spreadsheet applications show it
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:{}", self.row + 1, self.column + 1)
    }
}

/// Returns the cell with surrounding whitespace removed or an empty string for a missing one.
pub fn get_trimmed_cell<S: AsRef<str>>(row: &[S], column: usize) -> &str {
    row.get(column).map(|cell| cell.as_ref().trim()).unwrap_or_default()
}
