use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the grid.
pub const SIZE: usize = 9;

/// Side length of one box (the 3x3 sub-grid).
pub const BOX: usize = 3;

/// A 9x9 grid of cells. `0` means empty; filled cells hold `1..=9`.
///
/// The grid never stores a value outside `0..=9`; setters enforce this.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[u8; SIZE]; SIZE],
}

impl Grid {
    /// Create an all-empty grid.
    pub fn empty() -> Self {
        Self {
            cells: [[0; SIZE]; SIZE],
        }
    }

    /// Value at `(row, col)`, 0-indexed.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// Store `value` at `(row, col)`, 0-indexed. `0` empties the cell.
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        debug_assert!(value <= 9, "grid values are 0..=9, got {value}");
        self.cells[row][col] = value;
    }

    /// True iff no cell is empty.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == 0).count()
    }

    /// Borrow the raw rows, for renderers and tests.
    pub fn rows(&self) -> &[[u8; SIZE]; SIZE] {
        &self.cells
    }

    /// Parse the compact 81-character form: `1..9` for filled cells,
    /// `.` or `0` for empty, row-major.
    pub fn from_compact(s: &str) -> Result<Self, ParseGridError> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != SIZE * SIZE {
            return Err(ParseGridError::BadLength(chars.len()));
        }
        let mut grid = Self::empty();
        for (i, &ch) in chars.iter().enumerate() {
            let value = match ch {
                '.' | '0' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => return Err(ParseGridError::BadChar(ch)),
            };
            grid.cells[i / SIZE][i % SIZE] = value;
        }
        Ok(grid)
    }

    /// Render the compact 81-character form, `.` for empty cells.
    pub fn to_compact(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|&v| if v == 0 { '.' } else { (b'0' + v) as char })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r != 0 && r % BOX == 0 {
                writeln!(f, "------+-------+------")?;
            }
            for (c, &v) in row.iter().enumerate() {
                if c != 0 && c % BOX == 0 {
                    write!(f, "| ")?;
                }
                let ch = if v == 0 { '.' } else { (b'0' + v) as char };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Failure to parse a compact grid string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseGridError {
    /// Input was not exactly 81 characters.
    BadLength(usize),
    /// Input contained a character other than `0..=9` or `.`.
    BadChar(char),
}

impl fmt::Display for ParseGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadLength(n) => write!(f, "expected 81 cells, got {n}"),
            Self::BadChar(ch) => write!(f, "invalid cell character {ch:?}"),
        }
    }
}

impl std::error::Error for ParseGridError {}
