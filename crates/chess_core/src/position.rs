use std::fmt;
use std::str::FromStr;

use crate::error::ChessError;

pub const BOARD_SIZE: i8 = 8;

/// A square on the board, addressed by grid indices.
///
/// Row 0 is rank 8 (black's back rank) and column 0 is file `a`, so `(0, 0)` is `a8`.
/// Out-of-range values are allowed while scanning; check [`Position::is_on_board`]
/// before using one to index the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i8,
    pub column: i8,
}

impl Position {
    pub const fn new(row: i8, column: i8) -> Self {
        Self { row, column }
    }

    pub fn from_notation(notation: &str) -> Result<Self, ChessError> {
        let invalid = || ChessError::InvalidNotation(notation.to_owned());

        let bytes = notation.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }

        Ok(Self {
            row: (b'8' - rank) as i8,
            column: (file - b'a') as i8,
        })
    }

    pub fn to_notation(&self) -> Result<String, ChessError> {
        if !self.is_on_board() {
            return Err(ChessError::OutOfBounds {
                row: self.row,
                column: self.column,
            });
        }
        Ok(self.to_string())
    }

    /// Shifts the position without any bounds check.
    ///
    /// Coordinates saturate at the `i8` limits, which are off the board anyway.
    pub const fn offset(&self, row_delta: i8, column_delta: i8) -> Self {
        Self {
            row: self.row.saturating_add(row_delta),
            column: self.column.saturating_add(column_delta),
        }
    }

    pub const fn is_on_board(&self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.column >= 0 && self.column < BOARD_SIZE
    }

    /// Grid indices, or `OutOfBounds` if the position is off the board.
    pub(crate) fn indices(&self) -> Result<(usize, usize), ChessError> {
        if self.is_on_board() {
            Ok((self.row as usize, self.column as usize))
        } else {
            Err(ChessError::OutOfBounds {
                row: self.row,
                column: self.column,
            })
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Off-board positions fall back to raw indices
        if !self.is_on_board() {
            return write!(f, "({}, {})", self.row, self.column);
        }
        let file = (b'a' + self.column as u8) as char;
        let rank = (b'8' - self.row as u8) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Position {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s)
    }
}
