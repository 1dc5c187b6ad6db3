use thiserror::Error;

use crate::piece::PieceId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("invalid square notation: {0:?}")]
    InvalidNotation(String),
    #[error("position ({row}, {column}) is outside the board")]
    OutOfBounds { row: i8, column: i8 },
    #[error("piece {0} is not on the board")]
    PieceNotFound(PieceId),
    #[error("invalid piece type: {0:?}")]
    InvalidPieceType(String),
}
