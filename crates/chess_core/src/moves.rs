use log::trace;

use crate::{
    board::Board,
    error::ChessError,
    piece::{Color, Piece, PieceId, PieceType},
    position::Position,
};

type Direction = (i8, i8);

const ROOK_DIRECTIONS: [Direction; 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];
const BISHOP_DIRECTIONS: [Direction; 4] = [(-1, 1), (-1, -1), (1, 1), (1, -1)];
const ROYAL_DIRECTIONS: [Direction; 8] = [
    (-1, 0),
    (1, 0),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, -1),
    (1, 1),
    (1, -1),
];
const KNIGHT_OFFSETS: [Direction; 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// A committed move, as returned by [`Board::move_piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub piece: PieceId,
    pub from: Position,
    pub to: Position,
    pub captured: Option<Piece>,
}

impl Move {
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl Piece {
    /// Resolves where this piece currently stands on `board`.
    ///
    /// Fails with `PieceNotFound` if the piece has been captured or belongs to another board.
    pub fn get_position(&self, board: &Board) -> Result<Position, ChessError> {
        board.position_of(self.id())
    }

    /// Destination squares reachable by this piece, captures included.
    ///
    /// The order is stable: directions in their fixed order, nearest squares first.
    /// Check, castling, en passant and promotion are not considered.
    pub fn available_squares(&self, board: &Board) -> Result<Vec<Position>, ChessError> {
        let origin = self.get_position(board)?;

        let squares = match self.piece_type {
            PieceType::Pawn => pawn_squares(board, origin, self.color)?,
            PieceType::Rook => scan(board, origin, self.color, &ROOK_DIRECTIONS, true)?,
            PieceType::Bishop => scan(board, origin, self.color, &BISHOP_DIRECTIONS, true)?,
            PieceType::Queen => scan(board, origin, self.color, &ROYAL_DIRECTIONS, true)?,
            PieceType::King => scan(board, origin, self.color, &ROYAL_DIRECTIONS, false)?,
            PieceType::Knight => scan(board, origin, self.color, &KNIGHT_OFFSETS, false)?,
        };

        trace!(
            "{} {} on {origin} has {} available squares",
            self.color,
            self.piece_type,
            squares.len()
        );
        Ok(squares)
    }
}

/// Steps from `origin` along each direction until the edge or the first occupied square.
///
/// An enemy-occupied square is included and ends the ray, a friendly one ends it without
/// being included. With `repeat` off each direction is a single step.
fn scan(
    board: &Board,
    origin: Position,
    color: Color,
    directions: &[Direction],
    repeat: bool,
) -> Result<Vec<Position>, ChessError> {
    let mut squares = Vec::new();

    for &(row_delta, column_delta) in directions {
        let mut current = origin;
        loop {
            current = current.offset(row_delta, column_delta);
            if !current.is_on_board() {
                break;
            }

            match board.get_piece_at(current)? {
                None => squares.push(current),
                Some(occupant) => {
                    if occupant.color != color {
                        squares.push(current);
                    }
                    break;
                }
            }

            if !repeat {
                break;
            }
        }
    }

    Ok(squares)
}

fn pawn_squares(
    board: &Board,
    origin: Position,
    color: Color,
) -> Result<Vec<Position>, ChessError> {
    let mut squares = Vec::new();
    let direction = color.pawn_direction();

    // Forward moves never capture
    let one_step = origin.offset(direction, 0);
    if one_step.is_on_board() && board.get_piece_at(one_step)?.is_none() {
        squares.push(one_step);

        if origin.row == color.pawn_start_row() {
            let two_step = origin.offset(2 * direction, 0);
            if two_step.is_on_board() && board.get_piece_at(two_step)?.is_none() {
                squares.push(two_step);
            }
        }
    }

    // Diagonals only when an enemy stands there
    for column_delta in [-1, 1] {
        let target = origin.offset(direction, column_delta);
        if !target.is_on_board() {
            continue;
        }
        if let Some(occupant) = board.get_piece_at(target)? {
            if occupant.color != color {
                squares.push(target);
            }
        }
    }

    Ok(squares)
}
