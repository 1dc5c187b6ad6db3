use std::collections::HashMap;
use std::fmt;

use log::debug;

use crate::{
    error::ChessError,
    moves::Move,
    piece::{Color, Piece, PieceId, PieceType},
    position::{Position, BOARD_SIZE},
};

const SIZE: usize = BOARD_SIZE as usize;

/// Back-rank order from column `a` to column `h`, identical for both colors.
pub const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// The 8x8 grid and every piece currently on it.
///
/// Cells hold piece ids; the pieces themselves live in an id-keyed table that also
/// records their position. A piece is in exactly one cell for as long as it is on
/// the board, and is dropped from the table when captured.
#[derive(Debug, Clone)]
pub struct Board {
    grid: [[Option<PieceId>; SIZE]; SIZE],
    pieces: HashMap<PieceId, Piece>,
    next_id: u32,
}

impl Board {
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.initialize();
        board
    }

    /// A board without any pieces, for building custom positions.
    pub fn empty() -> Self {
        Self {
            grid: [[None; SIZE]; SIZE],
            pieces: HashMap::new(),
            next_id: 0,
        }
    }

    /// Clears the board and sets up the starting position with freshly created pieces.
    ///
    /// Ids keep counting up across resets, so handles from an earlier game never
    /// resolve to a new piece.
    pub fn initialize(&mut self) {
        self.grid = [[None; SIZE]; SIZE];
        self.pieces.clear();

        // Setup pawns
        for column in 0..BOARD_SIZE {
            for color in [Color::Black, Color::White] {
                let position = Position::new(color.pawn_start_row(), column);
                self.insert_piece(PieceType::Pawn, color, position);
            }
        }

        // Setup other pieces
        for (column, &piece_type) in (0..BOARD_SIZE).zip(BACK_RANK.iter()) {
            for color in [Color::Black, Color::White] {
                let position = Position::new(color.back_row(), column);
                self.insert_piece(piece_type, color, position);
            }
        }

        debug!("board initialized with {} pieces", self.pieces.len());
    }

    /// Creates a piece from its type tag (`"pawn"`, `"rook"`, ...) and places it.
    pub fn create_piece(
        &mut self,
        tag: &str,
        color: Color,
        position: Position,
    ) -> Result<Piece, ChessError> {
        let piece_type = tag.parse::<PieceType>()?;
        self.place_piece(piece_type, color, position)
    }

    /// Creates a new piece on `position`, discarding whatever stood there.
    pub fn place_piece(
        &mut self,
        piece_type: PieceType,
        color: Color,
        position: Position,
    ) -> Result<Piece, ChessError> {
        let (row, column) = position.indices()?;
        if let Some(replaced) = self.grid[row][column].take() {
            self.pieces.remove(&replaced);
            debug!("piece {replaced} on {position} replaced");
        }
        Ok(self.insert_piece(piece_type, color, position))
    }

    // Callers guarantee the position is on the board and the cell is free.
    fn insert_piece(&mut self, piece_type: PieceType, color: Color, position: Position) -> Piece {
        let id = PieceId(self.next_id);
        self.next_id += 1;

        let piece = Piece::new(id, piece_type, color, position);
        self.grid[position.row as usize][position.column as usize] = Some(id);
        self.pieces.insert(id, piece);
        piece
    }

    pub fn get_piece_at(&self, position: Position) -> Result<Option<&Piece>, ChessError> {
        let (row, column) = position.indices()?;
        Ok(self.grid[row][column].and_then(|id| self.pieces.get(&id)))
    }

    pub fn piece_at_notation(&self, notation: &str) -> Result<Option<&Piece>, ChessError> {
        self.get_piece_at(Position::from_notation(notation)?)
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    pub fn position_of(&self, id: PieceId) -> Result<Position, ChessError> {
        self.piece(id)
            .map(|piece| piece.position)
            .ok_or(ChessError::PieceNotFound(id))
    }

    pub fn available_squares(&self, id: PieceId) -> Result<Vec<Position>, ChessError> {
        let piece = self.piece(id).ok_or(ChessError::PieceNotFound(id))?;
        piece.available_squares(self)
    }

    pub fn available_notations(&self, id: PieceId) -> Result<Vec<String>, ChessError> {
        self.available_squares(id)?
            .iter()
            .map(Position::to_notation)
            .collect()
    }

    /// Moves a piece to `destination`, capturing any occupant.
    ///
    /// No legality check happens here. Either the whole move is applied or, on error,
    /// nothing changes.
    pub fn move_piece(&mut self, id: PieceId, destination: Position) -> Result<Move, ChessError> {
        let (to_row, to_column) = destination.indices()?;
        let mut piece = self.pieces.remove(&id).ok_or(ChessError::PieceNotFound(id))?;
        let from = piece.position;

        let captured = if from == destination {
            None
        } else {
            self.grid[from.row as usize][from.column as usize] = None;
            self.grid[to_row][to_column]
                .replace(id)
                .and_then(|captured_id| self.pieces.remove(&captured_id))
        };

        piece.position = destination;
        self.pieces.insert(id, piece);

        match captured {
            Some(victim) => debug!(
                "{} {} {from} -> {destination} captures {} {}",
                piece.color, piece.piece_type, victim.color, victim.piece_type
            ),
            None => debug!("{} {} {from} -> {destination}", piece.color, piece.piece_type),
        }

        Ok(Move {
            piece: id,
            from,
            to: destination,
            captured,
        })
    }

    pub fn move_piece_to_notation(
        &mut self,
        id: PieceId,
        destination: &str,
    ) -> Result<Move, ChessError> {
        self.move_piece(id, Position::from_notation(destination)?)
    }

    /// Rows from row 0 (rank 8) down to row 7 (rank 1).
    pub fn rows(&self) -> impl Iterator<Item = [Option<&Piece>; SIZE]> + '_ {
        self.grid
            .iter()
            .map(move |row| (*row).map(|cell| cell.and_then(|id| self.pieces.get(&id))))
    }

    /// Every occupied square in row-major order.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (Position, &Piece)> + '_ {
        self.rows().enumerate().flat_map(|(row, cells)| {
            cells.into_iter().enumerate().filter_map(move |(column, cell)| {
                cell.map(|piece| (Position::new(row as i8, column as i8), piece))
            })
        })
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.rows().enumerate() {
            write!(f, "{} ", SIZE - row)?;
            for cell in cells {
                write!(f, " {}", cell.map_or('.', Piece::symbol))?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
