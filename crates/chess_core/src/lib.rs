// Core board-state and move-generation modules
pub mod board;
pub mod error;
pub mod moves;
pub mod piece;
pub mod position;

// Re-export main types for convenience
pub use board::Board;
pub use error::ChessError;
pub use moves::Move;
pub use piece::{Color, Piece, PieceId, PieceType};
pub use position::Position;
