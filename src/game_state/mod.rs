pub mod bitboard;
mod interop;
pub mod position;
pub mod square;
pub mod traits;

pub use bitboard::{Bitboard, Offset, Squares};
pub use position::{Color, Piece, PieceType, PieceTypeParseError, Position};
pub use square::{NUM_SQUARES, Square, SquareParseError};
pub use traits::PieceLookup;
