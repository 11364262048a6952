//! Bitboard chess position and pseudo-legal move generation.
//!
//! A [`Position`] is six piece-type masks plus a white occupancy mask. Moves
//! are generated per piece type for the side to move and applied in place:
//!
//! ```
//! use meowl_chess::{PieceType, apply_move, generate_moves, new_game};
//!
//! let mut position = new_game();
//! let moves = generate_moves(&position, PieceType::Knight).unwrap();
//! assert_eq!(moves.len(), 4);
//!
//! apply_move(&mut position, moves.get(0).unwrap()).unwrap();
//! assert_eq!(position.side_to_move(), meowl_chess::Color::Black);
//! ```
//!
//! Generation is pseudo-legal only: no check detection, castling, promotion
//! or en-passant capture.

pub mod error;
pub mod feedback;
pub mod game_logic;
pub mod game_state;
pub mod visualization;

pub use error::{Error, MoveError, Result};
pub use game_logic::{
    CaptureRule, Game, GameConfig, Move, MoveList, generate_all_moves, generate_moves,
};
pub use game_state::{Bitboard, Color, Piece, PieceLookup, PieceType, Position, Square};

/// A position in the standard starting layout, white to move.
pub fn new_game() -> Position {
    Position::new_game()
}

/// Applies `mv` to `position` in place. See [`Position::apply_move`].
pub fn apply_move(position: &mut Position, mv: Move) -> Result<()> {
    position.apply_move(mv)
}
