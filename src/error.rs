use thiserror::Error;

use crate::game_logic::Move;
use crate::game_state::Square;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations surfaced by the bit primitives, generators and mutator.
///
/// None of these are expected under correct internal usage; they exist so a
/// caller bug fails loudly instead of producing a silently wrong board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Trailing zero count requested for an empty bitboard.
    #[error("trailing zero count of an empty bitboard is undefined")]
    InvalidArgument,

    /// Requested the `n`-th set bit of a bitboard with only `count` set bits.
    #[error("requested set bit {n} of a bitboard with {count} set bits")]
    OutOfRange { n: u32, count: u32 },

    #[error("invalid move: {0}")]
    InvalidMove(#[from] MoveError),
}

/// Reasons a move cannot be applied or read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// No piece mask holds the origin square.
    #[error("no piece on origin square {0}")]
    EmptyOrigin(Square),

    /// More than one piece mask holds the origin square.
    #[error("origin square {0} is claimed by more than one piece type")]
    OverlappingPieces(Square),

    /// Origin and destination are the same square.
    #[error("move from {0} to itself")]
    NullMove(Square),

    /// A move list was indexed past its length.
    #[error("index {index} is past the end of a {len}-move list")]
    PastEnd { index: usize, len: usize },

    /// The move is not among the moves generated for the position.
    #[error("{0} is not a generated move in this position")]
    NotGenerated(Move),
}
