use super::{Piece, Position, Square};

/// Read-only per-square view of a board.
///
/// This is the only access the presentation layer needs: for each square,
/// which piece (if any) stands there. Implemented by [`Position`] and by
/// test doubles.
pub trait PieceLookup {
    /// Returns the piece on `square`, or `None` if it is empty.
    fn piece_at(&self, square: Square) -> Option<Piece>;
}

impl PieceLookup for Position {
    #[inline]
    fn piece_at(&self, square: Square) -> Option<Piece> {
        Position::piece_at(self, square)
    }
}
