use crate::game_logic::Move;
use crate::game_state::{PieceLookup, Square};

/// Type of visual feedback for an individual square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareFeedback {
    /// The selected piece
    Origin,
    /// The selected piece can move here
    Destination,
    /// The selected piece can move here onto another piece
    Capture,
}

/// Squares to highlight and how, as consumed by the terminal renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardFeedback {
    squares: Vec<(Square, SquareFeedback)>,
}

impl BoardFeedback {
    /// Create empty feedback (no highlights)
    #[inline]
    pub const fn new() -> Self {
        Self {
            squares: Vec::new(),
        }
    }

    #[inline]
    pub fn squares(&self) -> &[(Square, SquareFeedback)] {
        &self.squares
    }

    /// Get feedback for a specific square, if any
    #[inline]
    pub fn get(&self, square: Square) -> Option<SquareFeedback> {
        self.squares
            .iter()
            .find(|(sq, _)| *sq == square)
            .map(|(_, feedback)| *feedback)
    }

    /// Set feedback for a square, replacing any earlier entry.
    pub fn set(&mut self, square: Square, feedback: SquareFeedback) {
        match self.squares.iter_mut().find(|(sq, _)| *sq == square) {
            Some(entry) => entry.1 = feedback,
            None => self.squares.push((square, feedback)),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

impl From<Vec<(Square, SquareFeedback)>> for BoardFeedback {
    fn from(squares: Vec<(Square, SquareFeedback)>) -> Self {
        Self { squares }
    }
}

/// Highlights for the piece on `selected`.
///
/// The origin is always marked. Each move from `selected` marks its
/// destination, as a capture when another piece stands there. Generated
/// moves never land on the mover's own pieces, so any occupant is an enemy.
pub fn compute_feedback(moves: &[Move], board: &impl PieceLookup, selected: Square) -> BoardFeedback {
    std::iter::once((selected, SquareFeedback::Origin))
        .chain(
            moves
                .iter()
                .filter(|mv| mv.origin == selected)
                .map(|mv| classify_move(mv, board)),
        )
        .collect::<Vec<_>>()
        .into()
}

/// Classify a move as either a capture or regular destination
fn classify_move(mv: &Move, board: &impl PieceLookup) -> (Square, SquareFeedback) {
    if board.piece_at(mv.destination).is_some() {
        (mv.destination, SquareFeedback::Capture)
    } else {
        (mv.destination, SquareFeedback::Destination)
    }
}
