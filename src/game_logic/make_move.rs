use log::{debug, warn};

use crate::error::{MoveError, Result};
use crate::game_state::{Bitboard, Color, Piece, PieceType, Position};

use super::Move;

/// What happens to a piece standing on the destination square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureRule {
    /// The destination is left in the opposing piece mask, so the moved
    /// piece and the captured one share the square until something else
    /// clears it.
    #[default]
    Keep,
    /// The destination is cleared from every mask before the piece lands.
    Remove,
}

impl Position {
    /// Moves the piece on `mv.origin` to `mv.destination` and flips the side
    /// to move, using [`CaptureRule::Keep`].
    ///
    /// The move is not checked against the generated moves. A move onto a
    /// square held by the mover's own color is undefined.
    pub fn apply_move(&mut self, mv: Move) -> Result<()> {
        self.apply_move_with(mv, CaptureRule::Keep).map(|_| ())
    }

    /// Like [`Position::apply_move`], with an explicit capture rule.
    ///
    /// Returns the piece removed from the destination, which is always
    /// `None` under [`CaptureRule::Keep`]. A move from a square to itself
    /// fails with [`MoveError::NullMove`]. On error the position is unchanged.
    pub fn apply_move_with(&mut self, mv: Move, rule: CaptureRule) -> Result<Option<Piece>> {
        let piece_type = self
            .checked_mover(mv)
            .inspect_err(|e| warn!("rejected move {mv}: {e}"))?;
        let mover = if self.white.contains(mv.origin) {
            Color::White
        } else {
            Color::Black
        };

        let captured = match rule {
            CaptureRule::Keep => None,
            CaptureRule::Remove => self.remove_piece(mv.destination),
        };
        if let Some(piece) = captured {
            debug!("{mv} removes {:?} {}", piece.color, piece.piece_type);
        }

        if mover == Color::White {
            self.white ^= Bitboard::from_square(mv.origin) | Bitboard::from_square(mv.destination);
        }

        let mask = &mut self.pieces[piece_type.index()];
        mask.clear(mv.origin);
        mask.set(mv.destination);

        if piece_type == PieceType::Pawn && is_double_push(mv, mover) {
            self.record_en_passant(mover, mv.origin.file());
        }

        debug!("{mover} {piece_type} {mv}");
        self.side_to_move = self.side_to_move.opposite();
        Ok(captured)
    }

    fn checked_mover(&self, mv: Move) -> Result<PieceType> {
        if mv.origin == mv.destination {
            return Err(MoveError::NullMove(mv.origin).into());
        }
        self.piece_type_at(mv.origin)
    }

    /// Flags `file` after a `color` pawn double push. Never cleared here.
    fn record_en_passant(&mut self, color: Color, file: u8) {
        let bit = match color {
            Color::White => file,
            Color::Black => 8 + file,
        };
        self.en_passant |= 1 << bit;
    }
}

/// Two squares straight ahead from the mover's pawn start rank.
fn is_double_push(mv: Move, mover: Color) -> bool {
    let (origin, destination) = (mv.origin, mv.destination);
    origin.file() == destination.file()
        && origin.rank() == mover.pawn_start_rank()
        && destination.rank().abs_diff(origin.rank()) == 2
}
