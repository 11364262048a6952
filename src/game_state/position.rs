use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::{MoveError, Result};

use super::{Bitboard, Square};

/// Side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank direction of a forward pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// 0-based rank the side's pawns start on.
    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// The six piece types, one occupancy mask each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::King,
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Pawn,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Upper bound on destinations a single piece of this type can reach.
    pub const fn max_destinations(self) -> usize {
        match self {
            PieceType::King | PieceType::Knight => 8,
            PieceType::Queen => 27,
            PieceType::Rook | PieceType::Bishop => 14,
            PieceType::Pawn => 4,
        }
    }

    /// Uppercase letter of the piece type (`K`, `Q`, `R`, `B`, `N`, `P`).
    pub const fn char(self) -> char {
        match self {
            PieceType::King => 'K',
            PieceType::Queen => 'Q',
            PieceType::Rook => 'R',
            PieceType::Bishop => 'B',
            PieceType::Knight => 'N',
            PieceType::Pawn => 'P',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceType::King => "king",
            PieceType::Queen => "queen",
            PieceType::Rook => "rook",
            PieceType::Bishop => "bishop",
            PieceType::Knight => "knight",
            PieceType::Pawn => "pawn",
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error when parsing a piece type name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown piece type: '{0}'")]
pub struct PieceTypeParseError(String);

/// Accepts the full name or the single letter, case-insensitively.
impl FromStr for PieceType {
    type Err = PieceTypeParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        PieceType::ALL
            .into_iter()
            .find(|pt| {
                lower == pt.name()
                    || (lower.len() == 1 && lower.starts_with(pt.char().to_ascii_lowercase()))
            })
            .ok_or_else(|| PieceTypeParseError(s.to_string()))
    }
}

/// A piece type together with its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    pub const fn new(piece_type: PieceType, color: Color) -> Self {
        Self { piece_type, color }
    }

    /// Board letter: uppercase for white, lowercase for black.
    pub const fn char(self) -> char {
        match self.color {
            Color::White => self.piece_type.char(),
            Color::Black => self.piece_type.char().to_ascii_lowercase(),
        }
    }
}

/// A chess position as six piece-type masks plus a white occupancy mask.
///
/// Black occupancy is never stored: it is every occupied square that is not
/// white. The piece masks are pairwise disjoint and `white` is a subset of
/// their union.
///
/// `Position` is deliberately not `Copy`; look-ahead must `clone()` it.
#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    pub(crate) pieces: [Bitboard; 6],
    pub(crate) white: Bitboard,
    pub(crate) side_to_move: Color,
    /// Low byte: files where white just double-pushed. High byte: same for black.
    pub(crate) en_passant: u16,
}

impl Position {
    /// A board with no pieces.
    pub const fn empty(side_to_move: Color) -> Self {
        Self {
            pieces: [Bitboard::EMPTY; 6],
            white: Bitboard::EMPTY,
            side_to_move,
            en_passant: 0,
        }
    }

    /// The standard starting layout, white to move.
    pub fn new_game() -> Self {
        const BACK_RANK: [PieceType; 8] = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];

        let mut position = Self::empty(Color::White);
        for (file, piece_type) in (0u8..).zip(BACK_RANK) {
            position.pieces[piece_type.index()] |=
                Bitboard::file(file) & (Bitboard::RANK_1 | Bitboard::RANK_8);
        }
        position.pieces[PieceType::Pawn.index()] = Bitboard::RANK_2 | Bitboard::RANK_7;
        position.white = Bitboard::RANK_1 | Bitboard::RANK_2;
        position
    }

    #[inline]
    pub const fn pieces(&self, piece_type: PieceType) -> Bitboard {
        self.pieces[piece_type.index()]
    }

    /// Pieces of one type and color.
    #[inline]
    pub fn pieces_of(&self, piece_type: PieceType, color: Color) -> Bitboard {
        self.pieces(piece_type) & self.occupancy(color)
    }

    /// Union of all piece masks.
    pub fn occupied(&self) -> Bitboard {
        self.pieces
            .iter()
            .fold(Bitboard::EMPTY, |acc, &mask| acc | mask)
    }

    /// Squares held by `color`. Black is derived from white and the piece masks.
    pub fn occupancy(&self, color: Color) -> Bitboard {
        match color {
            Color::White => self.white,
            Color::Black => self.occupied() & !self.white,
        }
    }

    #[inline]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Raw en-passant candidate field: bit `file` for white, bit `8 + file` for black.
    #[inline]
    pub const fn en_passant_candidates(&self) -> u16 {
        self.en_passant
    }

    /// Files flagged as en-passant candidates for pawns of `color`.
    pub const fn en_passant_files(&self, color: Color) -> u8 {
        match color {
            Color::White => (self.en_passant & 0xFF) as u8,
            Color::Black => (self.en_passant >> 8) as u8,
        }
    }

    /// The single piece type whose mask holds `square`.
    ///
    /// Fails with [`MoveError::EmptyOrigin`] when no mask holds it and with
    /// [`MoveError::OverlappingPieces`] when several do.
    pub fn piece_type_at(&self, square: Square) -> Result<PieceType> {
        let mut found = PieceType::ALL
            .into_iter()
            .filter(|pt| self.pieces(*pt).contains(square));

        match (found.next(), found.next()) {
            (Some(piece_type), None) => Ok(piece_type),
            (None, _) => Err(MoveError::EmptyOrigin(square).into()),
            (Some(_), Some(_)) => Err(MoveError::OverlappingPieces(square).into()),
        }
    }

    /// Piece type and color on `square`, if any.
    ///
    /// When the masks overlap the first type in [`PieceType::ALL`] order wins;
    /// use [`Position::piece_type_at`] to detect that.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let piece_type = PieceType::ALL
            .into_iter()
            .find(|pt| self.pieces(*pt).contains(square))?;
        let color = if self.white.contains(square) {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(piece_type, color))
    }

    /// Places `piece` on `square`, replacing whatever was there.
    pub fn put_piece(&mut self, square: Square, piece: Piece) {
        self.remove_piece(square);
        self.pieces[piece.piece_type.index()].set(square);
        if piece.color == Color::White {
            self.white.set(square);
        }
    }

    /// Clears `square` from every mask, returning what stood there.
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        let removed = self.piece_at(square);
        for mask in &mut self.pieces {
            mask.clear(square);
        }
        self.white.clear(square);
        removed
    }

    /// Checks that the piece masks are disjoint and `white` is within them.
    pub fn is_consistent(&self) -> bool {
        let mut seen = Bitboard::EMPTY;
        for mask in self.pieces {
            if seen.intersects(mask) {
                return false;
            }
            seen |= mask;
        }
        (self.white & !seen).is_empty()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new_game()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Position");
        for piece_type in PieceType::ALL {
            s.field(
                piece_type.name(),
                &format_args!("{:#018X}", self.pieces(piece_type)),
            );
        }
        s.field("white", &format_args!("{:#018X}", self.white))
            .field("side_to_move", &self.side_to_move)
            .field("en_passant", &format_args!("{:#06X}", self.en_passant))
            .finish()
    }
}
