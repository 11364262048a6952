//! Conversions to and from [`shakmaty`] board types.
//!
//! These let positions be set up from FEN and handed to tooling that
//! performs full legality checks, which this crate does not.

use super::{Bitboard, Color, Piece, PieceType, Position, Square};

impl From<PieceType> for shakmaty::Role {
    fn from(piece_type: PieceType) -> Self {
        match piece_type {
            PieceType::King => shakmaty::Role::King,
            PieceType::Queen => shakmaty::Role::Queen,
            PieceType::Rook => shakmaty::Role::Rook,
            PieceType::Bishop => shakmaty::Role::Bishop,
            PieceType::Knight => shakmaty::Role::Knight,
            PieceType::Pawn => shakmaty::Role::Pawn,
        }
    }
}

impl From<Color> for shakmaty::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::White => shakmaty::Color::White,
            Color::Black => shakmaty::Color::Black,
        }
    }
}

impl From<shakmaty::Color> for Color {
    fn from(color: shakmaty::Color) -> Self {
        match color {
            shakmaty::Color::White => Color::White,
            shakmaty::Color::Black => Color::Black,
        }
    }
}

impl From<Piece> for shakmaty::Piece {
    fn from(piece: Piece) -> Self {
        shakmaty::Piece {
            role: piece.piece_type.into(),
            color: piece.color.into(),
        }
    }
}

impl From<Square> for shakmaty::Square {
    fn from(square: Square) -> Self {
        shakmaty::Square::new(u32::from(square.value()))
    }
}

impl From<Bitboard> for shakmaty::Bitboard {
    fn from(bb: Bitboard) -> Self {
        shakmaty::Bitboard(bb.value())
    }
}

impl From<shakmaty::Bitboard> for Bitboard {
    fn from(bb: shakmaty::Bitboard) -> Self {
        Bitboard::new(bb.0)
    }
}

impl Position {
    /// Builds a position from a shakmaty board.
    ///
    /// shakmaty keeps its role masks disjoint, so the result is consistent.
    pub fn from_board(board: &shakmaty::Board, side_to_move: Color) -> Self {
        let mut position = Position::empty(side_to_move);
        for piece_type in PieceType::ALL {
            position.pieces[piece_type.index()] = board.by_role(piece_type.into()).into();
        }
        position.white = board.by_color(shakmaty::Color::White).into();
        position
    }

    /// Converts to a shakmaty board.
    ///
    /// Where the piece masks overlap, [`Position::piece_at`] decides which
    /// piece is exported.
    pub fn to_board(&self) -> shakmaty::Board {
        let mut board = shakmaty::Board::empty();
        for square in self.occupied() {
            if let Some(piece) = self.piece_at(square) {
                board.set_piece_at(square.into(), piece.into());
            }
        }
        board
    }
}
