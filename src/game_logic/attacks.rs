//! Pseudo-legal attack and move sets for a single piece.
//!
//! Sliders walk rays from a direction table and stop on the first occupied
//! square, including it. Jumpers apply a fixed offset table and ignore
//! blockers. Neither excludes own pieces; the move-list builder masks those
//! out afterwards.

use crate::game_state::{Bitboard, Color, Offset, PieceType, Square};

const NORTH: Offset = Offset::new(1, 0);
const SOUTH: Offset = Offset::new(-1, 0);
const WEST: Offset = Offset::new(0, -1);
const EAST: Offset = Offset::new(0, 1);
const NORTH_WEST: Offset = Offset::new(1, -1);
const NORTH_EAST: Offset = Offset::new(1, 1);
const SOUTH_WEST: Offset = Offset::new(-1, -1);
const SOUTH_EAST: Offset = Offset::new(-1, 1);

pub const ROOK_DIRECTIONS: [Offset; 4] = [NORTH, SOUTH, WEST, EAST];
pub const BISHOP_DIRECTIONS: [Offset; 4] = [NORTH_WEST, NORTH_EAST, SOUTH_WEST, SOUTH_EAST];
pub const QUEEN_DIRECTIONS: [Offset; 8] = [
    NORTH, SOUTH, WEST, EAST, NORTH_WEST, NORTH_EAST, SOUTH_WEST, SOUTH_EAST,
];

pub const KING_STEPS: [Offset; 8] = QUEEN_DIRECTIONS;
pub const KNIGHT_JUMPS: [Offset; 8] = [
    Offset::new(2, 1),
    Offset::new(2, -1),
    Offset::new(-2, 1),
    Offset::new(-2, -1),
    Offset::new(1, 2),
    Offset::new(1, -2),
    Offset::new(-1, 2),
    Offset::new(-1, -2),
];

/// Longest possible ray on an 8x8 board.
const MAX_RAY_LENGTH: usize = 7;

/// Squares reached from `origin` stepping in `direction` until a blocker.
///
/// The blocking square is part of the result.
pub fn ray(origin: Bitboard, blockers: Bitboard, direction: Offset) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    let mut step = origin;
    for _ in 0..MAX_RAY_LENGTH {
        step = step.shift(direction);
        attacks |= step;
        if step.is_empty() || step.intersects(blockers) {
            break;
        }
    }
    attacks
}

/// Union of the rays from `square` in every direction of `directions`.
pub fn slider_attacks(square: Square, blockers: Bitboard, directions: &[Offset]) -> Bitboard {
    let origin = Bitboard::from_square(square);
    directions
        .iter()
        .fold(Bitboard::EMPTY, |acc, &dir| acc | ray(origin, blockers, dir))
}

/// Union of single applications of every offset in `jumps`.
pub fn jump_attacks(square: Square, jumps: &[Offset]) -> Bitboard {
    let origin = Bitboard::from_square(square);
    jumps
        .iter()
        .fold(Bitboard::EMPTY, |acc, &jump| acc | origin.shift(jump))
}

/// The two diagonal-forward squares of a `color` pawn on `square`.
pub fn pawn_attacks(square: Square, color: Color) -> Bitboard {
    let pawn = Bitboard::from_square(square);
    let forward = color.forward();
    pawn.shift(Offset::new(forward, -1)) | pawn.shift(Offset::new(forward, 1))
}

/// Pawn destinations: captures onto `enemies`, a push onto an empty square,
/// and a double push from the start rank through two empty squares.
pub fn pawn_moves(square: Square, color: Color, occupied: Bitboard, enemies: Bitboard) -> Bitboard {
    let forward = Offset::new(color.forward(), 0);
    let captures = pawn_attacks(square, color) & enemies;

    let single = Bitboard::from_square(square).shift(forward) & !occupied;
    let double = if square.rank() == color.pawn_start_rank() {
        single.shift(forward) & !occupied
    } else {
        Bitboard::EMPTY
    };

    captures | single | double
}

/// Pseudo-legal destination set of one piece, own pieces not yet excluded.
pub fn piece_moves(
    piece_type: PieceType,
    square: Square,
    color: Color,
    occupied: Bitboard,
    enemies: Bitboard,
) -> Bitboard {
    match piece_type {
        PieceType::King => jump_attacks(square, &KING_STEPS),
        PieceType::Queen => slider_attacks(square, occupied, &QUEEN_DIRECTIONS),
        PieceType::Rook => slider_attacks(square, occupied, &ROOK_DIRECTIONS),
        PieceType::Bishop => slider_attacks(square, occupied, &BISHOP_DIRECTIONS),
        PieceType::Knight => jump_attacks(square, &KNIGHT_JUMPS),
        PieceType::Pawn => pawn_moves(square, color, occupied, enemies),
    }
}
