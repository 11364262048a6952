use log::trace;

use crate::error::Result;
use crate::game_state::{PieceType, Position};

use super::attacks::piece_moves;
use super::{Move, MoveList};

/// Pseudo-legal moves of every `piece_type` piece of the side to move.
///
/// Origins are visited in ascending square order, and each origin's
/// destinations in ascending square order. Moves may leave the mover's king
/// in check; castling, promotion and en-passant captures are not generated.
pub fn generate_moves(position: &Position, piece_type: PieceType) -> Result<MoveList> {
    let color = position.side_to_move();
    let own = position.occupancy(color);
    let enemies = position.occupancy(color.opposite());
    let occupied = own | enemies;

    let pieces = position.pieces(piece_type) & own;
    let count = pieces.population_count();
    let mut moves = MoveList::with_capacity(count as usize * piece_type.max_destinations());

    for n in 0..count {
        let origin = pieces.nth_set_bit_index(n)?;
        let targets = piece_moves(piece_type, origin, color, occupied, enemies) & !own;
        for destination in targets {
            moves.push(Move::new(origin, destination));
        }
    }

    trace!(
        "generated {} {} moves for {} {}s",
        moves.len(),
        piece_type,
        count,
        color
    );
    Ok(moves)
}

/// Moves of every piece type, king first and pawns last.
pub fn generate_all_moves(position: &Position) -> Result<MoveList> {
    let mut all = MoveList::new();
    for piece_type in PieceType::ALL {
        all.extend(generate_moves(position, piece_type)?);
    }
    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::{Color, Piece, Square};
    use test_case::test_case;

    fn sq(s: &str) -> Square {
        s.parse().expect("test square is valid")
    }

    fn mv(s: &str) -> Move {
        s.parse().expect("test move is valid")
    }

    fn destinations(moves: &MoveList, origin: &str) -> Vec<String> {
        moves
            .from_square(sq(origin))
            .map(|m| m.destination.to_string())
            .collect()
    }

    #[test_case(PieceType::King, 0)]
    #[test_case(PieceType::Queen, 0)]
    #[test_case(PieceType::Rook, 0)]
    #[test_case(PieceType::Bishop, 0)]
    #[test_case(PieceType::Knight, 4)]
    #[test_case(PieceType::Pawn, 16)]
    fn test_start_position_counts(piece_type: PieceType, expected: usize) {
        let moves = generate_moves(&Position::new_game(), piece_type).unwrap();
        assert_eq!(moves.len(), expected);
    }

    #[test]
    fn test_start_position_knight_moves_in_order() {
        let moves = generate_moves(&Position::new_game(), PieceType::Knight).unwrap();
        assert_eq!(
            moves.as_slice(),
            &[mv("b1a3"), mv("b1c3"), mv("g1f3"), mv("g1h3")]
        );
    }

    #[test]
    fn test_black_to_move_generates_black_moves() {
        let mut position = Position::new_game();
        position.set_side_to_move(Color::Black);

        let moves = generate_moves(&position, PieceType::Knight).unwrap();
        assert_eq!(
            moves.as_slice(),
            &[mv("b8a6"), mv("b8c6"), mv("g8f6"), mv("g8h6")]
        );

        let pawns = generate_moves(&position, PieceType::Pawn).unwrap();
        assert_eq!(destinations(&pawns, "e7"), vec!["e5", "e6"]);
    }

    #[test]
    fn test_rook_captures_but_stops_at_enemy() {
        let mut position = Position::empty(Color::White);
        position.put_piece(sq("a1"), Piece::new(PieceType::Rook, Color::White));
        position.put_piece(sq("a5"), Piece::new(PieceType::Pawn, Color::Black));
        position.put_piece(sq("c1"), Piece::new(PieceType::Bishop, Color::White));

        let moves = generate_moves(&position, PieceType::Rook).unwrap();
        assert_eq!(destinations(&moves, "a1"), vec!["b1", "a2", "a3", "a4", "a5"]);
    }

    #[test]
    fn test_knight_ignores_blockers_but_not_own_pieces() {
        let mut position = Position::empty(Color::White);
        position.put_piece(sq("d4"), Piece::new(PieceType::Knight, Color::White));
        for ring in ["c3", "c4", "c5", "d3", "d5", "e3", "e4", "e5"] {
            position.put_piece(sq(ring), Piece::new(PieceType::Pawn, Color::Black));
        }
        position.put_piece(sq("e6"), Piece::new(PieceType::Rook, Color::White));

        let moves = generate_moves(&position, PieceType::Knight).unwrap();
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(mv("d4e6")));
    }

    #[test]
    fn test_queen_in_open_position() {
        let mut position = Position::empty(Color::Black);
        position.put_piece(sq("d4"), Piece::new(PieceType::Queen, Color::Black));

        let moves = generate_moves(&position, PieceType::Queen).unwrap();
        assert_eq!(moves.len(), 27);
    }

    #[test]
    fn test_move_count_matches_destination_population() {
        let position = Position::new_game();
        for piece_type in PieceType::ALL {
            let moves = generate_moves(&position, piece_type).unwrap();
            let own = position.occupancy(Color::White);
            let expected: u32 = (position.pieces(piece_type) & own)
                .squares()
                .map(|origin| {
                    let enemies = position.occupancy(Color::Black);
                    let targets = piece_moves(
                        piece_type,
                        origin,
                        Color::White,
                        position.occupied(),
                        enemies,
                    ) & !own;
                    targets.population_count()
                })
                .sum();
            assert_eq!(moves.len(), expected as usize, "{piece_type}");
        }
    }

    #[test]
    fn test_generate_all_moves_at_start() {
        let moves = generate_all_moves(&Position::new_game()).unwrap();
        assert_eq!(moves.len(), 20);
        assert_eq!(moves.get(0), Ok(mv("b1a3")));
    }

    #[test]
    fn test_empty_board_has_no_moves() {
        let moves = generate_all_moves(&Position::empty(Color::White)).unwrap();
        assert!(moves.is_empty());
    }
}
