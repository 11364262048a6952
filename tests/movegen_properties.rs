use std::collections::HashSet;

use meowl_chess::game_logic::attacks::{
    BISHOP_DIRECTIONS, KING_STEPS, KNIGHT_JUMPS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS, jump_attacks,
    pawn_attacks, slider_attacks,
};
use meowl_chess::{
    Bitboard, CaptureRule, Color, Game, GameConfig, Move, MoveList, Piece, PieceType, Position,
    Square, apply_move, generate_all_moves, generate_moves, new_game,
};
use shakmaty::{CastlingMode, Chess, Position as _, fen::Fen};
use test_case::test_case;

fn sq(s: &str) -> Square {
    s.parse().expect("test square is valid")
}

fn mv(s: &str) -> Move {
    s.parse().expect("test move is valid")
}

fn destinations(moves: &MoveList, origin: &str) -> HashSet<String> {
    moves
        .from_square(sq(origin))
        .map(|m| m.destination.to_string())
        .collect()
}

fn set(squares: &[&str]) -> HashSet<String> {
    squares.iter().map(|s| s.to_string()).collect()
}

fn chess_from_fen(fen: &str) -> Chess {
    fen.parse::<Fen>()
        .expect("invalid FEN")
        .into_position(CastlingMode::Standard)
        .expect("invalid position")
}

/// Deterministic xorshift, enough to spread occupancy bits and pick moves.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }
}

fn occupancy_samples() -> Vec<Bitboard> {
    let mut rng = XorShift(0x9E37_79B9_7F4A_7C15);
    let mut samples = vec![Bitboard::EMPTY, new_game().occupied()];
    for _ in 0..32 {
        samples.push(Bitboard::new(rng.next() & rng.next()));
    }
    samples
}

// ---------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------

#[test]
fn start_position_rooks_have_no_moves() {
    let moves = generate_moves(&new_game(), PieceType::Rook).unwrap();
    assert!(moves.is_empty());
}

#[test]
fn opened_file_reaches_up_to_next_blocker() {
    let mut position = new_game();
    position.remove_piece(sq("a2"));

    let moves = generate_moves(&position, PieceType::Rook).unwrap();

    assert_eq!(
        destinations(&moves, "a1"),
        set(&["a2", "a3", "a4", "a5", "a6", "a7"])
    );
    assert!(destinations(&moves, "h1").is_empty());
}

#[test]
fn pawn_double_push_only_from_start_square() {
    let mut position = new_game();

    let moves = generate_moves(&position, PieceType::Pawn).unwrap();
    assert_eq!(destinations(&moves, "e2"), set(&["e3", "e4"]));

    apply_move(&mut position, mv("e2e4")).unwrap();
    apply_move(&mut position, mv("a7a6")).unwrap();

    let moves = generate_moves(&position, PieceType::Pawn).unwrap();
    assert_eq!(destinations(&moves, "e4"), set(&["e5"]));
}

#[test]
fn advanced_pawn_offers_diagonal_captures() {
    let mut position = new_game();
    for m in ["e2e4", "d7d5", "a2a3", "f7f5"] {
        apply_move(&mut position, mv(m)).unwrap();
    }

    let moves = generate_moves(&position, PieceType::Pawn).unwrap();
    assert_eq!(destinations(&moves, "e4"), set(&["d5", "e5", "f5"]));
}

// ---------------------------------------------------------------
// Properties
// ---------------------------------------------------------------

#[test_case(CaptureRule::Remove, false; "any move with capture removal")]
#[test_case(CaptureRule::Keep, true; "quiet moves keeping captures")]
fn random_games_keep_invariants(capture_rule: CaptureRule, quiet_only: bool) {
    let mut rng = XorShift(0x2545_F491_4F6C_DD1D);

    for _ in 0..8 {
        let mut game = Game::with_config(GameConfig { capture_rule });
        for _ in 0..120 {
            let position = game.position();
            let moves: Vec<Move> = generate_all_moves(position)
                .unwrap()
                .into_iter()
                .filter(|m| !quiet_only || position.piece_at(m.destination).is_none())
                .collect();
            if moves.is_empty() {
                break;
            }

            let pick = moves[(rng.next() % moves.len() as u64) as usize];
            game.play(pick).unwrap();

            let position = game.position();
            assert!(position.is_consistent(), "after {pick}: {position:?}");
            let white = position.occupancy(Color::White);
            assert_eq!(white & !position.occupied(), Bitboard::EMPTY);
        }
    }
}

#[test]
fn move_count_equals_destination_population() {
    let mut position = new_game();
    for m in ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "d2d3"] {
        apply_move(&mut position, mv(m)).unwrap();
    }

    for piece_type in PieceType::ALL {
        let moves = generate_moves(&position, piece_type).unwrap();
        let mut by_origin = 0;
        for origin in position.pieces_of(piece_type, position.side_to_move()) {
            by_origin += moves.from_square(origin).count();
        }
        assert_eq!(moves.len(), by_origin, "{piece_type}");
        assert_eq!(
            moves.iter().collect::<HashSet<_>>().len(),
            moves.len(),
            "{piece_type} moves should be unique"
        );
    }
}

#[test]
fn adjacent_blocker_ends_ray() {
    for (blocker, beyond) in [("d5", "d6"), ("e5", "f6"), ("c4", "b4"), ("c3", "b2")] {
        let mut position = Position::empty(Color::White);
        position.put_piece(sq("d4"), Piece::new(PieceType::Queen, Color::White));
        position.put_piece(sq(blocker), Piece::new(PieceType::Knight, Color::Black));

        let moves = generate_moves(&position, PieceType::Queen).unwrap();
        let reached = destinations(&moves, "d4");

        assert!(reached.contains(blocker), "{blocker} should be capturable");
        assert!(!reached.contains(beyond), "{beyond} should be shadowed");
    }
}

#[test_case(PieceType::Knight; "knight")]
#[test_case(PieceType::King; "king")]
fn jump_pieces_ignore_intervening_pieces(piece_type: PieceType) {
    let mut open = Position::empty(Color::White);
    open.put_piece(sq("e4"), Piece::new(piece_type, Color::White));
    let open_moves = generate_moves(&open, piece_type).unwrap();

    let mut crowded = open.clone();
    for square in ["d3", "d4", "d5", "e3", "e5", "f3", "f4", "f5"] {
        crowded.put_piece(sq(square), Piece::new(PieceType::Pawn, Color::Black));
    }
    let crowded_moves = generate_moves(&crowded, piece_type).unwrap();

    assert_eq!(
        destinations(&open_moves, "e4"),
        destinations(&crowded_moves, "e4")
    );
}

#[test]
fn own_pieces_are_never_destinations() {
    let position = Position::from_board(
        chess_from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 0 1")
            .board(),
        Color::White,
    );
    let own = position.occupancy(Color::White);

    for m in &generate_all_moves(&position).unwrap() {
        assert!(!own.contains(m.destination), "{m} lands on own piece");
    }
}

// ---------------------------------------------------------------
// Cross-checks against shakmaty
// ---------------------------------------------------------------

#[test]
fn slider_attacks_match_shakmaty() {
    for occupied in occupancy_samples() {
        for square in Square::all() {
            let s = shakmaty::Square::from(square);
            let o = shakmaty::Bitboard::from(occupied);
            assert_eq!(
                slider_attacks(square, occupied, &ROOK_DIRECTIONS),
                Bitboard::from(shakmaty::attacks::rook_attacks(s, o)),
                "rook on {square}"
            );
            assert_eq!(
                slider_attacks(square, occupied, &BISHOP_DIRECTIONS),
                Bitboard::from(shakmaty::attacks::bishop_attacks(s, o)),
                "bishop on {square}"
            );
            assert_eq!(
                slider_attacks(square, occupied, &QUEEN_DIRECTIONS),
                Bitboard::from(shakmaty::attacks::queen_attacks(s, o)),
                "queen on {square}"
            );
        }
    }
}

#[test]
fn jump_and_pawn_attacks_match_shakmaty() {
    for square in Square::all() {
        let s = shakmaty::Square::from(square);
        assert_eq!(
            jump_attacks(square, &KNIGHT_JUMPS),
            Bitboard::from(shakmaty::attacks::knight_attacks(s)),
            "knight on {square}"
        );
        assert_eq!(
            jump_attacks(square, &KING_STEPS),
            Bitboard::from(shakmaty::attacks::king_attacks(s)),
            "king on {square}"
        );
        for color in [Color::White, Color::Black] {
            assert_eq!(
                pawn_attacks(square, color),
                Bitboard::from(shakmaty::attacks::pawn_attacks(color.into(), s)),
                "{color} pawn on {square}"
            );
        }
    }
}

/// Positions without checks, pins, castling, promotion or en passant, where
/// pseudo-legal and legal move sets coincide.
#[test_case("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1"; "start white")]
#[test_case("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - - 0 1"; "start black")]
#[test_case("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w - - 2 3"; "open game white")]
#[test_case("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b - - 2 3"; "open game black")]
#[test_case("4k3/8/r7/8/2N1B3/8/1Q6/4K3 w - - 0 1"; "open board pieces")]
fn generated_moves_match_shakmaty_legal_moves(fen: &str) {
    let chess = chess_from_fen(fen);
    let position = Position::from_board(chess.board(), chess.turn().into());

    let ours: HashSet<(shakmaty::Square, shakmaty::Square)> = generate_all_moves(&position)
        .unwrap()
        .into_iter()
        .map(|m| (m.origin.into(), m.destination.into()))
        .collect();
    let theirs: HashSet<(shakmaty::Square, shakmaty::Square)> = chess
        .legal_moves()
        .into_iter()
        .filter_map(|m| Some((m.from()?, m.to())))
        .collect();

    assert_eq!(ours, theirs);
}
