use std::io::{self, BufRead, Write};

use crate::feedback::{BoardFeedback, SquareFeedback, compute_feedback};
use crate::game_logic::{Game, GameConfig, Move};
use crate::game_state::{Bitboard, PieceLookup, PieceType, Square};

/// Error type for terminal display operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

/// Clears the screen and moves cursor to top-left.
#[inline]
fn clear_screen(w: &mut impl Write) -> io::Result<()> {
    write!(w, "\x1B[2J\x1B[H")
}

/// Renders a board as an 8×8 grid, rank 8 at the top.
///
/// White pieces are uppercase, black lowercase; highlighted squares get an
/// ANSI background matching their feedback type.
pub fn render_board(
    w: &mut impl Write,
    board: &impl PieceLookup,
    feedback: &BoardFeedback,
) -> Result<(), DisplayError> {
    for rank in (0..8).rev() {
        write!(w, " {} ", rank + 1)?;
        for file in 0..8 {
            let Some(square) = Square::from_coords(file, rank) else {
                continue;
            };
            let symbol = board.piece_at(square).map_or('·', |piece| piece.char());
            write!(w, "{}", format_square(symbol, feedback.get(square)))?;
        }
        writeln!(w)?;
    }
    writeln!(w, "    a  b  c  d  e  f  g  h")?;
    w.flush()?;
    Ok(())
}

/// Renders a bare bitboard: `X` for set bits, `·` otherwise.
pub fn render_bitboard(w: &mut impl Write, bb: Bitboard) -> Result<(), DisplayError> {
    for rank in (0..8).rev() {
        write!(w, " {} ", rank + 1)?;
        for file in 0..8 {
            let set = Square::from_coords(file, rank).is_some_and(|sq| bb.contains(sq));
            write!(w, " {} ", if set { 'X' } else { '·' })?;
        }
        writeln!(w)?;
    }
    writeln!(w, "    a  b  c  d  e  f  g  h")?;
    writeln!(w, "Bitboard: {:#018X} | Squares: {:02}", bb, bb.population_count())?;
    Ok(())
}

/// Map a cell and its feedback to an (optionally ANSI-colored) string.
fn format_square(symbol: char, feedback: Option<SquareFeedback>) -> String {
    match feedback {
        Some(SquareFeedback::Destination) => format!("\x1b[44m {symbol} \x1b[0m"),
        Some(SquareFeedback::Capture) => format!("\x1b[41m {symbol} \x1b[0m"),
        Some(SquareFeedback::Origin) => format!("\x1b[42m {symbol} \x1b[0m"),
        None => format!(" {symbol} "),
    }
}

/// Runs an interactive terminal session on stdin/stdout.
pub fn run_interactive_terminal(config: GameConfig) -> Result<(), DisplayError> {
    let stdin = io::stdin();
    run_session(&mut stdin.lock(), &mut io::stdout(), config)
}

/// Drives one session from `input`, writing the interface to `out`.
fn run_session(
    input: &mut impl BufRead,
    out: &mut impl Write,
    config: GameConfig,
) -> Result<(), DisplayError> {
    let mut game = Game::with_config(config);
    let mut feedback = BoardFeedback::new();

    clear_screen(out)?;
    draw_interface(out, &game, &feedback)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            continue;
        };

        match (command, parts.get(1)) {
            ("m", Some(arg)) => match arg.parse::<Move>() {
                Ok(mv) => match game.play(mv) {
                    Ok(_) => {
                        feedback = BoardFeedback::new();
                        clear_screen(out)?;
                        draw_interface(out, &game, &feedback)?;
                    }
                    Err(e) => writeln!(out, "❌ {e}")?,
                },
                Err(e) => writeln!(out, "❌ {e}")?,
            },
            ("s", Some(arg)) => match arg.parse::<Square>() {
                Ok(square) => match game.all_moves() {
                    Ok(moves) => {
                        feedback = compute_feedback(moves.as_slice(), game.position(), square);
                        clear_screen(out)?;
                        draw_interface(out, &game, &feedback)?;
                    }
                    Err(e) => writeln!(out, "❌ {e}")?,
                },
                Err(e) => writeln!(out, "Invalid square: {e}")?,
            },
            ("g", Some(arg)) => match arg.parse::<PieceType>() {
                Ok(piece_type) => match game.moves(piece_type) {
                    Ok(moves) => {
                        let listed: Vec<String> = moves.iter().map(Move::to_string).collect();
                        writeln!(out, "{} {piece_type} moves: {}", moves.len(), listed.join(" "))?;
                    }
                    Err(e) => writeln!(out, "❌ {e}")?,
                },
                Err(e) => writeln!(out, "{e}")?,
            },
            ("m", None) => writeln!(out, "Usage: m <move>  (e.g. m e2e4)")?,
            ("s", None) => writeln!(out, "Usage: s <square>")?,
            ("g", None) => writeln!(out, "Usage: g <piece>  (king, queen, rook, bishop, knight, pawn)")?,
            ("r", _) => {
                game.reset();
                feedback = BoardFeedback::new();
                clear_screen(out)?;
                draw_interface(out, &game, &feedback)?;
                writeln!(out, "\n🔄 Reset to initial state")?;
            }
            ("p", _) => {
                clear_screen(out)?;
                draw_interface(out, &game, &feedback)?;
            }
            ("q", _) => break,
            _ => writeln!(out, "Unknown command")?,
        }
    }
    Ok(())
}

/// Draws the complete interface: help text, side to move and board.
fn draw_interface(
    out: &mut impl Write,
    game: &Game,
    feedback: &BoardFeedback,
) -> Result<(), DisplayError> {
    writeln!(out, "♟️  Meowl Chess")?;
    writeln!(out)?;
    writeln!(
        out,
        "Commands: m <move> | s <square> | g <piece> | r (reset) | p (refresh) | q (quit)"
    )?;
    writeln!(out)?;
    render_board(out, game.position(), feedback)?;
    writeln!(
        out,
        "{} to move | ply {}",
        game.position().side_to_move(),
        game.history().len()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::Position;

    fn sq(s: &str) -> Square {
        s.parse().expect("test square is valid")
    }

    fn render_to_string(board: &impl PieceLookup, feedback: &BoardFeedback) -> String {
        let mut buf = Vec::new();
        render_board(&mut buf, board, feedback).expect("rendering to buffer should succeed");
        String::from_utf8(buf).expect("output should be valid UTF-8")
    }

    fn run_script(script: &str) -> String {
        let mut input = script.as_bytes();
        let mut out = Vec::new();
        run_session(&mut input, &mut out, GameConfig::default()).expect("session should succeed");
        String::from_utf8(out).expect("output should be valid UTF-8")
    }

    #[test]
    fn test_start_position_rows() {
        let output = render_to_string(&Position::new_game(), &BoardFeedback::new());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], " 8  r  n  b  q  k  b  n  r ");
        assert_eq!(lines[4], " 4  ·  ·  ·  ·  ·  ·  ·  · ");
        assert_eq!(lines[7], " 1  R  N  B  Q  K  B  N  R ");
        assert_eq!(lines[8], "    a  b  c  d  e  f  g  h");
    }

    #[test]
    fn test_empty_feedback_has_no_ansi_codes() {
        let output = render_to_string(&Position::new_game(), &BoardFeedback::new());
        assert!(!output.contains("\x1b[4"));
    }

    #[test]
    fn test_feedback_colors() {
        let mut feedback = BoardFeedback::new();
        feedback.set(sq("e2"), SquareFeedback::Origin);
        feedback.set(sq("e4"), SquareFeedback::Destination);
        feedback.set(sq("d7"), SquareFeedback::Capture);

        let output = render_to_string(&Position::new_game(), &feedback);

        assert!(output.contains("\x1b[42m P \x1b[0m"), "origin should be green");
        assert!(output.contains("\x1b[44m · \x1b[0m"), "destination should be blue");
        assert!(output.contains("\x1b[41m p \x1b[0m"), "capture should be red");
    }

    #[test]
    fn test_render_bitboard() {
        let mut buf = Vec::new();
        render_bitboard(&mut buf, Bitboard::RANK_1).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.contains(" 1  X  X  X  X  X  X  X  X "));
        assert!(output.contains("Bitboard: 0x00000000000000FF | Squares: 08"));
    }

    #[test]
    fn test_session_plays_moves() {
        let output = run_script("m e2e4\nm e7e5\nq\n");
        assert!(output.contains(" 4  ·  ·  ·  ·  P  ·  ·  · "));
        assert!(output.contains(" 5  ·  ·  ·  ·  p  ·  ·  · "));
        assert!(output.contains("white to move | ply 2"));
    }

    #[test]
    fn test_session_reports_bad_input() {
        let output = run_script("m e2e5\nm zz\ns k9\ng dragon\nx\n");
        assert!(output.contains("is not a generated move"));
        assert!(output.contains("invalid move notation"));
        assert!(output.contains("Invalid square"));
        assert!(output.contains("unknown piece type"));
        assert!(output.contains("Unknown command"));
    }

    #[test]
    fn test_session_lists_generated_moves() {
        let output = run_script("g knight\n");
        assert!(output.contains("4 knight moves: b1a3 b1c3 g1f3 g1h3"));
    }
}
