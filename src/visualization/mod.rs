pub mod terminal;

pub use terminal::{DisplayError, render_bitboard, render_board, run_interactive_terminal};
