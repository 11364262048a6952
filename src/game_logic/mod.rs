pub mod attacks;
pub mod engine;
mod make_move;
pub mod movegen;
pub mod moves;

pub use engine::{Game, GameConfig};
pub use make_move::CaptureRule;
pub use movegen::{generate_all_moves, generate_moves};
pub use moves::{Move, MoveList, MoveParseError};
