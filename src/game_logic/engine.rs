use log::{info, warn};

use crate::error::{MoveError, Result};
use crate::game_state::{Piece, PieceType, Position, Square};

use super::{CaptureRule, Move, MoveList, generate_all_moves, generate_moves};

/// Settings for a [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    pub capture_rule: CaptureRule,
}

impl GameConfig {
    /// Builds a config from command-line style flags.
    ///
    /// `--remove-captures` selects [`CaptureRule::Remove`]. Unknown flags are
    /// ignored with a warning.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        for arg in args {
            match arg.as_ref() {
                "--remove-captures" => config.capture_rule = CaptureRule::Remove,
                other => warn!("ignoring unknown argument '{other}'"),
            }
        }
        config
    }
}

/// A game session: the single mutable position plus its settings and the
/// moves played so far.
#[derive(Debug, Clone, Default)]
pub struct Game {
    /// The position, mutated in place as moves are played
    position: Position,

    config: GameConfig,

    /// Every move applied, oldest first
    history: Vec<Move>,
}

impl Game {
    #[inline]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self::from_position(Position::new_game(), config)
    }

    /// Creates a game from an existing position.
    pub fn from_position(position: Position, config: GameConfig) -> Self {
        info!("new game, capture rule {:?}", config.capture_rule);
        Self {
            position,
            config,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Get the piece at a given square, if any
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.piece_at(square)
    }

    /// Moves of one piece type for the side to move.
    pub fn moves(&self, piece_type: PieceType) -> Result<MoveList> {
        generate_moves(&self.position, piece_type)
    }

    /// Moves of every piece type for the side to move.
    pub fn all_moves(&self) -> Result<MoveList> {
        generate_all_moves(&self.position)
    }

    /// Plays `mv` if it is one of the generated moves.
    ///
    /// Returns the captured piece when the capture rule removed one.
    pub fn play(&mut self, mv: Move) -> Result<Option<Piece>> {
        if !self.all_moves()?.contains(mv) {
            warn!("{mv} was not generated for {}", self.position.side_to_move());
            return Err(MoveError::NotGenerated(mv).into());
        }
        self.play_unchecked(mv)
    }

    /// Plays `mv` without checking it against the generated moves.
    pub fn play_unchecked(&mut self, mv: Move) -> Result<Option<Piece>> {
        let captured = self.position.apply_move_with(mv, self.config.capture_rule)?;
        self.history.push(mv);
        Ok(captured)
    }

    /// Back to the starting layout, keeping the config.
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config);
    }
}
