use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::{MoveError, Result};
use crate::game_state::Square;

/// An (origin, destination) square pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub origin: Square,
    pub destination: Square,
}

impl Move {
    pub const fn new(origin: Square, destination: Square) -> Self {
        Self {
            origin,
            destination,
        }
    }
}

/// Coordinate notation, e.g. `e2e4`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin, self.destination)
    }
}

/// Error when parsing coordinate notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid move notation: '{0}' (expected e.g. 'e2e4')")]
pub struct MoveParseError(String);

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let err = || MoveParseError(s.to_string());
        if !s.is_ascii() || s.len() != 4 {
            return Err(err());
        }
        let origin = s[..2].parse().map_err(|_| err())?;
        let destination = s[2..].parse().map_err(|_| err())?;
        Ok(Move::new(origin, destination))
    }
}

/// Generated moves in insertion order.
///
/// Carries its own length, so there is no end-of-list sentinel to overrun.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub const fn new() -> Self {
        Self { moves: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            moves: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The move at `index`; fails with [`MoveError::PastEnd`] past the length.
    pub fn get(&self, index: usize) -> Result<Move> {
        self.moves.get(index).copied().ok_or_else(|| {
            MoveError::PastEnd {
                index,
                len: self.len(),
            }
            .into()
        })
    }

    pub fn contains(&self, mv: Move) -> bool {
        self.moves.contains(&mv)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Moves starting on `origin`, in list order.
    pub fn from_square(&self, origin: Square) -> impl Iterator<Item = Move> + '_ {
        self.moves.iter().copied().filter(move |mv| mv.origin == origin)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn extend(&mut self, other: MoveList) {
        self.moves.extend(other.moves);
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl FromIterator<Move> for MoveList {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self {
            moves: iter.into_iter().collect(),
        }
    }
}
