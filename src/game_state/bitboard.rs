use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::error::{Error, Result};

use super::Square;

/// A bitboard: one bit per square, bit 0 = a1, bit 63 = h8.
///
/// Ranks are contiguous bytes, so a vertical step is a shift by 8 and a
/// horizontal step is a shift by 1 masked against the edge file it would
/// otherwise wrap onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(u64);

/// A (rank, file) displacement, positive toward rank 8 and file h.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub rank: i8,
    pub file: i8,
}

impl Offset {
    pub const fn new(rank: i8, file: i8) -> Self {
        Self { rank, file }
    }
}

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);
    pub const FULL: Bitboard = Bitboard(u64::MAX);

    pub const FILE_A: Bitboard = Bitboard(0x0101_0101_0101_0101);
    pub const FILE_H: Bitboard = Bitboard(0x8080_8080_8080_8080);
    pub const RANK_1: Bitboard = Bitboard(0x0000_0000_0000_00FF);
    pub const RANK_2: Bitboard = Bitboard(0x0000_0000_0000_FF00);
    pub const RANK_7: Bitboard = Bitboard(0x00FF_0000_0000_0000);
    pub const RANK_8: Bitboard = Bitboard(0xFF00_0000_0000_0000);

    /// Creates a new bitboard with the given value.
    pub const fn new(value: u64) -> Self {
        Bitboard(value)
    }

    /// Returns the underlying u64 value.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn from_square(square: Square) -> Self {
        Bitboard(1 << square.value())
    }

    /// Bitboard of every square on the given 0-based rank. Empty past rank 7.
    pub const fn rank(rank: u8) -> Self {
        if rank < 8 {
            Bitboard(Self::RANK_1.0 << (8 * rank as u32))
        } else {
            Self::EMPTY
        }
    }

    /// Bitboard of every square on the given 0-based file. Empty past file 7.
    pub const fn file(file: u8) -> Self {
        if file < 8 {
            Bitboard(Self::FILE_A.0 << file as u32)
        } else {
            Self::EMPTY
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, square: Square) -> bool {
        self.0 & (1 << square.value()) != 0
    }

    #[inline]
    pub const fn intersects(self, other: Bitboard) -> bool {
        self.0 & other.0 != 0
    }

    /// Toggles the bit at the given square.
    #[inline]
    pub fn toggle(&mut self, square: Square) {
        self.0 ^= 1 << square.value();
    }

    #[inline]
    pub fn set(&mut self, square: Square) {
        self.0 |= 1 << square.value();
    }

    #[inline]
    pub fn clear(&mut self, square: Square) {
        self.0 &= !(1 << square.value());
    }

    /// Number of set bits. Zero for the empty board.
    #[inline]
    pub const fn population_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Square of the `n`-th set bit in ascending order, counting from 0.
    ///
    /// Fails with [`Error::OutOfRange`] unless `n < population_count()`.
    pub fn nth_set_bit_index(self, n: u32) -> Result<Square> {
        let count = self.population_count();
        if n >= count {
            return Err(Error::OutOfRange { n, count });
        }
        let mut bits = self.0;
        for _ in 0..n {
            bits &= bits - 1;
        }
        Ok(Square(bits.trailing_zeros() as u8))
    }

    /// Number of zero bits below the lowest set bit.
    ///
    /// Fails with [`Error::InvalidArgument`] for the empty board.
    pub fn trailing_zero_count(self) -> Result<u32> {
        if self.is_empty() {
            return Err(Error::InvalidArgument);
        }
        Ok(self.0.trailing_zeros())
    }

    /// Clears the lowest set bit.
    #[inline]
    pub const fn without_lowest(self) -> Self {
        Bitboard(self.0 & self.0.wrapping_sub(1))
    }

    /// One step toward rank 8.
    #[inline]
    pub const fn up(self) -> Self {
        Bitboard(self.0 << 8)
    }

    /// One step toward rank 1.
    #[inline]
    pub const fn down(self) -> Self {
        Bitboard(self.0 >> 8)
    }

    /// One step toward file a; bits on file a fall off instead of wrapping.
    #[inline]
    pub const fn left(self) -> Self {
        Bitboard((self.0 >> 1) & !Self::FILE_H.0)
    }

    /// One step toward file h; bits on file h fall off instead of wrapping.
    #[inline]
    pub const fn right(self) -> Self {
        Bitboard((self.0 << 1) & !Self::FILE_A.0)
    }

    /// Composes unit shifts to move every bit by `offset`.
    ///
    /// Each unit step masks its own edge, so a multi-file offset never wraps.
    pub fn shift(self, offset: Offset) -> Self {
        let mut bb = self;
        for _ in 0..offset.rank.unsigned_abs() {
            bb = if offset.rank > 0 { bb.up() } else { bb.down() };
        }
        for _ in 0..offset.file.unsigned_abs() {
            bb = if offset.file > 0 { bb.right() } else { bb.left() };
        }
        bb
    }

    /// Iterates set squares in ascending order.
    pub fn squares(self) -> Squares {
        Squares(self)
    }
}

/// Iterator over the set squares of a [`Bitboard`], lowest first.
#[derive(Debug, Clone)]
pub struct Squares(Bitboard);

impl Iterator for Squares {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let square = self.0.trailing_zero_count().ok()?;
        self.0 = self.0.without_lowest();
        Some(Square(square as u8))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.population_count() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Squares {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = Squares;

    fn into_iter(self) -> Squares {
        self.squares()
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Bitboard::EMPTY, |bb, sq| bb | Bitboard::from_square(sq))
    }
}

impl From<Square> for Bitboard {
    fn from(square: Square) -> Self {
        Bitboard::from_square(square)
    }
}

impl fmt::UpperHex for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

macro_rules! impl_bit_op {
    ($op:ident, $method:ident, $assign:ident, $assign_method:ident, $tok:tt) => {
        impl $op for Bitboard {
            type Output = Bitboard;

            #[inline]
            fn $method(self, rhs: Bitboard) -> Bitboard {
                Bitboard(self.0 $tok rhs.0)
            }
        }

        impl $assign for Bitboard {
            #[inline]
            fn $assign_method(&mut self, rhs: Bitboard) {
                self.0 = self.0 $tok rhs.0;
            }
        }
    };
}

impl_bit_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_bit_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_bit_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}
