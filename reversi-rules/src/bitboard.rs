//! Occupancy masks with one bit per square.
//!
//! Bit `i` is the square with row-major index `i`, so the least significant bit is
//! the upper-left corner (A1) and iteration from the low bit visits squares in
//! row-major order.

use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};

/// Holds a single bit per location on a Reversi board.
/// Wraps [`u64`] for bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

/// Starting bitboard for Black: D5 and E4.
pub const BLACK_START: Bitboard = Bitboard((1 << 28) | (1 << 35));

/// Starting bitboard for White: D4 and E5.
pub const WHITE_START: Bitboard = Bitboard((1 << 27) | (1 << 36));

impl Bitboard {
    /// A bitboard with only the square at `index` set.
    #[inline]
    pub const fn square(index: u8) -> Self {
        Self(1 << index)
    }

    /// Count the number of occupied spaces in the bitboard.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of empty spaces in the bitboard.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if this bitboard is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return true if the square at `index` is set.
    #[inline]
    pub fn contains(self, index: u8) -> bool {
        self.0 & (1 << index) != 0
    }

    /// Index of the lowest set square, or None if the bitboard is empty.
    #[inline]
    pub fn lowest(self) -> Option<u8> {
        if self.is_empty() {
            None
        } else {
            Some(self.0.trailing_zeros() as u8)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_bitboards_are_disjoint() {
        assert!((BLACK_START & WHITE_START).is_empty());
        assert_eq!((BLACK_START | WHITE_START).count_occupied(), 4);
    }

    #[test]
    fn count_empty_complements_occupied() {
        let bitboard = BLACK_START | Bitboard::square(0);
        assert_eq!(bitboard.count_occupied(), 3);
        assert_eq!(bitboard.count_empty(), 61);
        assert_eq!((!Bitboard::default()).count_empty(), 0);
    }

    #[test]
    fn lowest_follows_row_major_order() {
        assert_eq!(Bitboard::default().lowest(), None);
        assert_eq!(WHITE_START.lowest(), Some(27));
        assert_eq!((!Bitboard::default()).lowest(), Some(0));
    }
}
