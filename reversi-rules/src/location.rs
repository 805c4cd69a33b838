//! Code for working with [`Location`]s on the Reversi board.

use crate::bitboard::Bitboard;
use crate::{GameError, EDGE_LENGTH, NUM_SPACES};
use derive_more::{From, Into};
use itertools::Itertools;
use std::fmt::{self, Display, Formatter, Write};

/// A square on the board, stored as its row-major index.
/// Always in range: every constructor checks its input.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Location(u8);

/// One of the eight unit steps between neighbouring squares.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

/// Every direction a line of captures can run in, diagonals included.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::new(-1, -1),
    Direction::new(-1, 0),
    Direction::new(-1, 1),
    Direction::new(0, -1),
    Direction::new(0, 1),
    Direction::new(1, -1),
    Direction::new(1, 0),
    Direction::new(1, 1),
];

impl Direction {
    pub const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }
}

/// A set of locations, which can be iterated in row-major order to retrieve them.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, From, Into)]
pub struct LocationList(Bitboard);

impl Location {
    /// Build a location from row and column coordinates.
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            return Err(GameError::OutOfRange { row, col });
        }
        Ok(Self((row * EDGE_LENGTH + col) as u8))
    }

    /// Convert from a row-major square index. Panics if `index` is not below 64.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        assert!((index as usize) < NUM_SPACES);
        Self(index)
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn row(self) -> usize {
        self.0 as usize / EDGE_LENGTH
    }

    #[inline]
    pub fn col(self) -> usize {
        self.0 as usize % EDGE_LENGTH
    }

    /// Get the row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.row(), self.col())
    }

    /// The neighbouring square one step along `direction`, or None off the edge.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let row = self.row() as i8 + direction.d_row;
        let col = self.col() as i8 + direction.d_col;
        if (0..EDGE_LENGTH as i8).contains(&row) && (0..EDGE_LENGTH as i8).contains(&col) {
            Some(Self((row as usize * EDGE_LENGTH + col as usize) as u8))
        } else {
            None
        }
    }

    /// A bitboard with only this location set.
    #[inline]
    pub fn to_bitboard(self) -> Bitboard {
        Bitboard::square(self.0)
    }
}

impl From<Location> for Bitboard {
    fn from(loc: Location) -> Self {
        loc.to_bitboard()
    }
}

/// Convert this [`Location`] into string notation ("D3" is row 2, column 3).
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let row_str = "12345678".chars().nth(self.row()).ok_or(fmt::Error)?;
        let col_str = "ABCDEFGH".chars().nth(self.col()).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Debug, PartialEq)]
pub struct ParseLocationError;

impl Display for ParseLocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid location string")
    }
}

impl std::error::Error for ParseLocationError {}

/// Build a [`Location`] from a 1-indexed string notation ("D3", case-insensitive).
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if row == 0 || chars.next() != None {
            return Err(ParseLocationError);
        }

        Self::new(row - 1, col).or(Err(ParseLocationError))
    }
}

impl LocationList {
    /// Returns whether `loc` is in this list.
    pub fn contains(self, loc: Location) -> bool {
        self.0.contains(loc.to_index())
    }

    /// Returns whether the list has no locations.
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}

impl ExactSizeIterator for LocationList {
    fn len(&self) -> usize {
        self.0.count_occupied() as usize
    }
}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        let index = self.0.lowest()?;
        self.0 ^= Bitboard::square(index);
        Some(Location(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl Display for LocationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.into_iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn location_from_index() {
        assert_eq!(Location::from_index(0), Location(0));
        assert_eq!(Location::from_index(63), Location(63));
    }

    #[test]
    #[should_panic]
    fn location_from_index_fail() {
        Location::from_index(64);
    }

    #[test]
    fn location_new() {
        assert_eq!(Location::new(0, 0), Ok(Location(0)));
        assert_eq!(Location::new(7, 7), Ok(Location(63)));
        assert_eq!(Location::new(2, 3), Ok(Location(19)));
        assert_eq!(
            Location::new(0, 8),
            Err(GameError::OutOfRange { row: 0, col: 8 })
        );
        assert_eq!(
            Location::new(8, 0),
            Err(GameError::OutOfRange { row: 8, col: 0 })
        );
    }

    #[test]
    fn location_to_coords() {
        assert_eq!(Location(0).to_coords(), (0, 0));
        assert_eq!(Location(63).to_coords(), (7, 7));
        assert_eq!(Location(19).to_coords(), (2, 3));
    }

    #[test]
    fn location_step() {
        let corner = Location::new(0, 0).unwrap();
        assert_eq!(corner.step(Direction::new(-1, 0)), None);
        assert_eq!(corner.step(Direction::new(0, -1)), None);
        assert_eq!(corner.step(Direction::new(1, 1)), Location::new(1, 1).ok());

        // Stepping east from the H file must not wrap to the next row.
        let h1 = Location::new(0, 7).unwrap();
        assert_eq!(h1.step(Direction::new(0, 1)), None);
        assert_eq!(h1.step(Direction::new(1, -1)), Location::new(1, 6).ok());
    }

    #[test]
    fn location_from_str_success() {
        assert_eq!(Location::from_str("A1"), Ok(Location(0)));
        assert_eq!(Location::from_str("h8"), Ok(Location(63)));
        assert_eq!(Location::from_str("D3"), Location::new(2, 3).or(Err(ParseLocationError)));
    }

    #[test]
    fn location_from_str_fail() {
        assert_eq!(Location::from_str(""), Err(ParseLocationError));
        assert_eq!(Location::from_str("A12"), Err(ParseLocationError));
        assert_eq!(Location::from_str("AA"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A0"), Err(ParseLocationError));
        assert_eq!(Location::from_str("A9"), Err(ParseLocationError));
        assert_eq!(Location::from_str("I5"), Err(ParseLocationError));
    }

    #[test]
    fn location_to_str() {
        assert_eq!(Location(0).to_string(), "A1");
        assert_eq!(Location(63).to_string(), "H8");
        assert_eq!(Location::from_str("E2").unwrap().to_string(), "E2");
        assert_eq!(Location::from_str("F6").unwrap().to_string(), "F6");
    }

    #[test]
    fn location_list_iterates_in_row_major_order() {
        let bitboard = Bitboard::square(40) | Bitboard::square(3) | Bitboard::square(17);
        let list = LocationList::from(bitboard);
        assert_eq!(list.len(), 3);
        assert!(list.contains(Location(17)));
        assert!(!list.contains(Location(18)));
        assert_eq!(
            list.collect::<Vec<_>>(),
            vec![Location(3), Location(17), Location(40)]
        );
    }

    #[test]
    fn location_list_display() {
        let list = LocationList::from(Bitboard::square(19) | Bitboard::square(26));
        assert_eq!(list.to_string(), "[D3, C4]");
        assert_eq!(LocationList::default().to_string(), "[]");
    }
}
