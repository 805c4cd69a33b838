//! The board: which colour, if any, occupies each of the 64 squares.
//!
//! A [`Board`] is a pair of bitboards, one per colour. It is `Copy`, and every
//! "modifying" operation returns a new board, so a board held by one part of a
//! program (or one branch of a search) can never be changed by another.

use crate::bitboard::{self, Bitboard};
use crate::{GameError, Location, Player, EDGE_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;

/// The contents of a single square.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// The character used for this cell in board notation.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// Number of discs each player has on a board.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DiscCount {
    pub black: u8,
    pub white: u8,
}

impl DiscCount {
    /// Discs owned by `player`.
    pub fn of(self, player: Player) -> u8 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    pub fn total(self) -> u8 {
        self.black + self.white
    }
}

/// A complete 8x8 position.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
}

impl Default for Board {
    /// Gets the starting position.
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    /// The starting position: White on D4 and E5, Black on E4 and D5.
    pub const fn initial() -> Self {
        Self {
            black: bitboard::BLACK_START,
            white: bitboard::WHITE_START,
        }
    }

    /// A board with no discs at all.
    pub fn empty() -> Self {
        Self {
            black: Bitboard::default(),
            white: Bitboard::default(),
        }
    }

    /// Get a mask indicating where the occupied spaces are.
    #[inline]
    pub(crate) fn occupied_mask(self) -> Bitboard {
        self.black | self.white
    }

    /// The contents of the square at `row`, `col`.
    pub fn get(self, row: usize, col: usize) -> Result<Cell, GameError> {
        Ok(self.cell(Location::new(row, col)?))
    }

    /// The contents of the square at `loc`.
    #[inline]
    pub fn cell(self, loc: Location) -> Cell {
        let index = loc.to_index();
        if self.black.contains(index) {
            Cell::Black
        } else if self.white.contains(index) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// A copy of this board with the square at `row`, `col` set to `cell`.
    pub fn with_cell_set(self, row: usize, col: usize, cell: Cell) -> Result<Self, GameError> {
        Ok(self.with_cell(Location::new(row, col)?, cell))
    }

    /// A copy of this board with the square at `loc` set to `cell`.
    #[inline]
    pub fn with_cell(self, loc: Location, cell: Cell) -> Self {
        let mask = loc.to_bitboard();
        let black = self.black & !mask;
        let white = self.white & !mask;
        match cell {
            Cell::Empty => Self { black, white },
            Cell::Black => Self {
                black: black | mask,
                white,
            },
            Cell::White => Self {
                black,
                white: white | mask,
            },
        }
    }

    /// A copy of this board with every square in `mask` given to `player`.
    #[inline]
    pub(crate) fn with_discs(self, mask: Bitboard, player: Player) -> Self {
        match player {
            Player::Black => Self {
                black: self.black | mask,
                white: self.white & !mask,
            },
            Player::White => Self {
                black: self.black & !mask,
                white: self.white | mask,
            },
        }
    }

    pub fn count_cells(self) -> DiscCount {
        DiscCount {
            black: self.black.count_occupied(),
            white: self.white.count_occupied(),
        }
    }

    pub fn count_empty(self) -> u8 {
        self.occupied_mask().count_empty()
    }

    /// Whether every square holds a disc. Note that a game can end before this.
    pub fn is_full(self) -> bool {
        self.count_empty() == 0
    }

    /// All cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..NUM_SPACES as u8).map(move |index| self.cell(Location::from_index(index)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cells = self.cells();

        write!(f, "   A B C D E F G H")?;
        for row in 1..=EDGE_LENGTH {
            write!(f, "\n {} ", row)?;
            for cell in cells.by_ref().take(EDGE_LENGTH) {
                write!(f, "{} ", cell.to_char())?;
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "unexpected character {:?} in board string", character)]
    BadCharacter { character: char },

    #[display(fmt = "board string has {} cells, expected 64", count)]
    WrongLength { count: usize },
}

/// Parse a board from 64 cell characters in row-major order. Whitespace is ignored.
/// `.` or `-` is empty, `B` or `X` is Black, `W` or `O` is White.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut count = 0;

        for character in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match character.to_ascii_uppercase() {
                '.' | '-' => Cell::Empty,
                'B' | 'X' => Cell::Black,
                'W' | 'O' => Cell::White,
                _ => return Err(ParseBoardError::BadCharacter { character }),
            };
            if count < NUM_SPACES {
                board = board.with_cell(Location::from_index(count as u8), cell);
            }
            count += 1;
        }

        if count != NUM_SPACES {
            return Err(ParseBoardError::WrongLength { count });
        }
        Ok(board)
    }
}
