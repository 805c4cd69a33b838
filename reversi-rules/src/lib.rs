//! `reversi-rules` implements the rules of Reversi (Othello) as plain values.
//!
//! This package works at three levels:
//!
//!  - [`bitboard`] holds one bit per square and the raw set operations on it.
//!  - [`Board`] and the free functions in [`rules`] implement the capture rules on
//!    immutable boards. [`rules::apply_move_unchecked`] skips the legality check and is
//!    meant for engines that only play moves they generated themselves.
//!  - [`GameState`] is the safe, turn-aware interface: it validates every move,
//!    handles passing and reports the final outcome.
//!
//! Every board is a `Copy` value, so applying a move never affects any other board.

pub mod bitboard;
pub mod rules;
pub mod test_utils;

mod board;
mod error;
mod game;
mod location;

pub use board::*;
pub use error::*;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of a Reversi board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on a Reversi board.
pub const NUM_SPACES: usize = 64;
