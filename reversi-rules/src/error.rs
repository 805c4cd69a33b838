//! Errors raised when a caller breaks a rule of the game.

use crate::{Location, Player};
use derive_more::{Display, Error};

/// A precondition violated by the caller. None of these are fatal: each one can be
/// avoided by checking [`crate::GameState::legal_moves`] before acting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum GameError {
    #[display(fmt = "coordinates ({}, {}) are outside the 8x8 board", row, col)]
    OutOfRange { row: usize, col: usize },

    #[display(fmt = "{} cannot play at {}", player, location)]
    InvalidMove { player: Player, location: Location },

    #[display(fmt = "{} cannot pass while a legal move exists", player)]
    IllegalPass { player: Player },

    #[display(fmt = "the game is already over")]
    GameOver,
}
