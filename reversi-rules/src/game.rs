//! Implements game-level Reversi logic.
//!
//! For correctness, this turn-aware interface is preferred. Engines that only
//! play moves they generated may use [`crate::rules`] directly on boards.

use crate::{rules, Board, DiscCount, GameError, Location, LocationList};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl Player {
    /// Gets the other player.
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        self.opponent()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ParsePlayerError;

impl fmt::Display for ParsePlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid player string")
    }
}

impl std::error::Error for ParsePlayerError {}

/// Parse "B"/"Black" or "W"/"White", ignoring case.
impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Player::Black),
            "w" | "white" => Ok(Player::White),
            _ => Err(ParsePlayerError),
        }
    }
}

/// An action in a Reversi game: pass or place a disc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Move(Location),
    Pass,
}

impl From<Location> for Action {
    fn from(loc: Location) -> Self {
        Self::Move(loc)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(loc) => fmt::Display::fmt(loc, f),
            Action::Pass => f.write_str("PASS"),
        }
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
}

/// The complete state of a game: the position and whose turn it is.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct GameState {
    pub board: Board,
    pub player: Player,
}

impl Default for GameState {
    /// Gets the starting position with Black to move.
    fn default() -> Self {
        Self::new(Board::initial(), Player::default())
    }
}

impl GameState {
    pub fn new(board: Board, player: Player) -> Self {
        Self { board, player }
    }

    /// Get the locations the player to move may play.
    #[inline]
    pub fn legal_moves(self) -> LocationList {
        rules::legal_moves(self.board, self.player)
    }

    /// Whether neither player has a legal move.
    #[inline]
    pub fn is_terminal(self) -> bool {
        rules::is_terminal(self.board)
    }

    /// Whether the player to move has no legal move but the game continues.
    pub fn must_pass(self) -> bool {
        self.legal_moves().is_empty() && !self.is_terminal()
    }

    /// Place a disc for the player to move and hand the turn to the opponent.
    pub fn make_move(self, loc: Location) -> Result<Self, GameError> {
        let board = rules::apply_move(self.board, self.player, loc)?;
        Ok(Self::new(board, !self.player))
    }

    /// Hand the turn to the opponent without placing a disc.
    /// Only allowed when the player to move has nowhere to play.
    pub fn pass(self) -> Result<Self, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }
        if !self.legal_moves().is_empty() {
            return Err(GameError::IllegalPass {
                player: self.player,
            });
        }
        Ok(Self::new(self.board, !self.player))
    }

    /// Take an action as the player to move.
    pub fn act(self, action: Action) -> Result<Self, GameError> {
        match action {
            Action::Pass => self.pass(),
            Action::Move(loc) => self.make_move(loc),
        }
    }

    pub fn score(self) -> DiscCount {
        self.board.count_cells()
    }

    /// The result of the game, or None while either player can still move.
    pub fn outcome(self) -> Option<Outcome> {
        if !self.is_terminal() {
            return None;
        }
        let DiscCount { black, white } = self.score();
        Some(if black > white {
            Outcome::Win(Player::Black)
        } else if white > black {
            Outcome::Win(Player::White)
        } else {
            Outcome::Draw
        })
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.player)
    }
}
