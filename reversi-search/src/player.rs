//! Move sources and a driver that plays two of them against each other.
//!
//! A human prompt, a network peer or the search engine all look the same to the
//! driver: something that picks a move when asked.

use crate::config::SearchConfig;
use crate::eval::{DiscDifference, Evaluator};
use crate::search::Searcher;
use rand::seq::IteratorRandom;
use rand::Rng;
use reversi_rules::{Action, GameError, GameState, Location, Outcome, Player};

/// Something that supplies moves for one side of a game.
pub trait MoveSource {
    /// Pick a move for `state.player`. Only called when that player has at least
    /// one legal move. Returning None, or a move that is not legal, is reported
    /// to the driver as an error.
    fn next_move(&mut self, state: &GameState) -> Option<Location>;
}

/// Plays the move chosen by alpha-beta search at a fixed depth.
#[derive(Clone, Debug)]
pub struct SearchPlayer<E = DiscDifference> {
    config: SearchConfig,
    searcher: Searcher<E>,
}

impl SearchPlayer<DiscDifference> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_evaluator(config, DiscDifference)
    }
}

impl<E: Evaluator> SearchPlayer<E> {
    pub fn with_evaluator(config: SearchConfig, evaluator: E) -> Self {
        Self {
            config,
            searcher: Searcher::new(evaluator),
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Positions searched over all moves this player has made.
    pub fn nodes_visited(&self) -> u64 {
        self.searcher.nodes_visited()
    }
}

impl<E: Evaluator> MoveSource for SearchPlayer<E> {
    fn next_move(&mut self, state: &GameState) -> Option<Location> {
        self.searcher
            .choose_move(state.board, state.player, self.config.depth)
    }
}

/// Plays a uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomPlayer<R> {
    rng: R,
}

impl<R: Rng> RandomPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MoveSource for RandomPlayer<R> {
    fn next_move(&mut self, state: &GameState) -> Option<Location> {
        state.legal_moves().choose(&mut self.rng)
    }
}

/// Everything that happened in a finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    /// Each turn in order, passes included.
    pub actions: Vec<(Player, Action)>,
    pub final_state: GameState,
    pub outcome: Outcome,
}

/// Play a game from the starting position until neither side can move.
///
/// Forced passes are made automatically. Any move a source proposes is checked
/// before it is applied, and the first illegal one ends the game with an error.
pub fn play_game<B, W>(black: &mut B, white: &mut W) -> Result<GameRecord, GameError>
where
    B: MoveSource + ?Sized,
    W: MoveSource + ?Sized,
{
    let mut state = GameState::default();
    let mut actions = Vec::new();

    loop {
        if let Some(outcome) = state.outcome() {
            return Ok(GameRecord {
                actions,
                final_state: state,
                outcome,
            });
        }

        let action = if state.must_pass() {
            Action::Pass
        } else {
            let proposed = match state.player {
                Player::Black => black.next_move(&state),
                Player::White => white.next_move(&state),
            };
            // A source that declines to move is trying to pass.
            proposed.map_or(Action::Pass, Action::Move)
        };

        let next = state.act(action)?;
        actions.push((state.player, action));
        state = next;
    }
}
