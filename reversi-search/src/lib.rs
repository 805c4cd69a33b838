//! `reversi-search` picks moves for an automated Reversi player.
//!
//! [`search`] runs a depth-limited minimax with alpha-beta pruning over boards from
//! `reversi-rules`; [`choose_move`] is the usual entry point. [`player`] wraps the
//! search as a [`MoveSource`] and drives whole games.

pub mod config;
pub mod eval;
pub mod player;
pub mod search;

pub use config::{ConfigError, Difficulty, SearchConfig};
pub use eval::{evaluate, DiscDifference, Evaluator, Score};
pub use player::{play_game, GameRecord, MoveSource, RandomPlayer, SearchPlayer};
pub use search::{choose_move, search, SearchResult, Searcher, SCORE_MAX, SCORE_MIN};
