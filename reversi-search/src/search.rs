//! Depth-limited minimax search with alpha-beta pruning.
//!
//! White is always the maximizing side and Black the minimizing side. Leaves are
//! scored by the evaluator from the perspective of the player whose turn it is at
//! the leaf, not the player at the root. Move selection depends on this, so it
//! must not be "fixed" into a negamax.

use crate::eval::{DiscDifference, Evaluator, Score};
use reversi_rules::rules;
use reversi_rules::{Board, Location, Player};

/// Stands in for negative infinity in the search window.
pub const SCORE_MIN: Score = Score::MIN;

/// Stands in for positive infinity in the search window.
pub const SCORE_MAX: Score = Score::MAX;

/// The side whose scores the search maximizes.
pub const MAXIMIZING_PLAYER: Player = Player::White;

/// The value of a searched position and the move that achieves it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub score: Score,
    /// None at leaves and when the player to move has no legal move.
    pub best_move: Option<Location>,
}

/// Runs searches with a given evaluator, counting the nodes it visits.
#[derive(Clone, Debug, Default)]
pub struct Searcher<E = DiscDifference> {
    evaluator: E,
    nodes: u64,
}

impl<E: Evaluator> Searcher<E> {
    pub fn new(evaluator: E) -> Self {
        Self {
            evaluator,
            nodes: 0,
        }
    }

    /// Positions visited by every search run so far, leaves included.
    pub fn nodes_visited(&self) -> u64 {
        self.nodes
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Search `depth` plies below `board` with `player` to move, inside the
    /// window (`alpha`, `beta`).
    ///
    /// Moves are tried in row-major order and only a strictly better score
    /// replaces the current best, so ties go to the earliest move.
    pub fn search(
        &mut self,
        board: Board,
        depth: u8,
        player: Player,
        mut alpha: Score,
        mut beta: Score,
    ) -> SearchResult {
        self.nodes += 1;

        if depth == 0 {
            return self.leaf(board, player);
        }

        // No moves for the player to move covers terminal positions too. A pass
        // is not searched through: the position is scored as it stands.
        let moves = rules::legal_moves(board, player);
        if moves.is_empty() {
            return self.leaf(board, player);
        }

        let maximizing = player == MAXIMIZING_PLAYER;
        let mut best = SearchResult {
            score: if maximizing { SCORE_MIN } else { SCORE_MAX },
            best_move: None,
        };

        for mv in moves {
            let child = rules::apply_move_unchecked(board, player, mv);
            let score = self.search(child, depth - 1, !player, alpha, beta).score;

            if maximizing {
                if score > best.score || best.best_move.is_none() {
                    best = SearchResult {
                        score,
                        best_move: Some(mv),
                    };
                }
                alpha = alpha.max(score);
            } else {
                if score < best.score || best.best_move.is_none() {
                    best = SearchResult {
                        score,
                        best_move: Some(mv),
                    };
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        best
    }

    /// Pick a move for `player` with a full-window search of `depth` plies.
    /// Returns None if `player` has no legal move.
    pub fn choose_move(&mut self, board: Board, player: Player, depth: u8) -> Option<Location> {
        self.search(board, depth, player, SCORE_MIN, SCORE_MAX)
            .best_move
    }

    #[inline]
    fn leaf(&self, board: Board, player: Player) -> SearchResult {
        SearchResult {
            score: self.evaluator.evaluate(board, player),
            best_move: None,
        }
    }
}

/// Search with the default disc-difference evaluator.
pub fn search(board: Board, depth: u8, player: Player, alpha: Score, beta: Score) -> SearchResult {
    Searcher::new(DiscDifference).search(board, depth, player, alpha, beta)
}

/// Pick a move for `player` with the default evaluator.
pub fn choose_move(board: Board, player: Player, depth: u8) -> Option<Location> {
    Searcher::new(DiscDifference).choose_move(board, player, depth)
}
