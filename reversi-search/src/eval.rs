//! Static evaluation of leaf positions.

use reversi_rules::{Board, Player};

/// Search scores. Higher is better for the player a board is evaluated for.
pub type Score = i32;

/// Scores a board from one player's perspective.
pub trait Evaluator {
    fn evaluate(&self, board: Board, perspective: Player) -> Score;
}

/// Score a board as: # my discs - # opponent discs.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscDifference;

impl Evaluator for DiscDifference {
    #[inline]
    fn evaluate(&self, board: Board, perspective: Player) -> Score {
        let count = board.count_cells();
        count.of(perspective) as Score - count.of(!perspective) as Score
    }
}

/// Evaluate `board` for `perspective` with [`DiscDifference`].
pub fn evaluate(board: Board, perspective: Player) -> Score {
    DiscDifference.evaluate(board, perspective)
}
