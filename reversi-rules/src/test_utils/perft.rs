//! "Perft" performance test: count the number of leaves at a given depth.
//! Useful for checking move generation against published counts.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::rules;
use crate::{Board, GameState, Player};

/// Leaves `depth` plies below the starting position.
pub fn run_perft(depth: u64) -> u64 {
    perft_from(GameState::default(), depth)
}

/// Leaves `depth` plies below `state`. A forced pass counts as a ply, and a
/// line ends early once both players have passed in a row.
pub fn perft_from(state: GameState, depth: u64) -> u64 {
    leaves_below(state.board, state.player, depth, false)
}

fn leaves_below(board: Board, player: Player, depth: u64, passed: bool) -> u64 {
    // Leaf node for this depth
    if depth == 0 {
        return 1;
    }

    let all_moves = rules::legal_moves(board, player);
    if all_moves.is_empty() {
        // Both players passed: game is over
        if passed {
            return 1;
        }

        return leaves_below(board, !player, depth - 1, true);
    }

    all_moves
        .map(|mv| {
            let next = rules::apply_move_unchecked(board, player, mv);
            leaves_below(next, !player, depth - 1, false)
        })
        .sum()
}
