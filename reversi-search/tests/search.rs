//! End-to-end checks of the automated player against the rules crate.

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use reversi_rules::rules;
use reversi_rules::{Board, GameState, Location, Outcome, Player};
use reversi_search::{
    choose_move, evaluate, play_game, search, DiscDifference, RandomPlayer, SearchConfig,
    SearchPlayer, SearchResult, Searcher, SCORE_MAX, SCORE_MIN,
};

/// Plain minimax with the same move order, tie-break and leaf rules as the
/// engine, but no pruning. Returns the result and the number of nodes visited.
fn reference_minimax(board: Board, depth: u8, player: Player) -> (SearchResult, u64) {
    let leaf = SearchResult {
        score: evaluate(board, player),
        best_move: None,
    };
    if depth == 0 {
        return (leaf, 1);
    }
    let moves = rules::legal_moves(board, player);
    if moves.is_empty() {
        return (leaf, 1);
    }

    let mut nodes = 1;
    let mut best: Option<SearchResult> = None;
    for mv in moves {
        let child = rules::apply_move(board, player, mv).unwrap();
        let (result, visited) = reference_minimax(child, depth - 1, !player);
        nodes += visited;
        let better = match best {
            None => true,
            Some(b) if player == Player::White => result.score > b.score,
            Some(b) => result.score < b.score,
        };
        if better {
            best = Some(SearchResult {
                score: result.score,
                best_move: Some(mv),
            });
        }
    }
    (best.unwrap(), nodes)
}

fn random_states(seed: u64, count: usize) -> Vec<GameState> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut states = Vec::new();
    while states.len() < count {
        let mut state = GameState::default();
        let plies = (0..50).choose(&mut rng).unwrap();
        for _ in 0..plies {
            if state.is_terminal() {
                break;
            }
            state = match state.legal_moves().choose(&mut rng) {
                Some(mv) => state.make_move(mv).unwrap(),
                None => state.pass().unwrap(),
            };
        }
        states.push(state);
    }
    states
}

#[test]
fn opening_scenario() {
    let d3 = Location::new(2, 3).unwrap();
    let board = rules::apply_move(Board::initial(), Player::Black, d3).unwrap();
    let count = board.count_cells();
    assert_eq!((count.black, count.white), (4, 1));

    let reply = choose_move(board, Player::White, 2).unwrap();
    assert!(rules::legal_moves(board, Player::White).contains(reply));
}

#[test]
fn full_drawn_board() {
    let board: Board = "BWBWBWBW".repeat(8).parse().unwrap();
    let count = board.count_cells();
    assert_eq!(count.black, 32);
    assert_eq!(count.white, 32);
    assert!(rules::is_terminal(board));
    assert_eq!(GameState::new(board, Player::Black).outcome(), Some(Outcome::Draw));
    assert_eq!(choose_move(board, Player::White, 4), None);
}

#[test]
fn alpha_beta_matches_unpruned_minimax() {
    for state in random_states(11, 40) {
        for depth in 1..=3 {
            let (expected, all_nodes) = reference_minimax(state.board, depth, state.player);

            let mut searcher = Searcher::new(DiscDifference);
            let result = searcher.search(state.board, depth, state.player, SCORE_MIN, SCORE_MAX);

            assert_eq!(result, expected, "depth {} from\n{}", depth, state);
            assert!(searcher.nodes_visited() <= all_nodes);
        }
    }
}

#[test]
fn pruning_visits_fewer_nodes_from_the_opening() {
    let (_, all_nodes) = reference_minimax(Board::initial(), 5, Player::Black);
    let mut searcher = Searcher::new(DiscDifference);
    searcher.choose_move(Board::initial(), Player::Black, 5);
    assert!(searcher.nodes_visited() < all_nodes);
}

#[test]
fn search_is_deterministic() {
    for state in random_states(12, 10) {
        let first = search(state.board, 3, state.player, SCORE_MIN, SCORE_MAX);
        let second = search(state.board, 3, state.player, SCORE_MIN, SCORE_MAX);
        assert_eq!(first, second);
    }
}

#[test]
fn chosen_moves_are_always_legal() {
    for state in random_states(13, 30) {
        let legal = state.legal_moves();
        match choose_move(state.board, state.player, 2) {
            Some(mv) => assert!(legal.contains(mv)),
            None => assert!(legal.is_empty()),
        }
    }
}

#[test]
fn search_player_finishes_games() {
    let mut engine = SearchPlayer::new(SearchConfig { depth: 2 });
    let mut random = RandomPlayer::new(StdRng::seed_from_u64(21));
    let record = play_game(&mut random, &mut engine).unwrap();

    let score = record.final_state.score();
    assert!(score.total() <= 64);
    assert!(record.final_state.is_terminal());
    let expected = if score.black > score.white {
        Outcome::Win(Player::Black)
    } else if score.white > score.black {
        Outcome::Win(Player::White)
    } else {
        Outcome::Draw
    };
    assert_eq!(record.outcome, expected);
}

#[test]
fn engine_self_play_is_reproducible() {
    let play = || {
        let mut black = SearchPlayer::new(SearchConfig { depth: 2 });
        let mut white = SearchPlayer::new(SearchConfig { depth: 3 });
        play_game(&mut black, &mut white).unwrap()
    };
    assert_eq!(play(), play());
}
