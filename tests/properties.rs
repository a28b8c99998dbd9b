//! Properties of `solve` over random board pairs.

use proptest::prelude::*;

use tilesolve::board::{Board, BLANK};
use tilesolve::replay::apply_moves;
use tilesolve::search::{Algorithm, Settings, SolveError};
use tilesolve::solvability::{inversions, is_solvable};
use tilesolve::solve;

fn any_board() -> impl Strategy<Value = Board> {
    Just((0u8..9).collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|tiles| {
            let mut array = [0u8; 9];
            array.copy_from_slice(&tiles);
            Board::new(array).unwrap()
        })
}

/// Swaps the first two non-blank tiles, flipping the inversion parity.
fn flip_parity(board: &Board) -> Board {
    let mut tiles = *board.tiles();
    let cells: Vec<usize> = (0..9).filter(|&cell| tiles[cell] != BLANK).take(2).collect();
    tiles.swap(cells[0], cells[1]);
    Board::new(tiles).unwrap()
}

/// A pair whose goal is reachable from its start.
fn solvable_pair() -> impl Strategy<Value = (Board, Board)> {
    (any_board(), any_board()).prop_map(|(initial, goal)| {
        if inversions(&initial) % 2 == inversions(&goal) % 2 {
            (initial, goal)
        } else {
            (initial, flip_parity(&goal))
        }
    })
}

fn unsolvable_pair() -> impl Strategy<Value = (Board, Board)> {
    solvable_pair().prop_map(|(initial, goal)| (initial, flip_parity(&goal)))
}

proptest! {
    #[test]
    fn identical_boards_need_no_moves(board in any_board()) {
        prop_assert!(is_solvable(&board, &board));
        for algorithm in Algorithm::ALL {
            let solution = solve(&board, &board, &Settings::new(algorithm, 0)).unwrap();
            prop_assert!(solution.moves.is_empty());
        }
    }

    #[test]
    fn mismatched_parity_has_no_solution((initial, goal) in unsolvable_pair()) {
        prop_assert!(!is_solvable(&initial, &goal));
        for algorithm in Algorithm::ALL {
            let result = solve(&initial, &goal, &Settings::new(algorithm, 100));
            prop_assert_eq!(result, Err(SolveError::NoSolution));
        }
    }
}

proptest! {
    // each case may walk half the state space several times
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn solvable_pairs_round_trip((initial, goal) in solvable_pair()) {
        prop_assume!(initial != goal);

        let bfs = solve(&initial, &goal, &Settings::new(Algorithm::BreadthFirst, 0)).unwrap();
        let dfs = solve(&initial, &goal, &Settings::new(Algorithm::DepthFirst, 0)).unwrap();
        let astar = solve(&initial, &goal, &Settings::new(Algorithm::AStar, 0)).unwrap();
        let bidir = solve(&initial, &goal, &Settings::new(Algorithm::Bidirectional, 0)).unwrap();

        for moves in [&bfs.moves, &dfs.moves, &astar.moves, &bidir.moves] {
            prop_assert!(moves.iter().all(|mv| (1..=8).contains(&mv.tile())));
            prop_assert_eq!(apply_moves(&initial, moves), Ok(goal));
        }

        prop_assert!(bfs.moves.len() <= dfs.moves.len());
        prop_assert_eq!(astar.moves.len(), bfs.moves.len());
        prop_assert_eq!(bidir.moves.len(), bfs.moves.len());
    }

    #[test]
    fn depth_limited_respects_bound((initial, goal) in solvable_pair()) {
        prop_assume!(initial != goal);

        let zero = solve(&initial, &goal, &Settings::new(Algorithm::DepthLimited, 0));
        prop_assert_eq!(zero, Err(SolveError::DepthExhausted));

        let optimal = solve(&initial, &goal, &Settings::new(Algorithm::AStar, 0))
            .unwrap()
            .moves
            .len() as u32;

        let tight = solve(&initial, &goal, &Settings::new(Algorithm::DepthLimited, optimal)).unwrap();
        prop_assert_eq!(tight.moves.len() as u32, optimal);
        prop_assert_eq!(apply_moves(&initial, &tight.moves), Ok(goal));

        let short = solve(&initial, &goal, &Settings::new(Algorithm::DepthLimited, optimal - 1));
        prop_assert_eq!(short, Err(SolveError::DepthExhausted));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn shortest_paths_agree((initial, goal) in solvable_pair()) {
        prop_assume!(initial != goal);

        let bfs = solve(&initial, &goal, &Settings::new(Algorithm::BreadthFirst, 0)).unwrap();
        let bidir = solve(&initial, &goal, &Settings::new(Algorithm::Bidirectional, 0)).unwrap();
        prop_assert_eq!(bidir.moves.len(), bfs.moves.len());
        prop_assert_eq!(apply_moves(&initial, &bidir.moves), Ok(goal));

        let optimal = bfs.moves.len() as u32;
        let tight = solve(&initial, &goal, &Settings::new(Algorithm::DepthLimited, optimal)).unwrap();
        prop_assert_eq!(tight.moves.len(), bfs.moves.len());
        prop_assert_eq!(apply_moves(&initial, &tight.moves), Ok(goal));
    }
}
