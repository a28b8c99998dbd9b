//! Breadth-first search.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use super::{SearchTree, Solution, SolveError};
use crate::board::Board;
use crate::codec::{neighbors, StateKey};

/// Explores boards in order of depth, so the first goal found is at minimum
/// depth. Boards are marked visited when first discovered, giving at most one
/// node per board.
pub(super) fn search(initial: Board, goal: Board) -> Result<Solution, SolveError> {
    let mut tree = SearchTree::new(initial);
    let mut visited: FxHashSet<StateKey> = FxHashSet::default();
    visited.insert(StateKey::encode(&initial));

    let mut frontier = VecDeque::from([SearchTree::ROOT]);
    let mut expanded = 0;

    while let Some(current) = frontier.pop_front() {
        let node = *tree.node(current);
        if node.board == goal {
            return Ok(Solution::from_tree(&tree, current, expanded));
        }

        expanded += 1;
        for (mv, next) in neighbors(node.board) {
            if visited.insert(StateKey::encode(&next)) {
                frontier.push_back(tree.add(current, mv, next));
            }
        }
    }

    // only reachable when solvability was not checked first
    Err(SolveError::NoSolution)
}
