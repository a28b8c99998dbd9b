//! Depth-first search with an explicit stack.

use rustc_hash::FxHashSet;

use super::{SearchTree, Solution, SolveError};
use crate::board::Board;
use crate::codec::{neighbors, StateKey};

/// Finds some path, not necessarily a short one.
///
/// Uses a heap-allocated stack instead of recursion, and the same
/// mark-on-discovery visited set as breadth-first search, so it terminates
/// after at most one node per board.
pub(super) fn search(initial: Board, goal: Board) -> Result<Solution, SolveError> {
    let mut tree = SearchTree::new(initial);
    let mut visited: FxHashSet<StateKey> = FxHashSet::default();
    visited.insert(StateKey::encode(&initial));

    let mut frontier = vec![SearchTree::ROOT];
    let mut expanded = 0;

    while let Some(current) = frontier.pop() {
        let node = *tree.node(current);
        if node.board == goal {
            return Ok(Solution::from_tree(&tree, current, expanded));
        }

        expanded += 1;
        let first_child = frontier.len();
        for (mv, next) in neighbors(node.board) {
            if visited.insert(StateKey::encode(&next)) {
                frontier.push(tree.add(current, mv, next));
            }
        }
        // pop children in up/down/left/right order
        frontier[first_child..].reverse();
    }

    Err(SolveError::NoSolution)
}
