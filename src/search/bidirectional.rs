//! Bidirectional breadth-first search.
//!
//! One tree grows from the initial board and one from the goal. Sliding a
//! tile is undone by sliding the same tile again, so a path found backwards
//! from the goal is replayed forwards by reading its moves in reverse.

use std::collections::hash_map::Entry;
use std::collections::VecDeque;

use rustc_hash::FxHashMap;

use super::{NodeId, SearchStats, SearchTree, Solution, SolveError};
use crate::board::Board;
use crate::codec::{neighbors, StateKey};
use crate::path;

/// One direction of the search.
struct Side {
    tree: SearchTree,
    seen: FxHashMap<StateKey, NodeId>,
    /// Nodes of the deepest layer, all at the same depth.
    frontier: VecDeque<NodeId>,
}

impl Side {
    fn new(root: Board) -> Self {
        let mut seen = FxHashMap::default();
        seen.insert(StateKey::encode(&root), SearchTree::ROOT);
        Self {
            tree: SearchTree::new(root),
            seen,
            frontier: VecDeque::from([SearchTree::ROOT]),
        }
    }

    /// Expands the whole current layer. Stops at the first new board the
    /// `other` side has already seen and returns `(ours, theirs)`.
    fn expand_layer(&mut self, other: &Side, expanded: &mut usize) -> Option<(NodeId, NodeId)> {
        for _ in 0..self.frontier.len() {
            let Some(current) = self.frontier.pop_front() else {
                break;
            };
            *expanded += 1;

            let board = self.tree.node(current).board;
            for (mv, next) in neighbors(board) {
                let key = StateKey::encode(&next);
                let Entry::Vacant(entry) = self.seen.entry(key) else {
                    continue;
                };
                let child = self.tree.add(current, mv, next);
                entry.insert(child);

                if let Some(&theirs) = other.seen.get(&key) {
                    return Some((child, theirs));
                }
                self.frontier.push_back(child);
            }
        }
        None
    }
}

/// Grows the smaller frontier one full layer at a time.
///
/// Before each layer the two trees share no board, so the distance exceeds
/// the sum of their depths; the first meeting in the next layer is therefore
/// a shortest path. An empty frontier means its side's component is exhausted.
pub(super) fn search(initial: Board, goal: Board) -> Result<Solution, SolveError> {
    let mut forward = Side::new(initial);
    let mut backward = Side::new(goal);
    let mut expanded = 0;

    while !forward.frontier.is_empty() && !backward.frontier.is_empty() {
        let meeting = if forward.frontier.len() <= backward.frontier.len() {
            forward.expand_layer(&backward, &mut expanded)
        } else {
            backward
                .expand_layer(&forward, &mut expanded)
                .map(|(theirs, ours)| (ours, theirs))
        };

        if let Some((ahead, behind)) = meeting {
            log::trace!(
                "frontiers met at depths {} and {}",
                forward.tree.node(ahead).depth,
                backward.tree.node(behind).depth
            );
            return Ok(splice(&forward, ahead, &backward, behind, expanded));
        }
    }

    Err(SolveError::NoSolution)
}

/// Joins the forward path to `ahead` with the backward path from `behind`,
/// where both nodes hold the same board.
fn splice(
    forward: &Side,
    ahead: NodeId,
    backward: &Side,
    behind: NodeId,
    expanded: usize,
) -> Solution {
    let mut moves = path::reconstruct(&forward.tree, ahead);
    moves.extend(path::reconstruct(&backward.tree, behind).into_iter().rev());

    Solution {
        moves,
        stats: SearchStats {
            expanded,
            generated: forward.tree.len() + backward.tree.len(),
        },
    }
}
