//! A* search guided by Manhattan distance to the goal board.

use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use super::{SearchTree, Solution, SolveError};
use crate::board::{Board, BLANK, CELLS, SIDE};
use crate::codec::{neighbors, StateKey};

/// Sum of tile distances to their goal cells. Admissible and consistent, so
/// the first goal taken off the heap is at minimum depth.
struct Manhattan {
    /// `goal_cells[tile]` is the cell `tile` occupies in the goal.
    goal_cells: [usize; CELLS],
}

impl Manhattan {
    fn new(goal: &Board) -> Self {
        let mut goal_cells = [0; CELLS];
        for (cell, &tile) in goal.tiles().iter().enumerate() {
            goal_cells[tile as usize] = cell;
        }
        Self { goal_cells }
    }

    fn estimate(&self, board: &Board) -> u32 {
        board
            .tiles()
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK)
            .map(|(cell, &tile)| {
                let target = self.goal_cells[tile as usize];
                let rows = (cell / SIDE).abs_diff(target / SIDE);
                let cols = (cell % SIDE).abs_diff(target % SIDE);
                (rows + cols) as u32
            })
            .sum()
    }
}

pub(super) fn search(initial: Board, goal: Board) -> Result<Solution, SolveError> {
    let heuristic = Manhattan::new(&goal);
    let mut tree = SearchTree::new(initial);
    let mut best_depth: FxHashMap<StateKey, u32> = FxHashMap::default();
    best_depth.insert(StateKey::encode(&initial), 0);

    // ties on f go to the older node, keeping results reproducible
    let mut open = BinaryHeap::from([Reverse((heuristic.estimate(&initial), SearchTree::ROOT))]);
    let mut expanded = 0;

    while let Some(Reverse((_, current))) = open.pop() {
        let node = *tree.node(current);
        if node.board == goal {
            return Ok(Solution::from_tree(&tree, current, expanded));
        }

        // a cheaper route to this board was queued later
        if best_depth
            .get(&StateKey::encode(&node.board))
            .is_some_and(|&depth| depth < node.depth)
        {
            continue;
        }

        expanded += 1;
        let depth = node.depth + 1;
        for (mv, next) in neighbors(node.board) {
            match best_depth.entry(StateKey::encode(&next)) {
                Entry::Occupied(entry) if *entry.get() <= depth => continue,
                Entry::Occupied(mut entry) => {
                    entry.insert(depth);
                }
                Entry::Vacant(entry) => {
                    entry.insert(depth);
                }
            }
            let child = tree.add(current, mv, next);
            open.push(Reverse((depth + heuristic.estimate(&next), child)));
        }
    }

    Err(SolveError::NoSolution)
}
