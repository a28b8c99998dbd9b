//! Depth-limited search.
//!
//! Only the current branch is kept: each frame's parent is the frame below it
//! on the stack, so memory grows with the bound rather than with the number of
//! boards visited. Pruning uses the shallowest depth each board was reached
//! at; a board reached again at a strictly smaller depth is expanded again,
//! because the extra headroom may now fit a solution under the bound.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use super::{SearchStats, Solution, SolveError};
use crate::board::{Board, Direction, Move};
use crate::codec::StateKey;

/// One node on the current branch.
#[derive(Debug, Clone, Copy)]
struct Frame {
    board: Board,
    depth: u32,
    /// Index into [`Direction::ALL`] of the next neighbor to try.
    next_direction: usize,
    /// Move that produced this board; `None` for the root.
    action: Option<Move>,
}

impl Frame {
    fn new(board: Board, depth: u32, action: Option<Move>) -> Self {
        Self {
            board,
            depth,
            next_direction: 0,
            action,
        }
    }
}

/// Expands a node only when its depth is below `bound`.
///
/// Returns [`SolveError::DepthExhausted`] if some board was left unexpanded
/// because the shallowest depth it was reached at is the bound itself,
/// otherwise [`SolveError::NoSolution`]. A board first cut off and later
/// reached again higher up counts as expanded.
pub(super) fn search(initial: Board, goal: Board, bound: u32) -> Result<Solution, SolveError> {
    if bound == 0 {
        return Err(SolveError::DepthExhausted);
    }

    let mut best_depth: FxHashMap<StateKey, u32> = FxHashMap::default();
    best_depth.insert(StateKey::encode(&initial), 0);

    let mut stats = SearchStats {
        expanded: 0,
        generated: 1,
    };
    let mut stack = Vec::with_capacity(bound.min(1024) as usize + 1);
    stack.push(Frame::new(initial, 0, None));
    stats.expanded += 1;

    while let Some(frame) = stack.last_mut() {
        let Some(&direction) = Direction::ALL.get(frame.next_direction) else {
            stack.pop();
            continue;
        };
        frame.next_direction += 1;

        let Some((mv, next)) = frame.board.slide(direction) else {
            continue;
        };
        let depth = frame.depth + 1;
        stats.generated += 1;

        if next == goal {
            let moves = stack
                .iter()
                .filter_map(|frame| frame.action)
                .chain([mv])
                .collect();
            return Ok(Solution { moves, stats });
        }

        match best_depth.entry(StateKey::encode(&next)) {
            Entry::Occupied(entry) if *entry.get() <= depth => continue,
            Entry::Occupied(mut entry) => {
                entry.insert(depth);
            }
            Entry::Vacant(entry) => {
                entry.insert(depth);
            }
        }

        if depth >= bound {
            log::trace!("cut off at depth {depth}:\n{next}");
            continue;
        }

        stack.push(Frame::new(next, depth, Some(mv)));
        stats.expanded += 1;
    }

    // every board below the bound was expanded at its shallowest depth
    if best_depth.values().any(|&depth| depth >= bound) {
        Err(SolveError::DepthExhausted)
    } else {
        Err(SolveError::NoSolution)
    }
}
