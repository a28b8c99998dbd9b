//! Sliding-Tile Puzzle Solver Library
//!
//! Finds a sequence of tile slides turning one 3x3 board into another, using
//! breadth-first, depth-first, depth-limited, A* or bidirectional
//! breadth-first search. Every call is
//! self-contained: frontiers, visited sets and search trees live only for the
//! duration of one [`solve`].

pub mod board;
pub mod boundary;
pub mod codec;
pub mod ffi;
mod path;
pub mod replay;
pub mod search;
pub mod solvability;

use board::Board;
use search::{Settings, Solution, SolveError};

/// Solves `initial` into `goal` with the strategy chosen by `settings`.
///
/// Identical boards return an empty solution without searching. Pairs with
/// mismatched inversion parity fail with [`SolveError::NoSolution`] before any
/// search runs.
pub fn solve(initial: &Board, goal: &Board, settings: &Settings) -> Result<Solution, SolveError> {
    if initial == goal {
        return Ok(Solution::default());
    }

    if !solvability::is_solvable(initial, goal) {
        log::debug!("inversion parity differs, goal is unreachable");
        return Err(SolveError::NoSolution);
    }

    settings.strategy().search(*initial, *goal)
}
