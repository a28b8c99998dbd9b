//! Playing a move sequence forward from a starting board.

use crate::board::{Board, Move};

/// A move that could not be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("move {step} slides tile {tile}, which is not next to the blank")]
pub struct ReplayError {
    /// 1-based position of the offending move.
    pub step: usize,
    pub tile: u8,
}

/// Applies every move in order and returns the final board.
pub fn apply_moves(initial: &Board, moves: &[Move]) -> Result<Board, ReplayError> {
    moves
        .iter()
        .enumerate()
        .try_fold(*initial, |board, (index, &mv)| {
            board.apply(mv).ok_or(ReplayError {
                step: index + 1,
                tile: mv.tile(),
            })
        })
}

/// Formats the starting board followed by the board after each move.
pub fn format_replay(initial: &Board, moves: &[Move]) -> Result<String, ReplayError> {
    let mut output = format!("Start:\n{initial}\n");
    let mut board = *initial;

    for (index, &mv) in moves.iter().enumerate() {
        board = board.apply(mv).ok_or(ReplayError {
            step: index + 1,
            tile: mv.tile(),
        })?;
        output.push_str(&format!("\nMove {}: slide {mv}\n{board}\n", index + 1));
    }

    Ok(output)
}
