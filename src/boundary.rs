//! Flat integer-buffer contract for callers outside the crate.
//!
//! Buffer format:
//! - success: the moved tiles in order, then a single [`TERMINATOR`]; solving a
//!   board that already equals the goal yields `[0]`
//! - failure: a single negative code, [`NO_SOLUTION`] or [`DEPTH_EXHAUSTED`]
//!
//! Malformed input never panics; it is logged and reported as [`NO_SOLUTION`].

use crate::board::{Board, BoardError, Move};
use crate::search::{Algorithm, Settings, Solution, SolveError};

/// Marks the end of a successful move sequence.
pub const TERMINATOR: i32 = 0;
/// Unsolvable pair, malformed input, or exhausted state space.
pub const NO_SOLUTION: i32 = -1;
/// The depth-limited search hit its bound.
pub const DEPTH_EXHAUSTED: i32 = -2;

/// Reasons flat input is rejected before any search runs.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum InputError {
    #[display("invalid board: {_0}")]
    #[from]
    Board(BoardError),
    #[display("settings buffer is empty")]
    MissingAlgorithm,
    #[display("unknown algorithm selector {selector}")]
    UnknownAlgorithm { selector: i32 },
    #[display("negative depth bound {bound}")]
    NegativeDepthBound { bound: i32 },
}

/// Reads `[algorithm, depth_bound]`.
///
/// A missing depth bound reads as 0. The bound is only validated for the
/// depth-limited algorithm; every other algorithm ignores it.
pub fn parse_settings(settings: &[i32]) -> Result<Settings, InputError> {
    let &selector = settings.first().ok_or(InputError::MissingAlgorithm)?;
    let algorithm =
        Algorithm::from_selector(selector).ok_or(InputError::UnknownAlgorithm { selector })?;
    let raw_bound = settings.get(1).copied().unwrap_or(0);

    let depth_bound = match (algorithm, u32::try_from(raw_bound)) {
        (_, Ok(bound)) => bound,
        (Algorithm::DepthLimited, Err(_)) => {
            return Err(InputError::NegativeDepthBound { bound: raw_bound })
        }
        (_, Err(_)) => 0,
    };

    Ok(Settings::new(algorithm, depth_bound))
}

/// Validates flat input and runs the solver.
pub fn solve_checked(
    initial: &[i32],
    goal: &[i32],
    settings: &[i32],
) -> Result<Result<Solution, SolveError>, InputError> {
    let initial = Board::try_from(initial)?;
    let goal = Board::try_from(goal)?;
    let settings = parse_settings(settings)?;
    Ok(crate::solve(&initial, &goal, &settings))
}

/// Solves and encodes the outcome as a flat buffer. The buffer's length is
/// its size; it carries no other length information.
pub fn solve_flat(initial: &[i32], goal: &[i32], settings: &[i32]) -> Vec<i32> {
    match solve_checked(initial, goal, settings) {
        Ok(result) => encode_result(&result),
        Err(err) => {
            log::warn!("rejecting input: {err}");
            vec![NO_SOLUTION]
        }
    }
}

/// Encodes a solver result in the buffer format.
pub fn encode_result(result: &Result<Solution, SolveError>) -> Vec<i32> {
    match result {
        Ok(solution) => solution
            .moves
            .iter()
            .map(|mv| i32::from(mv.tile()))
            .chain([TERMINATOR])
            .collect(),
        Err(SolveError::NoSolution) => vec![NO_SOLUTION],
        Err(SolveError::DepthExhausted) => vec![DEPTH_EXHAUSTED],
    }
}

/// Decodes a buffer produced by [`encode_result`], stripping the terminator.
///
/// Unknown negative codes and out-of-range tiles decode as
/// [`SolveError::NoSolution`].
pub fn decode_buffer(buffer: &[i32]) -> Result<Vec<Move>, SolveError> {
    match buffer.first() {
        Some(&DEPTH_EXHAUSTED) => return Err(SolveError::DepthExhausted),
        Some(&code) if code < 0 => return Err(SolveError::NoSolution),
        _ => {}
    }

    let moves = match buffer.split_last() {
        Some((&TERMINATOR, moves)) => moves,
        _ => buffer,
    };

    moves
        .iter()
        .map(|&value| {
            u8::try_from(value).ok().and_then(Move::new).ok_or_else(|| {
                log::warn!("buffer holds invalid move {value}");
                SolveError::NoSolution
            })
        })
        .collect()
}
