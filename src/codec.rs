//! Compact state keys and neighbor generation.
//!
//! A [`StateKey`] is the rank of a board in the factorial number system
//! (its Lehmer code), so every one of the 9! boards maps to a distinct value
//! in `0..STATE_COUNT` and keys compare in lexicographic board order.

use crate::board::{Board, Direction, Move, CELLS};

/// Number of distinct boards (9!).
pub const STATE_COUNT: u32 = 362_880;

/// Factorials 8! down to 0!, indexed by cell.
const PLACE_VALUES: [u32; CELLS] = [40_320, 5_040, 720, 120, 24, 6, 2, 1, 1];

/// Canonical, totally ordered encoding of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey(u32);

impl StateKey {
    /// Ranks a board.
    #[inline]
    pub fn encode(board: &Board) -> Self {
        let tiles = board.tiles();
        let mut rank = 0;

        for cell in 0..CELLS {
            // count later tiles smaller than this one
            let smaller_after = tiles[cell + 1..]
                .iter()
                .filter(|&&later| later < tiles[cell])
                .count() as u32;
            rank += smaller_after * PLACE_VALUES[cell];
        }

        StateKey(rank)
    }

    /// Recovers the board a key was encoded from.
    ///
    /// Returns `None` for raw values outside `0..STATE_COUNT`.
    pub fn decode(self) -> Option<Board> {
        if self.0 >= STATE_COUNT {
            return None;
        }

        let mut remaining: Vec<u8> = (0..CELLS as u8).collect();
        let mut rank = self.0;
        let mut tiles = [0u8; CELLS];

        for (cell, tile) in tiles.iter_mut().enumerate() {
            let digit = (rank / PLACE_VALUES[cell]) as usize;
            rank %= PLACE_VALUES[cell];
            *tile = remaining.remove(digit);
        }

        Board::new(tiles).ok()
    }

    pub const fn from_raw(raw: u32) -> Self {
        StateKey(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Yields every board one slide away, in [`Direction::ALL`] order.
#[inline]
pub fn neighbors(board: Board) -> impl Iterator<Item = (Move, Board)> {
    Direction::ALL
        .into_iter()
        .filter_map(move |direction| board.slide(direction))
}
