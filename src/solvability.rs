//! Reachability check between two boards.
//!
//! On a board with an odd side length every slide preserves the parity of the
//! inversion count (the blank is ignored), so two boards are mutually
//! reachable exactly when their inversion counts share a parity.

use crate::board::{Board, BLANK};

/// Counts pairs of non-blank tiles that appear in descending order.
pub fn inversions(board: &Board) -> usize {
    let tiles = board.tiles();
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != BLANK)
        .map(|(cell, &tile)| {
            tiles[cell + 1..]
                .iter()
                .filter(|&&later| later != BLANK && later < tile)
                .count()
        })
        .sum()
}

/// Returns true when `goal` can be reached from `initial` by sliding tiles.
pub fn is_solvable(initial: &Board, goal: &Board) -> bool {
    inversions(initial) % 2 == inversions(goal) % 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(tiles: [u8; 9]) -> Board {
        Board::new(tiles).unwrap()
    }

    #[test]
    fn test_solved_board_has_no_inversions() {
        assert_eq!(inversions(&Board::SOLVED), 0);
    }

    #[test]
    fn test_blank_is_ignored() {
        // the blank's position never changes the count
        assert_eq!(inversions(&board([0, 1, 2, 3, 4, 5, 6, 7, 8])), 0);
        assert_eq!(inversions(&board([1, 2, 3, 4, 0, 5, 6, 7, 8])), 0);
        assert_eq!(inversions(&board([8, 7, 6, 5, 4, 3, 2, 1, 0])), 28);
    }

    #[test]
    fn test_single_slide_is_solvable() {
        let initial = Board::SOLVED;
        let goal = board([1, 2, 3, 4, 5, 6, 7, 0, 8]);
        assert!(is_solvable(&initial, &goal));
    }

    #[test]
    fn test_swapped_pair_is_unsolvable() {
        let initial = board([1, 2, 3, 4, 5, 6, 8, 7, 0]);
        assert_eq!(inversions(&initial), 1);
        assert!(!is_solvable(&initial, &Board::SOLVED));
        assert!(!is_solvable(&Board::SOLVED, &initial));
    }

    #[test]
    fn test_board_is_solvable_from_itself() {
        let initial = board([8, 6, 7, 2, 5, 4, 3, 0, 1]);
        assert!(is_solvable(&initial, &initial));
    }

    #[test]
    fn test_parity_preserved_by_every_slide() {
        let start = board([8, 6, 7, 2, 5, 4, 3, 0, 1]);
        for (_, next) in crate::codec::neighbors(start) {
            assert_eq!(inversions(&start) % 2, inversions(&next) % 2);
        }
    }
}
