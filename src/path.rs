//! Turns a terminal search node back into the moves that reached it.

use crate::board::Move;
use crate::search::{NodeId, SearchTree};

/// Walks parent links from `terminal` to the root and returns the moves in
/// root-to-terminal order. Empty iff `terminal` is the root.
pub(crate) fn reconstruct(tree: &SearchTree, terminal: NodeId) -> Vec<Move> {
    let mut moves = Vec::with_capacity(tree.node(terminal).depth as usize);
    let mut current = terminal;

    while let Some(parent) = tree.node(current).parent {
        if let Some(action) = tree.node(current).action {
            moves.push(action);
        }
        current = parent;
    }

    moves.reverse();
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Direction};

    #[test]
    fn test_root_has_empty_path() {
        let tree = SearchTree::new(Board::SOLVED);
        assert!(reconstruct(&tree, SearchTree::ROOT).is_empty());
    }

    #[test]
    fn test_path_is_root_to_terminal() {
        let mut tree = SearchTree::new(Board::SOLVED);

        let (first, board) = Board::SOLVED.slide(Direction::Left).unwrap();
        let child = tree.add(SearchTree::ROOT, first, board);
        let (second, board) = board.slide(Direction::Left).unwrap();
        let grandchild = tree.add(child, second, board);

        // a sibling branch must not leak into the path
        let (other, sibling) = Board::SOLVED.slide(Direction::Up).unwrap();
        tree.add(SearchTree::ROOT, other, sibling);

        let moves: Vec<u8> = reconstruct(&tree, grandchild)
            .into_iter()
            .map(Move::tile)
            .collect();
        assert_eq!(moves, vec![8, 7]);
        assert_eq!(moves.len() as u32, tree.node(grandchild).depth);
    }
}
