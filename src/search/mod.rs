//! Uninformed and informed search over the sliding-tile state graph.
//!
//! All strategies share the same pieces:
//! - [`SearchTree`], an arena of nodes with parent links, owned by one search call
//! - [`crate::codec::StateKey`] for visited-set bookkeeping (FxHash sets and maps)
//! - [`crate::codec::neighbors`] for the fixed up/down/left/right expansion order
//!
//! Nothing outlives a call: the arena, frontier and visited set are dropped on
//! every return path.

mod astar;
mod bfs;
mod bidirectional;
mod dfs;
mod dls;

use std::fmt;

use crate::board::{Board, Move};
use crate::path;

/// Depth bound used when the caller does not supply one.
pub const DEFAULT_DEPTH_BOUND: u32 = 100;

/// Why a search produced no move sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolveError {
    /// The goal is not reachable from the initial board.
    #[display("no solution exists")]
    NoSolution,
    /// The depth bound cut the search off; a larger bound may succeed.
    #[display("depth bound reached without finding a solution")]
    DepthExhausted,
}

/// Caller-facing choice of search algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    BreadthFirst,
    DepthFirst,
    DepthLimited,
    AStar,
    Bidirectional,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
        Algorithm::DepthLimited,
        Algorithm::AStar,
        Algorithm::Bidirectional,
    ];

    /// Maps the integer selector used across the flat boundary.
    pub const fn from_selector(selector: i32) -> Option<Self> {
        match selector {
            0 => Some(Algorithm::BreadthFirst),
            1 => Some(Algorithm::DepthFirst),
            2 => Some(Algorithm::DepthLimited),
            3 => Some(Algorithm::AStar),
            4 => Some(Algorithm::Bidirectional),
            _ => None,
        }
    }

    pub const fn selector(self) -> i32 {
        match self {
            Algorithm::BreadthFirst => 0,
            Algorithm::DepthFirst => 1,
            Algorithm::DepthLimited => 2,
            Algorithm::AStar => 3,
            Algorithm::Bidirectional => 4,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::BreadthFirst => "bfs",
            Algorithm::DepthFirst => "dfs",
            Algorithm::DepthLimited => "dls",
            Algorithm::AStar => "astar",
            Algorithm::Bidirectional => "bidir",
        };
        write!(f, "{name}")
    }
}

/// Solver settings. `depth_bound` only matters for [`Algorithm::DepthLimited`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub algorithm: Algorithm,
    pub depth_bound: u32,
}

impl Settings {
    pub const fn new(algorithm: Algorithm, depth_bound: u32) -> Self {
        Self {
            algorithm,
            depth_bound,
        }
    }

    /// Resolves the settings into a concrete strategy.
    pub const fn strategy(&self) -> Strategy {
        match self.algorithm {
            Algorithm::BreadthFirst => Strategy::BreadthFirst,
            Algorithm::DepthFirst => Strategy::DepthFirst,
            Algorithm::DepthLimited => Strategy::DepthLimited {
                bound: self.depth_bound,
            },
            Algorithm::AStar => Strategy::AStar,
            Algorithm::Bidirectional => Strategy::Bidirectional,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(Algorithm::default(), DEFAULT_DEPTH_BOUND)
    }
}

/// A search strategy with everything it needs to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// FIFO frontier; returns a shortest path.
    BreadthFirst,
    /// LIFO frontier with a global visited set; returns some path.
    DepthFirst,
    /// Depth-first, expanding only nodes shallower than `bound`.
    DepthLimited { bound: u32 },
    /// Best-first on depth plus Manhattan distance to the goal; returns a shortest path.
    AStar,
    /// Breadth-first from both ends until the trees meet; returns a shortest path.
    Bidirectional,
}

impl Strategy {
    /// Searches for a move sequence turning `initial` into `goal`.
    ///
    /// Does not check solvability; an unsolvable pair exhausts half the state
    /// space before reporting [`SolveError::NoSolution`].
    pub fn search(self, initial: Board, goal: Board) -> Result<Solution, SolveError> {
        if initial == goal {
            return Ok(Solution::default());
        }

        let result = match self {
            Strategy::BreadthFirst => bfs::search(initial, goal),
            Strategy::DepthFirst => dfs::search(initial, goal),
            Strategy::DepthLimited { bound } => dls::search(initial, goal, bound),
            Strategy::AStar => astar::search(initial, goal),
            Strategy::Bidirectional => bidirectional::search(initial, goal),
        };

        match &result {
            Ok(solution) => log::debug!(
                "{self}: {} moves, {} expanded, {} generated",
                solution.moves.len(),
                solution.stats.expanded,
                solution.stats.generated
            ),
            Err(err) => log::debug!("{self}: {err}"),
        }

        result
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::BreadthFirst => write!(f, "breadth-first"),
            Strategy::DepthFirst => write!(f, "depth-first"),
            Strategy::DepthLimited { bound } => write!(f, "depth-limited({bound})"),
            Strategy::AStar => write!(f, "a*"),
            Strategy::Bidirectional => write!(f, "bidirectional"),
        }
    }
}

/// Node counters reported with every solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Nodes taken off the frontier and expanded.
    pub expanded: usize,
    /// Nodes added to the search tree, including the root.
    pub generated: usize,
}

/// A successful search: the tiles to slide, in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    pub moves: Vec<Move>,
    pub stats: SearchStats,
}

impl Solution {
    fn from_tree(tree: &SearchTree, terminal: NodeId, expanded: usize) -> Self {
        Self {
            moves: path::reconstruct(tree, terminal),
            stats: SearchStats {
                expanded,
                generated: tree.len(),
            },
        }
    }
}

/// Index of a node in its [`SearchTree`].
pub(crate) type NodeId = usize;

/// A board plus how the search reached it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode {
    pub(crate) board: Board,
    pub(crate) parent: Option<NodeId>,
    pub(crate) action: Option<Move>,
    pub(crate) depth: u32,
}

/// Arena holding every node created by one search.
///
/// Nodes are only appended, and a child always points at an existing node, so
/// parent links form a tree rooted at [`SearchTree::ROOT`].
#[derive(Debug)]
pub(crate) struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub(crate) const ROOT: NodeId = 0;

    pub(crate) fn new(root: Board) -> Self {
        Self {
            nodes: vec![SearchNode {
                board: root,
                parent: None,
                action: None,
                depth: 0,
            }],
        }
    }

    /// Appends a child of `parent` reached by sliding `action`.
    pub(crate) fn add(&mut self, parent: NodeId, action: Move, board: Board) -> NodeId {
        let depth = self.nodes[parent].depth + 1;
        self.nodes.push(SearchNode {
            board,
            parent: Some(parent),
            action: Some(action),
            depth,
        });
        self.nodes.len() - 1
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::replay::apply_moves;

    pub(crate) fn board(tiles: [u8; 9]) -> Board {
        Board::new(tiles).unwrap()
    }

    /// Asserts that `moves` replayed from `initial` lands on `goal`.
    pub(crate) fn assert_reaches(initial: Board, goal: Board, moves: &[Move]) {
        let reached = apply_moves(&initial, moves).expect("every move should be legal");
        assert_eq!(reached, goal, "Replay ended on the wrong board");
    }

    #[test]
    fn test_selector_roundtrip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_selector(algorithm.selector()), Some(algorithm));
        }
        assert_eq!(Algorithm::from_selector(5), None);
        assert_eq!(Algorithm::from_selector(-1), None);
    }

    #[test]
    fn test_settings_resolve_depth_bound_only_for_dls() {
        let settings = Settings::new(Algorithm::DepthLimited, 7);
        assert_eq!(settings.strategy(), Strategy::DepthLimited { bound: 7 });

        let settings = Settings::new(Algorithm::BreadthFirst, 7);
        assert_eq!(settings.strategy(), Strategy::BreadthFirst);
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.algorithm, Algorithm::BreadthFirst);
        assert_eq!(settings.depth_bound, DEFAULT_DEPTH_BOUND);
    }

    #[test]
    fn test_identical_boards_skip_search() {
        let start = board([8, 6, 7, 2, 5, 4, 3, 0, 1]);
        for strategy in [
            Strategy::BreadthFirst,
            Strategy::DepthFirst,
            Strategy::DepthLimited { bound: 0 },
            Strategy::AStar,
            Strategy::Bidirectional,
        ] {
            let solution = strategy.search(start, start).unwrap();
            assert!(solution.moves.is_empty(), "{strategy} should return no moves");
            assert_eq!(solution.stats, SearchStats::default());
        }
    }

    #[test]
    fn test_tree_depth_follows_parent() {
        let mut tree = SearchTree::new(Board::SOLVED);
        let (mv, next) = Board::SOLVED.slide(crate::board::Direction::Up).unwrap();
        let child = tree.add(SearchTree::ROOT, mv, next);
        assert_eq!(tree.node(child).depth, 1);
        assert_eq!(tree.node(child).parent, Some(SearchTree::ROOT));
        assert_eq!(tree.len(), 2);
    }
}
