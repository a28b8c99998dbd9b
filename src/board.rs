//! Board representation for the 3x3 sliding-tile puzzle.
//!
//! A board is a permutation of the values 0..=8 laid out row-major, where 0 is
//! the blank. Boards are only constructed through validation, so every `Board`
//! in the crate upholds the permutation invariant.

use std::fmt;
use std::str::FromStr;

/// Number of tiles along one side of the board.
pub const SIDE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// Value used for the blank cell.
pub const BLANK: u8 = 0;

/// Errors produced when building a board from untrusted values.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    #[display("expected 9 tiles, found {found}")]
    WrongLength { found: usize },
    #[display("tile {value} is outside 0..=8")]
    OutOfRange { value: i64 },
    #[display("tile {value} appears more than once")]
    Repeated { value: u8 },
    #[display("invalid tile {token:?}")]
    Unparsable { token: String },
}

/// A tile slid into the blank. Always in 1..=8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move(u8);

impl Move {
    /// Returns `None` for the blank or any value past 8.
    pub const fn new(tile: u8) -> Option<Self> {
        if tile == BLANK || tile as usize >= CELLS {
            None
        } else {
            Some(Self(tile))
        }
    }

    pub const fn tile(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the sliding tile sits relative to the blank.
///
/// The declaration order is the neighbor generation order and must stay fixed:
/// breadth-first search returns the first shortest path in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the cell adjacent to `cell` in this direction, if it is on the board.
    #[inline]
    pub const fn step(self, cell: usize) -> Option<usize> {
        let row = cell / SIDE;
        let col = cell % SIDE;
        match self {
            Direction::Up if row > 0 => Some(cell - SIDE),
            Direction::Down if row + 1 < SIDE => Some(cell + SIDE),
            Direction::Left if col > 0 => Some(cell - 1),
            Direction::Right if col + 1 < SIDE => Some(cell + 1),
            _ => None,
        }
    }
}

/// A validated 3x3 tile arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board {
    tiles: [u8; CELLS],
    blank: u8,
}

impl Board {
    /// The conventional solved arrangement with the blank in the last cell.
    pub const SOLVED: Board = Board {
        tiles: [1, 2, 3, 4, 5, 6, 7, 8, 0],
        blank: 8,
    };

    /// Builds a board, rejecting anything that is not a permutation of 0..=8.
    pub fn new(tiles: [u8; CELLS]) -> Result<Self, BoardError> {
        let mut seen = [false; CELLS];
        let mut blank = 0;

        for (cell, &value) in tiles.iter().enumerate() {
            let slot = seen
                .get_mut(value as usize)
                .ok_or(BoardError::OutOfRange {
                    value: i64::from(value),
                })?;
            if *slot {
                return Err(BoardError::Repeated { value });
            }
            *slot = true;
            if value == BLANK {
                blank = cell as u8;
            }
        }

        Ok(Self { tiles, blank })
    }

    /// Returns the tiles in row-major order.
    #[inline]
    pub const fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    /// Returns the cell index of the blank.
    #[inline]
    pub const fn blank(&self) -> usize {
        self.blank as usize
    }

    /// Returns the cell index holding `tile`.
    pub fn position_of(&self, tile: u8) -> Option<usize> {
        self.tiles.iter().position(|&value| value == tile)
    }

    /// Slides the tile found in `direction` from the blank into the blank.
    ///
    /// Returns `None` when the blank sits on that edge of the board.
    #[inline]
    pub fn slide(&self, direction: Direction) -> Option<(Move, Board)> {
        let from = direction.step(self.blank())?;
        let tile = self.tiles[from];
        let mut tiles = self.tiles;
        tiles.swap(from, self.blank());
        Some((
            Move(tile),
            Board {
                tiles,
                blank: from as u8,
            },
        ))
    }

    /// Applies a move given as the tile to slide.
    ///
    /// Returns `None` when the tile is not orthogonally adjacent to the blank.
    pub fn apply(&self, mv: Move) -> Option<Board> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.slide(direction))
            .find_map(|(slid, board)| (slid == mv).then_some(board))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::SOLVED
    }
}

impl TryFrom<&[i32]> for Board {
    type Error = BoardError;

    fn try_from(values: &[i32]) -> Result<Self, Self::Error> {
        if values.len() != CELLS {
            return Err(BoardError::WrongLength {
                found: values.len(),
            });
        }

        let mut tiles = [0u8; CELLS];
        for (tile, &value) in tiles.iter_mut().zip(values) {
            *tile = u8::try_from(value)
                .ok()
                .filter(|&v| (v as usize) < CELLS)
                .ok_or(BoardError::OutOfRange {
                    value: i64::from(value),
                })?;
        }

        Board::new(tiles)
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Accepts either separated values (`1,2,3,4,5,6,7,8,0` or `1 2 3 ...`)
    /// or nine packed digits (`123456780`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .collect();

        let values = match tokens.as_slice() {
            [packed] if packed.chars().count() == CELLS => packed
                .chars()
                .map(|c| {
                    c.to_digit(10)
                        .map(|digit| digit as i32)
                        .ok_or_else(|| BoardError::Unparsable {
                            token: c.to_string(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?,
            _ => tokens
                .iter()
                .map(|token| {
                    token.parse::<i32>().map_err(|_| BoardError::Unparsable {
                        token: (*token).to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
        };

        Board::try_from(values.as_slice())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.tiles.chunks(SIDE).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for (col, &tile) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                if tile == BLANK {
                    write!(f, ".")?;
                } else {
                    write!(f, "{tile}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_repeated_tile() {
        let result = Board::new([1, 2, 3, 4, 5, 6, 7, 7, 0]);
        assert_eq!(result, Err(BoardError::Repeated { value: 7 }));
    }

    #[test]
    fn test_rejects_out_of_range_tile() {
        let result = Board::new([1, 2, 3, 4, 5, 6, 7, 9, 0]);
        assert_eq!(result, Err(BoardError::OutOfRange { value: 9 }));

        let values = [1, 2, 3, 4, 5, 6, 7, -8, 0];
        let result = Board::try_from(&values[..]);
        assert_eq!(result, Err(BoardError::OutOfRange { value: -8 }));
    }

    #[test]
    fn test_rejects_wrong_length() {
        let values = [1, 2, 3, 0];
        let result = Board::try_from(&values[..]);
        assert_eq!(result, Err(BoardError::WrongLength { found: 4 }));
    }

    #[test]
    fn test_parse_separated_and_packed() {
        let separated: Board = "8,6,7, 2,5,4, 3,0,1".parse().unwrap();
        let packed: Board = "867254301".parse().unwrap();
        assert_eq!(separated, packed);
        assert_eq!(packed.blank(), 7);
        assert_eq!(packed.tiles(), &[8, 6, 7, 2, 5, 4, 3, 0, 1]);
    }

    #[test]
    fn test_parse_reports_bad_token() {
        let result = "1,2,x,4,5,6,7,8,0".parse::<Board>();
        assert_eq!(
            result,
            Err(BoardError::Unparsable {
                token: "x".to_string()
            })
        );
    }

    #[test]
    fn test_slide_respects_edges() {
        // blank in the bottom-right corner: only up and left are legal
        let board = Board::SOLVED;
        assert!(board.slide(Direction::Down).is_none());
        assert!(board.slide(Direction::Right).is_none());

        let (mv, up) = board.slide(Direction::Up).unwrap();
        assert_eq!(mv.tile(), 6);
        assert_eq!(up.tiles(), &[1, 2, 3, 4, 5, 0, 7, 8, 6]);
        assert_eq!(up.blank(), 5);
    }

    #[test]
    fn test_apply_only_adjacent_tiles() {
        let board = Board::SOLVED;
        let moved = board.apply(Move::new(8).unwrap()).unwrap();
        assert_eq!(moved.tiles(), &[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        assert!(board.apply(Move::new(1).unwrap()).is_none());
    }

    #[test]
    fn test_move_range() {
        assert!(Move::new(0).is_none());
        assert!(Move::new(9).is_none());
        assert_eq!(Move::new(8).map(Move::tile), Some(8));
    }

    #[test]
    fn test_display() {
        assert_eq!(Board::SOLVED.to_string(), "1 2 3\n4 5 6\n7 8 .");
    }
}
