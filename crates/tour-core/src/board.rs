use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the board
pub const BOARD_SIZE: usize = 8;

/// Number of squares a complete tour must visit
pub const TOUR_LENGTH: usize = BOARD_SIZE * BOARD_SIZE;

/// The 8 legal knight displacements as (row, col) offsets.
///
/// The enumeration order is fixed: ties in the Warnsdorff ordering are broken
/// by this order.
pub const KNIGHT_MOVES: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// A square on the board, 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position. Both coordinates must be in `[0, BOARD_SIZE)`.
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self { row, col }
    }

    /// Create a position from possibly out-of-range coordinates.
    ///
    /// Returns `None` when either coordinate falls outside the board, so a
    /// `Position` that exists is always in bounds.
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        if (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col) {
            Some(Self {
                row: row as usize,
                col: col as usize,
            })
        } else {
            None
        }
    }

    /// Apply a knight displacement, returning `None` if it leaves the board
    pub fn step(self, (dr, dc): (i8, i8)) -> Option<Self> {
        Self::try_new(self.row as i32 + dr as i32, self.col as i32 + dc as i32)
    }

    /// Whether `other` is one knight move away from `self`
    pub fn is_knight_move(self, other: Self) -> bool {
        KNIGHT_MOVES.iter().any(|&step| self.step(step) == Some(other))
    }
}

/// An 8×8 board of move-order values.
///
/// A cell holds 0 while unvisited, or `k` if it was the `k`-th square visited
/// (1-indexed). At any point the nonzero cells form a single self-avoiding
/// knight path whose values are the contiguous range `1..=visited`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[u8; BOARD_SIZE]; BOARD_SIZE],
    visited: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            cells: [[0; BOARD_SIZE]; BOARD_SIZE],
            visited: 0,
        }
    }

    /// Clear every cell back to unvisited. Idempotent.
    pub fn reset(&mut self) {
        self.cells = [[0; BOARD_SIZE]; BOARD_SIZE];
        self.visited = 0;
    }

    /// Move-order value at a position (0 = unvisited)
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Number of squares visited so far
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// Whether every square has been assigned a move number
    pub fn is_complete(&self) -> bool {
        self.visited == TOUR_LENGTH
    }

    /// Mark a square as the `move_number`-th visited
    pub(crate) fn place(&mut self, pos: Position, move_number: u8) {
        debug_assert_eq!(self.cells[pos.row][pos.col], 0);
        self.cells[pos.row][pos.col] = move_number;
        self.visited += 1;
    }

    /// Undo a tentative placement
    pub(crate) fn unplace(&mut self, pos: Position) {
        debug_assert_ne!(self.cells[pos.row][pos.col], 0);
        self.cells[pos.row][pos.col] = 0;
        self.visited -= 1;
    }

    /// Count the in-bounds, unvisited knight destinations from `pos`.
    ///
    /// Read-only probe: it is evaluated for every candidate move at a search
    /// node before committing to one, and must not disturb the board.
    pub fn accessibility(&self, pos: Position) -> usize {
        KNIGHT_MOVES
            .iter()
            .filter_map(|&step| pos.step(step))
            .filter(|&dest| self.get(dest) == 0)
            .count()
    }

    /// Check that the board holds a complete, legal open tour: each value
    /// 1..=64 appears exactly once and consecutive values are a knight move
    /// apart.
    pub fn is_valid_tour(&self) -> bool {
        let mut order: [Option<Position>; TOUR_LENGTH] = [None; TOUR_LENGTH];
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let value = self.cells[row][col] as usize;
                if value == 0 || value > TOUR_LENGTH {
                    return false;
                }
                if order[value - 1].is_some() {
                    return false;
                }
                order[value - 1] = Some(Position::new(row, col));
            }
        }
        order.windows(2).all(|pair| match (pair[0], pair[1]) {
            (Some(a), Some(b)) => a.is_knight_move(b),
            _ => false,
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   A   B   C   D   E   F   G   H")?;
        writeln!(f, " +---+---+---+---+---+---+---+---+")?;
        for row in 0..BOARD_SIZE {
            write!(f, "{}|", row + 1)?;
            for col in 0..BOARD_SIZE {
                let value = self.cells[row][col];
                if value == 0 {
                    write!(f, "   |")?;
                } else {
                    write!(f, "{value:2} |")?;
                }
            }
            writeln!(f)?;
            writeln!(f, " +---+---+---+---+---+---+---+---+")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_bounds() {
        assert!(Position::try_new(0, 0).is_some());
        assert!(Position::try_new(7, 7).is_some());
        assert!(Position::try_new(-1, 0).is_none());
        assert!(Position::try_new(0, 8).is_none());
        assert!(Position::try_new(8, 8).is_none());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut board = Board::new();
        board.place(Position::new(0, 0), 1);
        board.place(Position::new(1, 2), 2);

        board.reset();
        let once = board.clone();
        board.reset();

        assert_eq!(board, once);
        assert_eq!(board, Board::new());
        assert_eq!(board.visited(), 0);
    }

    #[test]
    fn test_accessibility_on_empty_board() {
        let board = Board::new();
        // Corners reach 2 squares, the centre reaches all 8
        assert_eq!(board.accessibility(Position::new(0, 0)), 2);
        assert_eq!(board.accessibility(Position::new(7, 7)), 2);
        assert_eq!(board.accessibility(Position::new(3, 3)), 8);
        assert_eq!(board.accessibility(Position::new(0, 3)), 4);
    }

    #[test]
    fn test_accessibility_is_pure() {
        let mut board = Board::new();
        board.place(Position::new(0, 0), 1);
        board.place(Position::new(1, 2), 2);

        let snapshot = board.clone();
        let first = board.accessibility(Position::new(2, 1));
        let second = board.accessibility(Position::new(2, 1));

        assert_eq!(first, second);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_accessibility_excludes_visited() {
        let mut board = Board::new();
        assert_eq!(board.accessibility(Position::new(2, 1)), 6);
        board.place(Position::new(0, 0), 1);
        assert_eq!(board.accessibility(Position::new(2, 1)), 5);
    }

    #[test]
    fn test_display_format() {
        let mut board = Board::new();
        board.place(Position::new(0, 0), 1);
        board.place(Position::new(1, 2), 2);

        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "   A   B   C   D   E   F   G   H");
        assert_eq!(lines[1], " +---+---+---+---+---+---+---+---+");
        // Move numbers right-justified in their cells, empty cells blank
        assert_eq!(lines[2], "1| 1 |   |   |   |   |   |   |   |");
        assert_eq!(lines[4], "2|   |   | 2 |   |   |   |   |   |");
    }

    #[test]
    fn test_knight_adjacency() {
        let a = Position::new(0, 0);
        assert!(a.is_knight_move(Position::new(1, 2)));
        assert!(a.is_knight_move(Position::new(2, 1)));
        assert!(!a.is_knight_move(Position::new(1, 1)));
        assert!(!a.is_knight_move(a));
    }
}
