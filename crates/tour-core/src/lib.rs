//! Knight's tour engine for the standard 8×8 board.
//!
//! The solver finds an open knight's tour from a given start square using
//! depth-first backtracking, with move candidates ordered either by
//! Warnsdorff's rule or by a uniform random shuffle. [`TourDriver`] wires the
//! two configurations together: a heuristic attempt first, then an
//! independent randomized-backtracking fallback.

mod board;
mod driver;
mod observer;
mod solver;

pub use board::{Board, Position, BOARD_SIZE, KNIGHT_MOVES, TOUR_LENGTH};
pub use driver::{TourDriver, TourReport};
pub use observer::{NullObserver, TourObserver};
pub use solver::{MoveOrdering, Solver, SolverConfig, MAX_RANDOM_ATTEMPTS};
