use crate::board::{Board, Position, KNIGHT_MOVES, TOUR_LENGTH};
use crate::observer::{NullObserver, TourObserver};
use log::debug;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// Retry budget for `MoveOrdering::Random`. Fixed policy constant: unordered
/// backtracking is far less likely to succeed on a single pass, so the solver
/// restarts with a fresh shuffle up to this many times.
pub const MAX_RANDOM_ATTEMPTS: usize = 10;

/// How move candidates are ordered at each search node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveOrdering {
    /// Warnsdorff's rule: try the most constrained destination first,
    /// ascending by accessibility, ties broken by the fixed enumeration
    /// order of [`KNIGHT_MOVES`]. Deterministic, so one attempt suffices.
    #[default]
    Warnsdorff,
    /// Uniform random permutation per node, with up to
    /// [`MAX_RANDOM_ATTEMPTS`] full restarts
    Random,
}

/// Configuration for the solver, fixed for its lifetime
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Candidate ordering strategy
    pub ordering: MoveOrdering,
    /// Seed for the random source; `None` seeds from entropy. Only
    /// `MoveOrdering::Random` consumes randomness, so fixing the seed makes
    /// that mode reproducible.
    pub seed: Option<u64>,
}

/// Knight's tour solver: one board plus a backtracking search over it
pub struct Solver {
    board: Board,
    config: SolverConfig,
    rng: Pcg64Mcg,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a solver with the default (Warnsdorff) configuration
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    /// Create a solver with a custom configuration
    pub fn with_config(config: SolverConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => Pcg64Mcg::seed_from_u64(seed),
            None => Pcg64Mcg::from_entropy(),
        };
        Self {
            board: Board::new(),
            config,
            rng,
        }
    }

    /// Read access to the board for display
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consume the solver, keeping its board
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Attempt a full tour from the given 0-based start square.
    ///
    /// Out-of-range coordinates are rejected immediately with `false` and no
    /// state mutation. Otherwise the board is reset, the start square becomes
    /// move 1, and the recursive search runs for move 2 onward. Returns
    /// `true` iff every square was assigned; on failure the board reflects
    /// the last attempt made.
    pub fn attempt_tour(&mut self, start_row: i32, start_col: i32) -> bool {
        self.attempt_tour_observed(start_row, start_col, &mut NullObserver)
    }

    /// Same as [`attempt_tour`](Self::attempt_tour), emitting a frame to
    /// `observer` after the start mark and after every placement and undo
    pub fn attempt_tour_observed(
        &mut self,
        start_row: i32,
        start_col: i32,
        observer: &mut dyn TourObserver,
    ) -> bool {
        let Some(start) = Position::try_new(start_row, start_col) else {
            return false;
        };

        let attempts = match self.config.ordering {
            MoveOrdering::Warnsdorff => 1,
            MoveOrdering::Random => MAX_RANDOM_ATTEMPTS,
        };

        for attempt in 1..=attempts {
            self.board.reset();
            self.board.place(start, 1);
            observer.frame(&self.board);

            if self.search(start, 2, observer) {
                debug!("tour found from ({start_row}, {start_col}) on attempt {attempt}");
                return true;
            }
            debug!("attempt {attempt} of {attempts} exhausted without a tour");
        }
        false
    }

    /// Depth-first search assigning `next_move` from `from`.
    ///
    /// Each candidate is tentatively placed, recursed into, and undone on
    /// failure before the next is tried; no candidate left means backtrack.
    fn search(&mut self, from: Position, next_move: u8, observer: &mut dyn TourObserver) -> bool {
        if next_move as usize > TOUR_LENGTH {
            return true;
        }

        for dest in self.ordered_candidates(from) {
            self.board.place(dest, next_move);
            observer.frame(&self.board);

            if self.search(dest, next_move + 1, observer) {
                return true;
            }

            self.board.unplace(dest);
            observer.frame(&self.board);
        }
        false
    }

    /// In-bounds, unvisited destinations from `from`, ordered per the config
    fn ordered_candidates(&mut self, from: Position) -> Vec<Position> {
        let mut candidates: Vec<Position> = KNIGHT_MOVES
            .iter()
            .filter_map(|&step| from.step(step))
            .filter(|&dest| self.board.get(dest) == 0)
            .collect();

        match self.config.ordering {
            // Stable sort keeps enumeration order among equal counts
            MoveOrdering::Warnsdorff => {
                candidates.sort_by_key(|&dest| self.board.accessibility(dest));
            }
            MoveOrdering::Random => candidates.shuffle(&mut self.rng),
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_start_rejected_without_mutation() {
        let mut solver = Solver::new();
        assert!(solver.attempt_tour(0, 0));
        let snapshot = solver.board().clone();

        assert!(!solver.attempt_tour(-1, 0));
        assert!(!solver.attempt_tour(0, 8));
        assert!(!solver.attempt_tour(8, 0));
        assert_eq!(solver.board(), &snapshot);
    }

    #[test]
    fn test_invalid_start_leaves_fresh_board_empty() {
        let mut solver = Solver::new();
        assert!(!solver.attempt_tour(-1, -1));
        assert_eq!(solver.board(), &Board::new());
    }

    #[test]
    fn test_warnsdorff_orders_by_accessibility() {
        let mut solver = Solver::new();
        solver.board.place(Position::new(0, 0), 1);

        // From the corner both candidates have accessibility 5; the stable
        // sort must keep the enumeration order of KNIGHT_MOVES
        let ordered = solver.ordered_candidates(Position::new(0, 0));
        assert_eq!(ordered, vec![Position::new(1, 2), Position::new(2, 1)]);

        // From (3, 3) the corner-adjacent squares are the most constrained
        let mut solver = Solver::new();
        solver.board.place(Position::new(3, 3), 1);
        let ordered = solver.ordered_candidates(Position::new(3, 3));
        let first = ordered[0];
        let min = ordered
            .iter()
            .map(|&dest| solver.board.accessibility(dest))
            .min()
            .unwrap();
        assert_eq!(solver.board.accessibility(first), min);
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let config = SolverConfig {
            ordering: MoveOrdering::Random,
            seed: Some(7),
        };
        let mut a = Solver::with_config(config.clone());
        let mut b = Solver::with_config(config);

        for _ in 0..5 {
            let from = Position::new(3, 3);
            assert_eq!(a.ordered_candidates(from), b.ordered_candidates(from));
        }
    }

    #[test]
    fn test_heuristic_tour_from_corner() {
        let mut solver = Solver::new();
        assert!(solver.attempt_tour(0, 0));
        assert!(solver.board().is_complete());
        assert!(solver.board().is_valid_tour());
    }

    #[test]
    fn test_observer_sees_every_placement() {
        struct CountFrames(usize);
        impl crate::TourObserver for CountFrames {
            fn frame(&mut self, _board: &Board) {
                self.0 += 1;
            }
        }

        let mut solver = Solver::new();
        let mut frames = CountFrames(0);
        assert!(solver.attempt_tour_observed(0, 0, &mut frames));
        // One frame for the start mark, one per placement, one per undo:
        // at least 64 frames for a successful tour
        assert!(frames.0 >= TOUR_LENGTH);
    }
}
