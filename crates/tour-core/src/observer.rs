use crate::board::Board;

/// Sink for intermediate search states.
///
/// The solver calls [`frame`](TourObserver::frame) after the start square is
/// marked, after every tentative placement, and after every undo. Observers
/// are purely observational: they see a read-only board and cannot influence
/// the search. Pacing (e.g. an animation delay) belongs to the observer, not
/// the engine.
pub trait TourObserver {
    fn frame(&mut self, board: &Board);
}

/// Observer that discards every frame; used for headless runs and tests
pub struct NullObserver;

impl TourObserver for NullObserver {
    fn frame(&mut self, _board: &Board) {}
}
