use crate::render;
use crate::theme::Theme;
use log::warn;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use tour_core::{Board, TourObserver};

/// Observer that redraws the board for every search step and then sleeps for
/// a fixed delay, so incremental progress is observable. A zero delay skips
/// the sleep entirely.
pub struct AnimatedBoard {
    stdout: io::Stdout,
    delay: Duration,
    theme: Theme,
}

impl AnimatedBoard {
    pub fn new(delay: Duration, theme: Theme) -> Self {
        Self {
            stdout: io::stdout(),
            delay,
            theme,
        }
    }

    fn draw(&mut self, board: &Board) -> io::Result<()> {
        render::draw_board(&mut self.stdout, board, 2, 1, &self.theme)?;
        self.stdout.flush()
    }
}

impl TourObserver for AnimatedBoard {
    fn frame(&mut self, board: &Board) {
        // Rendering failures must not disturb the search
        if let Err(err) = self.draw(board) {
            warn!("animation frame failed: {err}");
        }
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}
