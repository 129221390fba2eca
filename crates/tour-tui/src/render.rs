use crate::theme::Theme;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Print, SetForegroundColor},
};
use std::io::{self, Write};
use tour_core::{Board, Position, BOARD_SIZE, TOUR_LENGTH};

const HORIZONTAL_RULE: &str = " +---+---+---+---+---+---+---+---+";
const COLUMN_LABELS: &str = "   A   B   C   D   E   F   G   H";

/// Draw the board at a fixed origin.
///
/// Cells are a constant 3 characters wide, so redrawing over a previous frame
/// fully overwrites it without clearing the screen. The most recent move is
/// highlighted.
pub fn draw_board(
    stdout: &mut impl Write,
    board: &Board,
    origin_x: u16,
    origin_y: u16,
    theme: &Theme,
) -> io::Result<()> {
    execute!(
        stdout,
        MoveTo(origin_x, origin_y),
        SetForegroundColor(theme.label),
        Print(COLUMN_LABELS),
        MoveTo(origin_x, origin_y + 1),
        SetForegroundColor(theme.border),
        Print(HORIZONTAL_RULE),
    )?;

    // Values stay contiguous 1..=visited during the search, so the visited
    // count is also the latest move number
    let latest = board.visited() as u8;

    for row in 0..BOARD_SIZE {
        let y = origin_y + 2 + row as u16 * 2;
        execute!(
            stdout,
            MoveTo(origin_x, y),
            SetForegroundColor(theme.label),
            Print(row + 1),
            SetForegroundColor(theme.border),
            Print("|"),
        )?;

        for col in 0..BOARD_SIZE {
            let value = board.get(Position::new(row, col));
            let color = if value == latest { theme.current } else { theme.visited };
            let cell = if value == 0 {
                "   ".to_string()
            } else {
                format!("{value:2} ")
            };
            execute!(
                stdout,
                SetForegroundColor(color),
                Print(cell),
                SetForegroundColor(theme.border),
                Print("|"),
            )?;
        }

        execute!(
            stdout,
            MoveTo(origin_x, y + 1),
            SetForegroundColor(theme.border),
            Print(HORIZONTAL_RULE),
        )?;
    }

    execute!(
        stdout,
        MoveTo(origin_x, origin_y + 2 + BOARD_SIZE as u16 * 2),
        SetForegroundColor(theme.fg),
        Print(format!("Move {:2} of {}", board.visited(), TOUR_LENGTH)),
    )
}
