//! Interactive knight's tour CLI.
//!
//! Prompts for a start square (or takes it from flags), runs the heuristic
//! search with an automatic randomized-backtracking fallback, and prints the
//! final board — optionally animating every search step.

mod animate;
mod input;
mod render;
mod theme;

use animate::AnimatedBoard;
use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use theme::Theme;
use tour_core::{NullObserver, TourDriver, TourReport};

/// Find a knight's tour on the standard 8×8 board
#[derive(Parser)]
#[command(name = "knights-tour", version, about)]
struct Args {
    /// Start row, 1-8 (prompted interactively when omitted)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=8))]
    row: Option<u8>,
    /// Start column, 1-8 (prompted interactively when omitted)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=8))]
    col: Option<u8>,
    /// Animate each search step
    #[arg(long)]
    animate: bool,
    /// Delay between animation frames in milliseconds
    #[arg(long, default_value_t = 150)]
    delay_ms: u64,
    /// Seed for the randomized fallback attempt
    #[arg(long)]
    seed: Option<u64>,
    /// Write the solved tour to this path as JSON
    #[arg(long)]
    save: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("=== KNIGHT'S TOUR ===");

    let interactive = args.row.is_none() || args.col.is_none();
    let animate = if args.animate {
        true
    } else if interactive {
        input::prompt_yes_no("Animate each step? (y/n): ")?
    } else {
        false
    };
    let (row, col) = match (args.row, args.col) {
        (Some(row), Some(col)) => (i32::from(row) - 1, i32::from(col) - 1),
        _ => input::prompt_start_square()?,
    };

    let driver = match args.seed {
        Some(seed) => TourDriver::with_fallback_seed(seed),
        None => TourDriver::new(),
    };

    let report = if animate {
        run_animated(&driver, row, col, Duration::from_millis(args.delay_ms))?
    } else {
        driver.run(row, col, &mut NullObserver)
    };

    println!("{}", report.board);
    if report.warnsdorff_solved {
        println!("Complete tour found with Warnsdorff ordering!");
    } else {
        println!("No tour found with Warnsdorff ordering.");
        match report.fallback_solved {
            Some(true) => println!("Randomized backtracking found a complete tour!"),
            Some(false) => println!("Randomized backtracking found no complete tour either."),
            None => {}
        }
    }

    if let Some(path) = &args.save {
        if report.solved() {
            let file = File::create(path)?;
            serde_json::to_writer_pretty(file, &report.board)?;
            println!("Saved tour to {}", path.display());
        } else {
            println!("Nothing to save: no complete tour was found.");
        }
    }

    Ok(())
}

/// Run the driver inside the alternate screen with an animating observer,
/// restoring the terminal before returning
fn run_animated(driver: &TourDriver, row: i32, col: i32, delay: Duration) -> io::Result<TourReport> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let mut observer = AnimatedBoard::new(delay, Theme::default());
    let report = driver.run(row, col, &mut observer);

    execute!(stdout, Show, LeaveAlternateScreen)?;
    Ok(report)
}
