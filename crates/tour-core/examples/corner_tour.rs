//! Basic example of running the tour engine headless

use tour_core::{NullObserver, TourDriver};

fn main() {
    println!("Searching for a knight's tour from A1...\n");

    let report = TourDriver::new().run(0, 0, &mut NullObserver);
    println!("{}", report.board);

    if report.warnsdorff_solved {
        println!("Found with Warnsdorff ordering.");
    } else if report.fallback_solved == Some(true) {
        println!("Found with randomized backtracking.");
    } else {
        println!("No tour found.");
    }
}
