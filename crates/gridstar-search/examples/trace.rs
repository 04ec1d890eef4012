//! Headless demo: run a search over a scattered board and print an
//! ASCII frame per engine step.
//!
//! ```sh
//! cargo run --example trace
//! ```

use gridstar_core::mapgen::scatter_obstacles;
use gridstar_core::{CellState, Grid, Point};
use gridstar_search::{Pathfinder, StepControl};
use rand::SeedableRng;
use rand::rngs::StdRng;

const ROWS: i32 = 12;

fn glyph(state: CellState) -> char {
    match state {
        CellState::Empty => '.',
        CellState::Start => 'S',
        CellState::End => 'E',
        CellState::Obstacle => '#',
        CellState::Open => 'o',
        CellState::Visited => 'x',
        CellState::Path => '*',
    }
}

fn frame(grid: &Grid) -> String {
    let mut out = String::new();
    for row in 0..grid.rows() {
        for col in 0..grid.rows() {
            if let Some(state) = grid.state(Point::new(row, col)) {
                out.push(glyph(state));
            }
        }
        out.push('\n');
    }
    out
}

fn main() {
    let mut grid = Grid::new(ROWS, 480);
    let _ = grid.paint(Point::new(0, 0));
    let _ = grid.paint(Point::new(ROWS - 1, ROWS - 1));
    let mut rng = StdRng::seed_from_u64(11);
    scatter_obstacles(&mut grid, 0.2, &mut rng);
    grid.recompute_neighbors();

    let mut steps = 0u32;
    let mut finder = Pathfinder::new(ROWS);
    let outcome = finder
        .search(&mut grid, |g| {
            steps += 1;
            println!("step {steps}:\n{}", frame(g));
            StepControl::Continue
        })
        .expect("start and end were painted");

    match outcome.path() {
        Some(path) => println!("found a path with {} edges", path.len() - 1),
        None => println!("no path through this board"),
    }
}
