//! Random obstacle placement for demos and tests.

use rand::Rng;
use rand::RngExt;

use crate::cell::CellState;
use crate::grid::Grid;

/// Scatter obstacles over the empty cells of `grid`.
///
/// Each empty cell independently becomes an obstacle with probability
/// `density` (clamped to `0.0..=1.0`). Start, end and already-placed
/// obstacles are left untouched. Neighbour lists are not recomputed.
/// Returns the number of obstacles placed.
pub fn scatter_obstacles(grid: &mut Grid, density: f64, rng: &mut impl Rng) -> usize {
    let density = density.clamp(0.0, 1.0);
    let mut placed = 0;
    for cell in grid.cells.iter_mut() {
        if cell.state.is_empty() && rng.random_bool(density) {
            cell.state = CellState::Obstacle;
            placed += 1;
        }
    }
    placed
}
