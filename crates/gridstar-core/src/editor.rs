//! Headless grid editing in the demo's click rules.
//!
//! The interactive demo places cells with the mouse: the first painted
//! cell becomes the start, the second the end, and every later paint an
//! obstacle. Erasing resets a cell to empty whatever it held. These
//! rules live here as plain grid operations so no window is required.

use crate::cell::CellState;
use crate::geom::Point;
use crate::grid::Grid;

impl Grid {
    /// Paint the cell at `p` following the placement sequence: start,
    /// then end, then obstacles. Painting an existing start or end cell
    /// is a no-op. Returns the state painted, or `None` if nothing
    /// changed.
    ///
    /// The sequence keeps the board invariants: at most one start, at
    /// most one end, and the two never coincide.
    pub fn paint(&mut self, p: Point) -> Option<CellState> {
        let state = self.state(p)?;
        if state.is_start() || state.is_end() {
            return None;
        }
        let painted = if self.start().is_none() {
            CellState::Start
        } else if self.end().is_none() {
            CellState::End
        } else {
            CellState::Obstacle
        };
        self.set_state(p, painted);
        Some(painted)
    }

    /// Reset the cell at `p` to empty, whatever it held.
    #[inline]
    pub fn erase(&mut self, p: Point) {
        self.reset(p);
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.state = CellState::Empty;
        }
    }

    /// Demote transient search marks (open, visited, path) back to
    /// empty, keeping start, end and obstacles, so the board can host
    /// another search.
    pub fn clear_search(&mut self) {
        for cell in self.cells.iter_mut() {
            if matches!(
                cell.state,
                CellState::Open | CellState::Visited | CellState::Path
            ) {
                cell.state = CellState::Empty;
            }
        }
    }
}
