//! The cell model: [`CellState`] role tags and the [`Cell`] itself.

use crate::geom::Point;

/// The role a grid cell currently holds. Exactly one applies at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Start,
    End,
    /// Impassable; excluded from neighbour lists at recomputation time.
    Obstacle,
    /// On the search frontier: discovered but not yet expanded.
    Open,
    /// Expanded by the search. Cosmetic bookkeeping: correctness is
    /// carried by the engine's score maps, not this tag.
    Visited,
    /// On the reconstructed shortest path.
    Path,
}

impl CellState {
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    #[inline]
    pub const fn is_start(self) -> bool {
        matches!(self, Self::Start)
    }

    #[inline]
    pub const fn is_end(self) -> bool {
        matches!(self, Self::End)
    }

    #[inline]
    pub const fn is_obstacle(self) -> bool {
        matches!(self, Self::Obstacle)
    }
}

/// A single board cell: its coordinate, current state, and the cached
/// list of passable orthogonal neighbours.
///
/// The neighbour list is stale until
/// [`Grid::recompute_neighbors`](crate::grid::Grid::recompute_neighbors)
/// runs, and goes stale again the moment an obstacle changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub state: CellState,
    pub neighbors: Vec<Point>,
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_state_round_trip() {
        for state in [
            CellState::Empty,
            CellState::Start,
            CellState::End,
            CellState::Obstacle,
            CellState::Open,
            CellState::Visited,
            CellState::Path,
        ] {
            let json = serde_json::to_string(&state).unwrap();
            let back: CellState = serde_json::from_str(&json).unwrap();
            assert_eq!(state, back);
        }
    }
}
