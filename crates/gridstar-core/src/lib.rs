//! **gridstar-core** — grid model for the A* demonstration engine.
//!
//! This crate provides the board the search engine runs on: the [`Point`]
//! cell coordinate, the [`CellState`] role tags, the [`Grid`] with its
//! cached neighbour lists, headless editing in the demo's click rules,
//! random obstacle scattering, and the render-facing colour table.
//!
//! Nothing here renders. A harness that wants to draw the board reads
//! cell states (and their [`style`] colours) after each engine step.

pub mod cell;
mod editor;
pub mod geom;
pub mod grid;
pub mod mapgen;
pub mod style;

pub use cell::{Cell, CellState};
pub use geom::Point;
pub use grid::Grid;
pub use style::Color;
