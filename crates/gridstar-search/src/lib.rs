//! Pathfinding engine for the gridstar demo.
//!
//! This crate runs A* over a [`gridstar_core::Grid`] whose neighbour
//! lists have been recomputed, and reports progress through a step
//! callback so a rendering harness can animate the search without the
//! engine knowing anything about rendering:
//!
//! - **A\*** search loop ([`Pathfinder::search`]). After each expansion
//!   it fires `on_step(&Grid)`; the callback's [`StepControl`] verdict
//!   allows cooperative cancellation.
//! - Deterministic ordering: the frontier is keyed by
//!   `(f-score, insertion sequence)`, FIFO among equal scores
//!   ([`Frontier`]).
//! - Path reconstruction walks predecessor links end-to-start, marking
//!   cells and firing the callback once per step.
//! - **BFS** distance maps ([`Pathfinder::bfs_map`]) over the same
//!   neighbour lists, the ground-truth oracle for path lengths.
//!
//! Everything runs synchronously on the caller's thread; no rendering
//! surface is ever required.

mod astar;
mod bfs;
mod distance;
mod frontier;

pub use astar::{Pathfinder, SearchError, SearchOutcome, StepControl};
pub use distance::{Heuristic, euclidean, manhattan};
pub use frontier::Frontier;

/// Sentinel cost meaning "unreachable" in score and distance maps.
pub const UNREACHABLE: i32 = i32::MAX;
