//! The A* search engine and path reconstruction.

use std::collections::VecDeque;
use std::fmt;

use gridstar_core::{CellState, Grid, Point};
use log::{debug, trace};

use crate::UNREACHABLE;
use crate::distance::Heuristic;
use crate::frontier::Frontier;

// ---------------------------------------------------------------------------
// Step callback
// ---------------------------------------------------------------------------

/// Verdict returned by the step callback.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepControl {
    /// Keep going.
    Continue,
    /// Stop the search; it returns [`SearchOutcome::Cancelled`].
    Cancel,
}

// ---------------------------------------------------------------------------
// Outcomes and errors
// ---------------------------------------------------------------------------

/// Terminal result of a search run.
///
/// [`NoPath`](Self::NoPath) and [`Cancelled`](Self::Cancelled) are
/// ordinary outcomes, not errors: the first means the frontier emptied
/// with the end cell unreached, the second that the caller asked to
/// stop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The end cell was reached. Carries the full path in start-to-end
    /// order, endpoints included.
    Found(Vec<Point>),
    /// Every reachable cell was expanded without meeting the end cell.
    NoPath,
    /// The step callback returned [`StepControl::Cancel`].
    Cancelled,
}

impl SearchOutcome {
    /// Whether a path was found.
    #[inline]
    pub fn found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The path in start-to-end order, if one was found.
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }
}

/// Precondition violations detected before a search starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The grid has no start cell.
    MissingStart,
    /// The grid has no end cell.
    MissingEnd,
    /// The grid side length does not match the finder's capacity.
    SizeMismatch { expected: i32, actual: i32 },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => write!(f, "search: grid has no start cell"),
            Self::MissingEnd => write!(f, "search: grid has no end cell"),
            Self::SizeMismatch { expected, actual } => {
                write!(f, "search: finder sized for {expected}x{expected} grid, got {actual}x{actual}")
            }
        }
    }
}

impl std::error::Error for SearchError {}

// ---------------------------------------------------------------------------
// Node storage
// ---------------------------------------------------------------------------

/// Per-cell search bookkeeping, lazily invalidated by generation.
#[derive(Clone)]
pub(crate) struct Node {
    g: i32,
    f: f64,
    parent: usize,
    generation: u32,
    open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            f: 0.0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

enum Terminal {
    ReachedEnd,
    Exhausted,
    Cancelled,
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Reusable A* searcher for `rows`×`rows` grids.
///
/// Owns the node array, frontier and BFS scratch so repeated runs incur
/// no allocations after the first. Search state is logically fresh per
/// run: the generation counter bumps at the start of each search and
/// nodes from earlier runs read as untouched.
pub struct Pathfinder {
    pub(crate) rows: i32,
    heuristic: Heuristic,
    nodes: Vec<Node>,
    generation: u32,
    frontier: Frontier,
    pub(crate) nbuf: Vec<Point>,
    pub(crate) bfs_map: Vec<i32>,
    pub(crate) bfs_queue: VecDeque<usize>,
}

impl Pathfinder {
    /// Create a finder for `rows`×`rows` grids.
    pub fn new(rows: i32) -> Self {
        let n = rows.max(1);
        let len = (n * n) as usize;
        Self {
            rows: n,
            heuristic: Heuristic::default(),
            nodes: vec![Node::default(); len],
            generation: 0,
            frontier: Frontier::new(),
            nbuf: Vec::with_capacity(4),
            bfs_map: vec![UNREACHABLE; len],
            bfs_queue: VecDeque::new(),
        }
    }

    /// Use `heuristic` instead of the default Manhattan estimate
    /// (builder).
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// The grid side length this finder is sized for.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Convert a point to a flat index. Callers guarantee `p` is inside
    /// a `rows`×`rows` board.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> usize {
        debug_assert!(p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.rows);
        (p.row * self.rows + p.col) as usize
    }

    /// Convert a flat index back to a point.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new(idx as i32 / self.rows, idx as i32 % self.rows)
    }

    pub(crate) fn check_size(&self, grid: &Grid) -> Result<(), SearchError> {
        if grid.rows() != self.rows {
            return Err(SearchError::SizeMismatch {
                expected: self.rows,
                actual: grid.rows(),
            });
        }
        Ok(())
    }

    /// Run A* from the grid's start cell to its end cell.
    ///
    /// `on_step` fires once after each expansion and once per
    /// reconstruction step; returning [`StepControl::Cancel`] ends the
    /// run early. The grid's neighbour lists must have been recomputed
    /// since the last obstacle change
    /// ([`Grid::recompute_neighbors`]); mutating obstacles mid-search is
    /// unsupported.
    ///
    /// As the search runs, touched cells are tagged
    /// [`CellState::Open`] and [`CellState::Visited`], and on success
    /// the intermediate path cells [`CellState::Path`]. The tags are
    /// cosmetic; a harness reads them to render progress.
    pub fn search<F>(
        &mut self,
        grid: &mut Grid,
        mut on_step: F,
    ) -> Result<SearchOutcome, SearchError>
    where
        F: FnMut(&Grid) -> StepControl,
    {
        self.check_size(grid)?;
        let start = grid.start().ok_or(SearchError::MissingStart)?;
        let end = grid.end().ok_or(SearchError::MissingEnd)?;

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;
        self.frontier.clear();

        let start_idx = self.idx(start);
        let end_idx = self.idx(end);

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = self.heuristic.estimate(start, end);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }
        self.frontier.push(start, self.nodes[start_idx].f);

        debug!("search: start={start} end={end} heuristic={:?}", self.heuristic);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let terminal = 'search: loop {
            let Some(current) = self.frontier.pop() else {
                break 'search Terminal::Exhausted;
            };
            let ci = self.idx(current);

            // Skip stale frontier duplicates: membership, not queue
            // contents, gates handling. Each live cell is extracted
            // exactly once per run.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }
            self.nodes[ci].open = false;

            if ci == end_idx {
                break 'search Terminal::ReachedEnd;
            }

            let current_g = self.nodes[ci].g;
            trace!("expand {current} g={current_g}");

            nbuf.clear();
            nbuf.extend_from_slice(grid.neighbors(current));

            for &np in nbuf.iter() {
                let ni = self.idx(np);
                let tentative_g = current_g + 1; // unit edge cost

                let n = &mut self.nodes[ni];
                if n.generation != cur_gen {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                    n.open = false;
                }
                if tentative_g >= n.g {
                    continue;
                }

                n.g = tentative_g;
                n.f = tentative_g as f64 + self.heuristic.estimate(np, end);
                n.parent = ci;

                if !n.open {
                    n.open = true;
                    let f = n.f;
                    self.frontier.push(np, f);
                    grid.set_state(np, CellState::Open);
                }
            }

            if on_step(grid) == StepControl::Cancel {
                break 'search Terminal::Cancelled;
            }

            if ci != start_idx {
                grid.set_state(current, CellState::Visited);
            }
        };

        self.nbuf = nbuf;

        match terminal {
            Terminal::ReachedEnd => {
                let path = self.emit_path(grid, start, end, &mut on_step);
                grid.set_state(end, CellState::End);
                debug!("search: found path with {} edges", path.len() - 1);
                Ok(SearchOutcome::Found(path))
            }
            Terminal::Exhausted => {
                debug!("search: frontier exhausted, no path");
                Ok(SearchOutcome::NoPath)
            }
            Terminal::Cancelled => {
                debug!("search: cancelled by caller");
                // The end cell may have been tagged Open when discovered.
                grid.set_state(end, CellState::End);
                Ok(SearchOutcome::Cancelled)
            }
        }
    }

    /// Mark and collect the found path.
    ///
    /// Walks predecessor links from `end` back toward `start`, tagging
    /// each intermediate cell [`CellState::Path`] and firing `on_step`
    /// once per step so a harness can animate reconstruction. A cancel
    /// verdict stops the callbacks; the cells keep their tags. Returns
    /// the full path in start-to-end order.
    fn emit_path<F>(&self, grid: &mut Grid, start: Point, end: Point, on_step: &mut F) -> Vec<Point>
    where
        F: FnMut(&Grid) -> StepControl,
    {
        let mut path = vec![end];
        let mut animate = true;
        for p in PathTrace::new(&self.nodes, self.rows, self.idx(end)) {
            grid.set_state(p, CellState::Path);
            path.push(p);
            if animate && on_step(grid) == StepControl::Cancel {
                animate = false;
            }
        }
        path.push(start);
        path.reverse();
        path
    }
}

// ---------------------------------------------------------------------------
// Path reconstruction
// ---------------------------------------------------------------------------

/// One-shot walk over predecessor links in end-to-start order.
///
/// Yields the strictly-intermediate path cells: the first item is the
/// predecessor of the end cell, the last is the successor of the start
/// cell (the one cell with no predecessor entry). Neither endpoint is
/// yielded.
struct PathTrace<'a> {
    nodes: &'a [Node],
    rows: i32,
    cur: usize,
}

impl<'a> PathTrace<'a> {
    fn new(nodes: &'a [Node], rows: i32, end_idx: usize) -> Self {
        Self {
            nodes,
            rows,
            cur: nodes[end_idx].parent,
        }
    }
}

impl Iterator for PathTrace<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.cur == usize::MAX {
            return None;
        }
        let parent = self.nodes[self.cur].parent;
        if parent == usize::MAX {
            // Reached the start cell.
            return None;
        }
        let p = Point::new(self.cur as i32 / self.rows, self.cur as i32 % self.rows);
        self.cur = parent;
        Some(p)
    }
}
