//! Unweighted BFS distance maps, the ground-truth companion to A*.

use gridstar_core::{Grid, Point};

use crate::UNREACHABLE;
use crate::astar::{Pathfinder, SearchError};

impl Pathfinder {
    /// Fill the BFS distance map from `source` over the grid's cached
    /// neighbour lists. Each step costs 1. Obstacles and disconnected
    /// cells read back as [`UNREACHABLE`] through
    /// [`bfs_at`](Self::bfs_at).
    pub fn bfs_map(&mut self, grid: &Grid, source: Point) -> Result<(), SearchError> {
        self.check_size(grid)?;

        for v in self.bfs_map.iter_mut() {
            *v = UNREACHABLE;
        }

        let mut queue = std::mem::take(&mut self.bfs_queue);
        let mut nbuf = std::mem::take(&mut self.nbuf);
        queue.clear();

        if grid.contains(source) {
            let si = self.idx(source);
            self.bfs_map[si] = 0;
            queue.push_back(si);
        }

        while let Some(ci) = queue.pop_front() {
            let current_dist = self.bfs_map[ci];
            let cp = self.point(ci);

            nbuf.clear();
            nbuf.extend_from_slice(grid.neighbors(cp));

            for &np in nbuf.iter() {
                let ni = self.idx(np);
                if self.bfs_map[ni] != UNREACHABLE {
                    continue;
                }
                self.bfs_map[ni] = current_dist + 1;
                queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;
        self.bfs_queue = queue;
        Ok(())
    }

    /// BFS distance at `p` from the last [`bfs_map`](Self::bfs_map)
    /// fill. [`UNREACHABLE`] for unreached or out-of-range cells.
    pub fn bfs_at(&self, p: Point) -> i32 {
        if p.row < 0 || p.row >= self.rows || p.col < 0 || p.col >= self.rows {
            return UNREACHABLE;
        }
        self.bfs_map[self.idx(p)]
    }
}
