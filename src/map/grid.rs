//! Dense hex-map storage: indexing, adjacency, epoch scratch, air routes.

use tracing::debug;

use crate::error::MapError;
use crate::map::cache::TravelCache;
use crate::map::heap::MinHeap;
use crate::map::types::{Hexagon, INF, MAX_AIR_ROUTES, offsets_for_row};

// ─── HexMap ──────────────────────────────────────────────────────────────────

/// A `cols x rows` map of hex cells plus the reusable search machinery:
/// the frontier heap, the scratch epoch, and the travel-cost cache.
///
/// Cells are indexed row-major, `idx = y * cols + x`.
pub struct HexMap {
    cols: i32,
    rows: i32,
    cells: Vec<Hexagon>,
    /// Current scratch epoch; a cell's `dist` is defined iff its stamp
    /// matches.
    epoch: u64,
    pub(crate) heap: MinHeap,
    pub(crate) cache: TravelCache,
}

/// Outcome of a successful `toggle_air_route`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteToggle {
    Added,
    Removed,
}

impl HexMap {
    /// Create a fresh map with every exit cost at 1 and no air routes.
    pub fn new(cols: i32, rows: i32) -> Result<Self, MapError> {
        if cols <= 0 || rows <= 0 {
            return Err(MapError::BadDimensions { cols, rows });
        }
        let n = (cols as usize)
            .checked_mul(rows as usize)
            .ok_or(MapError::Allocation { cols, rows })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(n)
            .map_err(|_| MapError::Allocation { cols, rows })?;
        cells.resize_with(n, Hexagon::new);

        debug!(cols, rows, "created map");
        Ok(Self {
            cols,
            rows,
            cells,
            epoch: 1,
            heap: MinHeap::with_capacity(n),
            cache: TravelCache::new(),
        })
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    // ─── Indexing ────────────────────────────────────────────────────────────

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.cols && y >= 0 && y < self.rows
    }

    /// Row-major index of an in-bounds coordinate.
    pub(crate) fn index_of(&self, x: i32, y: i32) -> usize {
        (y * self.cols + x) as usize
    }

    /// Index of `(x, y)`, or `OutOfBounds`.
    pub(crate) fn checked_index(&self, x: i32, y: i32) -> Result<usize, MapError> {
        if self.contains(x, y) {
            Ok(self.index_of(x, y))
        } else {
            Err(MapError::OutOfBounds { x, y })
        }
    }

    pub(crate) fn coords_of(&self, idx: usize) -> (i32, i32) {
        let idx = idx as i32;
        (idx % self.cols, idx / self.cols)
    }

    pub(crate) fn cell(&self, idx: usize) -> &Hexagon {
        &self.cells[idx]
    }

    pub(crate) fn cell_mut(&mut self, idx: usize) -> &mut Hexagon {
        &mut self.cells[idx]
    }

    /// Exit cost at `(x, y)`.
    pub fn exit_cost(&self, x: i32, y: i32) -> Result<i32, MapError> {
        Ok(self.cells[self.checked_index(x, y)?].exit_cost)
    }

    /// Outgoing air-route destinations of `(x, y)`, in list order.
    pub fn air_routes(&self, x: i32, y: i32) -> Result<&[usize], MapError> {
        Ok(&self.cells[self.checked_index(x, y)?].air_routes)
    }

    // ─── Adjacency ───────────────────────────────────────────────────────────

    /// Indices of the in-bounds neighbors of `(x, y)`, in the fixed
    /// enumeration order for the row's parity. The order is observable
    /// through search tie-breaking.
    pub(crate) fn neighbors(&self, x: i32, y: i32) -> Vec<usize> {
        let mut out = Vec::with_capacity(6);
        for &(dx, dy) in offsets_for_row(y) {
            let (nx, ny) = (x + dx, y + dy);
            if self.contains(nx, ny) {
                out.push(self.index_of(nx, ny));
            }
        }
        out
    }

    // ─── Epoch scratch ───────────────────────────────────────────────────────

    /// Start a new scratch epoch; every cell's distance becomes undefined.
    pub(crate) fn next_epoch(&mut self) {
        self.epoch += 1;
    }

    /// Tentative distance of `idx` in the current epoch, `INF` when unset.
    pub(crate) fn dist(&self, idx: usize) -> i32 {
        let cell = &self.cells[idx];
        if cell.stamp == self.epoch { cell.dist } else { INF }
    }

    pub(crate) fn set_dist(&mut self, idx: usize, dist: i32) {
        let epoch = self.epoch;
        let cell = &mut self.cells[idx];
        cell.stamp = epoch;
        cell.dist = dist;
    }

    /// Stamp `idx` as visited in the current epoch without touching its
    /// distance. Used by traversals that carry depth in their own queue.
    pub(crate) fn mark_visited(&mut self, idx: usize) {
        let epoch = self.epoch;
        self.cells[idx].stamp = epoch;
    }

    pub(crate) fn is_visited(&self, idx: usize) -> bool {
        self.cells[idx].stamp == self.epoch
    }

    // ─── Air routes ──────────────────────────────────────────────────────────

    /// Toggle the directed air route `from -> to`.
    ///
    /// Removes the route when present (the remaining list order is not
    /// preserved), appends it when absent and the list has room, and fails
    /// with `RoutesFull` otherwise. Self-loops are allowed. Any successful
    /// toggle invalidates the travel-cost cache.
    pub fn toggle_air_route(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
    ) -> Result<RouteToggle, MapError> {
        let src = self.checked_index(from.0, from.1)?;
        let dest = self.checked_index(to.0, to.1)?;

        let routes = &mut self.cells[src].air_routes;
        if let Some(pos) = routes.iter().position(|&d| d == dest) {
            routes.swap_remove(pos);
            self.cache.invalidate();
            return Ok(RouteToggle::Removed);
        }
        if routes.len() >= MAX_AIR_ROUTES {
            return Err(MapError::RoutesFull {
                x: from.0,
                y: from.1,
            });
        }
        routes.push(dest);
        self.cache.invalidate();
        Ok(RouteToggle::Added)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
