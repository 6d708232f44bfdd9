//! Travel-cost queries: cached best-first search over the composite graph.

use std::mem;

use tracing::debug;

use crate::error::MapError;
use crate::map::cache::UNREACHABLE;
use crate::map::grid::HexMap;

impl HexMap {
    /// Least total cost to travel from `from` to `to`, or `None` when the
    /// destination cannot be reached.
    ///
    /// Leaving a cell costs that cell's exit cost, whether the edge is
    /// geometric or an air route; a cell with exit cost 0 has no outgoing
    /// edges at all and can only terminate a path. Querying a cell against
    /// itself is 0 and bypasses the cache. Results, including unreachable
    /// ones, are cached until the next mutation.
    pub fn travel_cost(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
    ) -> Result<Option<i32>, MapError> {
        let source = self.checked_index(from.0, from.1)?;
        let dest = self.checked_index(to.0, to.1)?;
        if source == dest {
            return Ok(Some(0));
        }

        if let Some(cost) = self.cache.get(source, dest) {
            debug!(?from, ?to, cost, "cache hit");
            return Ok((cost != UNREACHABLE).then_some(cost));
        }

        self.next_epoch();
        let mut heap = mem::take(&mut self.heap);
        heap.clear();
        self.set_dist(source, 0);
        heap.push(source, 0);

        let mut found = None;
        while let Some(entry) = heap.pop() {
            // A record whose distance no longer matches the scratch is stale.
            if entry.dist != self.dist(entry.node) {
                continue;
            }
            if entry.node == dest {
                found = Some(entry.dist);
                break;
            }

            let exit = self.cell(entry.node).exit_cost;
            if exit <= 0 {
                continue;
            }
            let next = entry.dist + exit;

            let (x, y) = self.coords_of(entry.node);
            for n in self.neighbors(x, y) {
                if next < self.dist(n) {
                    self.set_dist(n, next);
                    heap.push(n, next);
                }
            }
            for i in 0..self.cell(entry.node).air_routes.len() {
                let n = self.cell(entry.node).air_routes[i];
                if next < self.dist(n) {
                    self.set_dist(n, next);
                    heap.push(n, next);
                }
            }
        }
        self.heap = heap;

        self.cache.put(source, dest, found.unwrap_or(UNREACHABLE));
        Ok(found)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
