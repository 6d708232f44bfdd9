//! Versioned travel-cost cache.
//!
//! Open-addressed table with linear probing. Every slot carries the version
//! it was written under; bumping the table version makes all slots logically
//! empty at once, so mutations invalidate in O(1). Unreachable results are
//! stored like any other cost, which keeps repeated queries on a
//! disconnected pair from re-running the full search.

/// Number of slots. Fixed at creation; saturation falls back to overwriting
/// the home slot.
pub(crate) const CACHE_SLOTS: usize = 32 * 1024;

/// Cost recorded for an unreachable pair.
pub(crate) const UNREACHABLE: i32 = -1;

#[derive(Debug, Clone, Copy)]
struct Slot {
    source: usize,
    dest: usize,
    cost: i32,
    version: u64,
}

const EMPTY_SLOT: Slot = Slot {
    source: 0,
    dest: 0,
    cost: 0,
    version: 0,
};

/// Result cache keyed on `(source_idx, dest_idx)`.
#[derive(Debug)]
pub struct TravelCache {
    slots: Box<[Slot]>,
    version: u64,
}

impl TravelCache {
    pub fn new() -> Self {
        Self {
            slots: vec![EMPTY_SLOT; CACHE_SLOTS].into_boxed_slice(),
            version: 1,
        }
    }

    fn home(source: usize, dest: usize) -> usize {
        source.wrapping_mul(31).wrapping_add(dest) % CACHE_SLOTS
    }

    /// Cached cost for `(source, dest)`, if present under the current
    /// version. Probing stops at the first slot from an older version.
    pub fn get(&self, source: usize, dest: usize) -> Option<i32> {
        let mut idx = Self::home(source, dest);
        for _ in 0..CACHE_SLOTS {
            let slot = &self.slots[idx];
            if slot.version != self.version {
                return None;
            }
            if slot.source == source && slot.dest == dest {
                return Some(slot.cost);
            }
            idx = (idx + 1) % CACHE_SLOTS;
        }
        None
    }

    /// Record a cost. Claims the first stale slot, updates in place on a key
    /// match, and overwrites the home slot when the whole table is live.
    pub fn put(&mut self, source: usize, dest: usize, cost: i32) {
        let home = Self::home(source, dest);
        let mut idx = home;
        for _ in 0..CACHE_SLOTS {
            let slot = &mut self.slots[idx];
            if slot.version != self.version || (slot.source == source && slot.dest == dest) {
                *slot = Slot {
                    source,
                    dest,
                    cost,
                    version: self.version,
                };
                return;
            }
            idx = (idx + 1) % CACHE_SLOTS;
        }
        self.slots[home] = Slot {
            source,
            dest,
            cost,
            version: self.version,
        };
    }

    /// Invalidate every entry at once.
    pub fn invalidate(&mut self) {
        self.version += 1;
    }
}

impl Default for TravelCache {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
