//! Min-heap over dense integer ids with O(log n) decrease-key.
//!
//! Unlike [`Heap`](crate::Heap), which finds entries with a linear scan,
//! this variant keeps a position map from item id to heap slot. Every swap
//! the sift routines perform updates the map, so lookups are O(1).

use tracing::{debug, trace};

use crate::entry::{HeapEntry, Priority};
use crate::error::HeapError;
use crate::sift::{sift_down, sift_up, Slots};

/// Positional map: tracks where each item lives in the heap.
#[derive(Debug)]
struct PositionMap {
    positions: Vec<Option<usize>>,
}

impl PositionMap {
    fn new(universe: usize) -> Result<Self, HeapError> {
        let mut positions = Vec::new();
        positions
            .try_reserve_exact(universe)
            .map_err(|_| HeapError::AllocationFailure { requested: universe })?;
        positions.resize(universe, None);
        Ok(PositionMap { positions })
    }

    fn get(&self, item: usize) -> Option<usize> {
        self.positions.get(item).copied().flatten()
    }

    fn set(&mut self, item: usize, pos: usize) {
        if let Some(slot) = self.positions.get_mut(item) {
            *slot = Some(pos);
        }
    }

    fn remove(&mut self, item: usize) {
        if let Some(slot) = self.positions.get_mut(item) {
            *slot = None;
        }
    }

    fn universe(&self) -> usize {
        self.positions.len()
    }
}

/// A minimum priority queue over item ids `0..universe`.
///
/// Each id may be queued at most once at a time. Intended for graph
/// searches where nodes are already numbered densely.
#[derive(Debug)]
pub struct IndexedHeap {
    data: Vec<HeapEntry<usize>>,
    pos: PositionMap,
}

impl Slots for IndexedHeap {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn priority(&self, i: usize) -> Priority {
        self.data[i].priority
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        let item_a = self.data[a].payload;
        let item_b = self.data[b].payload;
        self.pos.set(item_a, a);
        self.pos.set(item_b, b);
    }
}

impl IndexedHeap {
    /// Create an empty heap accepting ids below `universe`.
    pub fn new(universe: usize) -> Result<Self, HeapError> {
        let pos = PositionMap::new(universe)?;
        let mut data = Vec::new();
        data.try_reserve_exact(universe)
            .map_err(|_| HeapError::AllocationFailure { requested: universe })?;
        trace!(universe, "indexed_heap.new");
        Ok(IndexedHeap { data, pos })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn universe(&self) -> usize {
        self.pos.universe()
    }

    pub fn contains(&self, item: usize) -> bool {
        self.pos.get(item).is_some()
    }

    /// Current priority of a queued item.
    pub fn priority_of(&self, item: usize) -> Option<Priority> {
        self.pos.get(item).map(|idx| self.data[idx].priority)
    }

    /// Insert a new item with the given priority.
    pub fn insert(&mut self, item: usize, priority: Priority) -> Result<(), HeapError> {
        self.check_range(item)?;
        if self.contains(item) {
            return Err(HeapError::DuplicateItem(item));
        }

        let idx = self.data.len();
        self.data.push(HeapEntry::new(item, priority));
        self.pos.set(item, idx);
        sift_up(self, idx);
        Ok(())
    }

    /// Remove and return the entry with the lowest priority.
    pub fn pop_min(&mut self) -> Option<HeapEntry<usize>> {
        if self.data.is_empty() {
            return None;
        }

        let last = self.data.len() - 1;
        Slots::swap(self, 0, last);

        let entry = self.data.pop()?;
        self.pos.remove(entry.payload);
        sift_down(self, 0);

        Some(entry)
    }

    /// Lower the priority of a queued item.
    pub fn decrease_key(&mut self, item: usize, new_priority: Priority) -> Result<(), HeapError> {
        self.check_range(item)?;
        let Some(idx) = self.pos.get(item) else {
            debug!(item, "indexed_heap.decrease_key: item not queued");
            return Err(HeapError::PayloadNotFound);
        };

        let current = self.data[idx].priority;
        if new_priority > current {
            debug!(item, current, requested = new_priority, "indexed_heap.decrease_key: priority increase rejected");
            return Err(HeapError::PriorityIncrease {
                current,
                requested: new_priority,
            });
        }

        self.data[idx].priority = new_priority;
        sift_up(self, idx);
        Ok(())
    }

    fn check_range(&self, item: usize) -> Result<(), HeapError> {
        let universe = self.pos.universe();
        if item < universe {
            Ok(())
        } else {
            Err(HeapError::ItemOutOfRange { item, universe })
        }
    }
}
