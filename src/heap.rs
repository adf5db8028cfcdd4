use tracing::{debug, trace, warn};

use crate::entry::{HeapEntry, Priority};
use crate::error::HeapError;
use crate::handle::Handle;
use crate::sift::{sift_down, sift_up, Slots};
use crate::{GROWTH_FACTOR, INITIAL_CAPACITY};

/// A minimum priority queue backed by a binary heap.
///
/// Each entry pairs an opaque payload handle with a [`Priority`]. The heap
/// stores and returns handles but never dereferences or releases what they
/// point to.
///
/// Storage grows by doubling when full and is never shrunk, so `capacity`
/// only ever increases over the life of the heap.
///
/// Finding an entry for [`bump_priority`](Heap::bump_priority) is a linear
/// scan. Tracking every entry's position would make all other operations
/// pay for bookkeeping; [`IndexedHeap`](crate::IndexedHeap) makes the
/// opposite trade for dense integer ids.
#[derive(Debug)]
pub struct Heap<P> {
    entries: Vec<HeapEntry<P>>,
    capacity: usize,
}

impl<P> Slots for [HeapEntry<P>] {
    fn len(&self) -> usize {
        <[HeapEntry<P>]>::len(self)
    }

    fn priority(&self, i: usize) -> Priority {
        self[i].priority
    }

    fn swap(&mut self, a: usize, b: usize) {
        <[HeapEntry<P>]>::swap(self, a, b);
    }
}

impl<P> Heap<P> {
    /// Create an empty heap with a single reserved slot.
    pub fn new() -> Result<Self, HeapError> {
        let mut entries = Vec::new();
        entries
            .try_reserve_exact(INITIAL_CAPACITY)
            .map_err(|_| HeapError::AllocationFailure {
                requested: INITIAL_CAPACITY,
            })?;
        trace!(capacity = INITIAL_CAPACITY, "heap.new");
        Ok(Heap {
            entries,
            capacity: INITIAL_CAPACITY,
        })
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of slots reserved so far. Always a power of two.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The payload and priority at the root, without removing it.
    pub fn peek_min(&self) -> Option<(&P, Priority)> {
        self.entries.first().map(|e| (&e.payload, e.priority))
    }

    /// Add a payload with the given priority.
    ///
    /// Fails only if the heap is full and more storage cannot be reserved,
    /// in which case the heap is left exactly as it was.
    pub fn insert(&mut self, payload: P, priority: Priority) -> Result<(), HeapError> {
        if self.entries.len() == self.capacity {
            self.grow()?;
        }

        let idx = self.entries.len();
        self.entries.push(HeapEntry::new(payload, priority));
        sift_up(self.entries.as_mut_slice(), idx);
        Ok(())
    }

    /// Remove and return the payload with the lowest priority.
    ///
    /// Among equal priorities no particular order is promised.
    pub fn pop_min(&mut self) -> Option<P> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let root = self.entries.pop()?;
        sift_down(self.entries.as_mut_slice(), 0);

        Some(root.payload)
    }

    /// Release the backing storage. Payload referents are not touched.
    pub fn destroy(self) {
        trace!(size = self.len(), capacity = self.capacity, "heap.destroy");
    }

    /// Double the reserved slots. On failure nothing is changed.
    fn grow(&mut self) -> Result<(), HeapError> {
        let old_capacity = self.capacity;
        let new_capacity = old_capacity
            .checked_mul(GROWTH_FACTOR)
            .ok_or(HeapError::AllocationFailure {
                requested: usize::MAX,
            })?;

        let additional = new_capacity - self.entries.len();
        if let Err(err) = self.entries.try_reserve_exact(additional) {
            warn!(old_capacity, new_capacity, %err, "heap.grow failed");
            return Err(HeapError::AllocationFailure {
                requested: new_capacity,
            });
        }

        debug!(old_capacity, new_capacity, "heap.grow");
        self.capacity = new_capacity;
        Ok(())
    }
}

impl<P: Handle> Heap<P> {
    /// Lower the priority of the entry holding `payload`.
    ///
    /// `payload` is matched by identity, not by value, with an O(n) scan over
    /// the live entries. The new priority must not exceed the current one:
    /// this is a decrease-key, and a request to raise the priority is
    /// rejected with [`HeapError::PriorityIncrease`] without touching the
    /// heap. Re-bumping to the same priority is accepted and moves nothing.
    pub fn bump_priority(&mut self, payload: &P, new_priority: Priority) -> Result<(), HeapError> {
        let Some(idx) = self.entries.iter().position(|e| e.payload.same(payload)) else {
            debug!(size = self.len(), "heap.bump: payload not found");
            return Err(HeapError::PayloadNotFound);
        };

        let current = self.entries[idx].priority;
        if new_priority > current {
            debug!(current, requested = new_priority, "heap.bump: priority increase rejected");
            return Err(HeapError::PriorityIncrease {
                current,
                requested: new_priority,
            });
        }

        self.entries[idx].priority = new_priority;
        sift_up(self.entries.as_mut_slice(), idx);
        Ok(())
    }
}
