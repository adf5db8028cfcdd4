use crate::entry::Priority;

/// Errors returned by heap operations.
///
/// Popping an empty heap is not an error; it yields `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeapError {
    /// Backing storage for `requested` slots could not be reserved. The heap,
    /// if it already existed, is unchanged.
    #[error("failed to reserve storage for {requested} heap slots")]
    AllocationFailure { requested: usize },
    /// No live entry carries the given payload handle.
    #[error("payload not found in heap")]
    PayloadNotFound,
    /// A bump asked for a larger priority than the entry already has.
    /// Bumping only ever lowers a priority.
    #[error("cannot raise priority from {current} to {requested}")]
    PriorityIncrease {
        current: Priority,
        requested: Priority,
    },
    /// An indexed item id lies outside the heap's universe.
    #[error("item {item} outside universe of {universe} items")]
    ItemOutOfRange { item: usize, universe: usize },
    /// An indexed item id is already queued.
    #[error("item {0} is already in the heap")]
    DuplicateItem(usize),
}
