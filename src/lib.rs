//! Binary min-heap priority queue.
//!
//! [`Heap`] pairs opaque payload handles with integer priorities and pops
//! the lowest priority first. An entry's priority can be lowered later with
//! [`Heap::bump_priority`], which finds the entry by handle identity.
//!
//! ```
//! use priority_heap::Heap;
//!
//! let (build, test, deploy) = ("build", "test", "deploy");
//! let mut heap = Heap::new()?;
//! heap.insert(&build, 10)?;
//! heap.insert(&test, 20)?;
//! heap.insert(&deploy, 30)?;
//!
//! heap.bump_priority(&&deploy, 5)?;
//! assert_eq!(heap.pop_min(), Some(&deploy));
//! assert_eq!(heap.pop_min(), Some(&build));
//! # Ok::<(), priority_heap::HeapError>(())
//! ```
//!
//! The heap is a single-owner structure with no internal locking.

mod entry;
mod error;
mod handle;
mod heap;
mod index;
mod indexed;
mod sift;

pub use entry::{HeapEntry, Priority};
pub use error::HeapError;
pub use handle::Handle;
pub use heap::Heap;
pub use indexed::IndexedHeap;

/// Slots reserved by a freshly constructed [`Heap`].
pub const INITIAL_CAPACITY: usize = 1;

/// Factor by which a full [`Heap`] grows its storage.
pub const GROWTH_FACTOR: usize = 2;
