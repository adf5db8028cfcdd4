/// Priority of a heap entry. Smaller values are popped first.
pub type Priority = i32;

/// A binary heap entry storing a payload handle with an associated priority.
#[derive(Debug, Clone)]
pub struct HeapEntry<P> {
    pub payload: P,
    pub priority: Priority,
}

impl<P> HeapEntry<P> {
    pub fn new(payload: P, priority: Priority) -> Self {
        HeapEntry { payload, priority }
    }
}
