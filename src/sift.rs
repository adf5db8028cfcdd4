//! Heap-order restoration.
//!
//! `sift_up` and `sift_down` are the only routines that reorder entries.
//! They work over any [`Slots`] store so that heaps which track extra
//! per-slot state (positions, for instance) observe every swap.

use crate::entry::Priority;
use crate::index::{left_child, parent, right_child};

/// Array of prioritised slots that the sift routines operate on.
pub(crate) trait Slots {
    fn len(&self) -> usize;

    fn priority(&self, i: usize) -> Priority;

    fn swap(&mut self, a: usize, b: usize);
}

/// Child of `i` with the smaller priority. Ties go to the left child.
///
/// Caller guarantees that `i` has a left child.
pub(crate) fn smallest_child<S: Slots + ?Sized>(slots: &S, i: usize) -> usize {
    let left = left_child(i);
    let right = right_child(i);
    if right >= slots.len() || slots.priority(left) <= slots.priority(right) {
        left
    } else {
        right
    }
}

/// Move the entry at `i` toward the root while its parent has a strictly
/// larger priority. Returns the final index of the entry.
pub(crate) fn sift_up<S: Slots + ?Sized>(slots: &mut S, mut i: usize) -> usize {
    while i > 0 {
        let p = parent(i);
        if slots.priority(p) <= slots.priority(i) {
            break;
        }
        slots.swap(i, p);
        i = p;
    }
    i
}

/// Move the entry at `i` toward the leaves while its smallest child has a
/// strictly smaller priority. Returns the final index of the entry.
pub(crate) fn sift_down<S: Slots + ?Sized>(slots: &mut S, mut i: usize) -> usize {
    while left_child(i) < slots.len() {
        let child = smallest_child(slots, i);
        if slots.priority(child) >= slots.priority(i) {
            break;
        }
        slots.swap(i, child);
        i = child;
    }
    i
}

/// Whether every live entry is no smaller than its parent.
#[cfg(test)]
pub(crate) fn is_heap<S: Slots + ?Sized>(slots: &S) -> bool {
    (1..slots.len()).all(|i| slots.priority(i) >= slots.priority(parent(i)))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bare priorities with a log of performed swaps.
    struct Plain {
        prios: Vec<Priority>,
        swaps: Vec<(usize, usize)>,
    }

    impl Plain {
        fn new(prios: &[Priority]) -> Self {
            Plain {
                prios: prios.to_vec(),
                swaps: Vec::new(),
            }
        }
    }

    impl Slots for Plain {
        fn len(&self) -> usize {
            self.prios.len()
        }

        fn priority(&self, i: usize) -> Priority {
            self.prios[i]
        }

        fn swap(&mut self, a: usize, b: usize) {
            self.prios.swap(a, b);
            self.swaps.push((a, b));
        }
    }

    #[test]
    fn smallest_child_prefers_left_on_tie() {
        let s = Plain::new(&[0, 4, 4]);
        assert_eq!(smallest_child(&s, 0), 1);
    }

    #[test]
    fn smallest_child_without_right_sibling() {
        let s = Plain::new(&[0, 1, 2, 9]);
        assert_eq!(smallest_child(&s, 1), 3);
    }

    #[test]
    fn smallest_child_picks_right_when_smaller() {
        let s = Plain::new(&[0, 5, 3]);
        assert_eq!(smallest_child(&s, 0), 2);
    }

    #[test]
    fn sift_up_moves_to_root() {
        let mut s = Plain::new(&[1, 2, 3, 4, 0]);
        assert_eq!(sift_up(&mut s, 4), 0);
        assert_eq!(s.prios, vec![0, 1, 3, 4, 2]);
        assert!(is_heap(&s));
    }

    #[test]
    fn sift_up_does_not_swap_equal_priorities() {
        let mut s = Plain::new(&[3, 3]);
        assert_eq!(sift_up(&mut s, 1), 1);
        assert!(s.swaps.is_empty());
    }

    #[test]
    fn sift_down_moves_to_leaf() {
        let mut s = Plain::new(&[9, 1, 2, 3, 4]);
        assert_eq!(sift_down(&mut s, 0), 3);
        assert_eq!(s.prios, vec![1, 3, 2, 9, 4]);
        assert!(is_heap(&s));
    }

    #[test]
    fn sift_down_does_not_swap_equal_priorities() {
        let mut s = Plain::new(&[2, 2, 2]);
        assert_eq!(sift_down(&mut s, 0), 0);
        assert!(s.swaps.is_empty());
    }

    #[test]
    fn sift_on_single_slot_is_noop() {
        let mut s = Plain::new(&[5]);
        assert_eq!(sift_up(&mut s, 0), 0);
        assert_eq!(sift_down(&mut s, 0), 0);
        assert!(s.swaps.is_empty());
    }
}
