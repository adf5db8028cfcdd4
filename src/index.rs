//! Array layout of a complete binary tree.
//!
//! The root lives at index 0; the children of `i` live at `2i + 1` and
//! `2i + 2`.

/// Index of the parent of `i`. Only meaningful for `i > 0`.
#[inline]
pub(crate) fn parent(i: usize) -> usize {
    debug_assert!(i > 0, "the root has no parent");
    (i - 1) / 2
}

#[inline]
pub(crate) fn left_child(i: usize) -> usize {
    2 * i + 1
}

#[inline]
pub(crate) fn right_child(i: usize) -> usize {
    2 * i + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_point_back_to_parent() {
        for i in 0..64 {
            assert_eq!(parent(left_child(i)), i);
            assert_eq!(parent(right_child(i)), i);
        }
    }

    #[test]
    fn first_levels() {
        assert_eq!((left_child(0), right_child(0)), (1, 2));
        assert_eq!((left_child(1), right_child(1)), (3, 4));
        assert_eq!((left_child(2), right_child(2)), (5, 6));
        assert_eq!(parent(1), 0);
        assert_eq!(parent(2), 0);
        assert_eq!(parent(6), 2);
    }
}
