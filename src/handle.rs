//! Identity comparison for payload handles.
//!
//! The heap never looks inside a payload. The only question it ever asks is
//! "is this the same handle I was given earlier?", which is what
//! [`Handle::same`] answers. Two distinct allocations holding equal values
//! are *not* the same handle.

use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::Arc;

/// A payload reference compared by identity rather than by value.
pub trait Handle {
    /// Returns `true` when `self` and `other` refer to the same referent.
    fn same(&self, other: &Self) -> bool;
}

impl<T: ?Sized> Handle for &T {
    fn same(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
}

impl<T: ?Sized> Handle for Rc<T> {
    fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Handle for Arc<T> {
    fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> Handle for NonNull<T> {
    fn same(&self, other: &Self) -> bool {
        std::ptr::addr_eq(self.as_ptr(), other.as_ptr())
    }
}

impl<T: ?Sized> Handle for *const T {
    fn same(&self, other: &Self) -> bool {
        std::ptr::addr_eq(*self, *other)
    }
}

impl<T: ?Sized> Handle for *mut T {
    fn same(&self, other: &Self) -> bool {
        std::ptr::addr_eq(*self, *other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn references_compare_by_address() {
        let a = String::from("job");
        let b = String::from("job");
        assert!((&a).same(&&a));
        assert!(!(&a).same(&&b));
    }

    #[test]
    fn rc_clones_are_the_same_handle() {
        let a = Rc::new(7u32);
        let b = Rc::new(7u32);
        assert!(a.same(&Rc::clone(&a)));
        assert!(!a.same(&b));
    }

    #[test]
    fn arc_clones_are_the_same_handle() {
        let a = Arc::new("x");
        assert!(a.same(&Arc::clone(&a)));
        assert!(!a.same(&Arc::new("x")));
    }

    #[test]
    fn raw_pointers_compare_by_address() {
        let values = [1u8, 1u8];
        let p0: *const u8 = &values[0];
        let p1: *const u8 = &values[1];
        assert!(p0.same(&p0));
        assert!(!p0.same(&p1));

        let nn = NonNull::from(&values[0]);
        assert!(nn.same(&NonNull::from(&values[0])));
    }
}
