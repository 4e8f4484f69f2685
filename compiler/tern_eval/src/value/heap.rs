//! Shared, mutable storage for reference-semantics values.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Reference-counted interior-mutable cell behind `List`, `Map` and
/// `Iterator` values.
///
/// Cloning a `Heap` aliases the same allocation, so mutation through one
/// alias is visible through all of them. The constructor is private to the
/// value module; everything else goes through the `Value` factories.
#[repr(transparent)]
pub struct Heap<T>(Rc<RefCell<T>>);

impl<T> Heap<T> {
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Identity comparison: do both handles point at the same allocation?
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(super) fn as_ptr(&self) -> *const () {
        Rc::as_ptr(&self.0).cast()
    }
}

impl<T> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(inner) => inner.fmt(f),
            Err(_) => f.write_str("<borrowed>"),
        }
    }
}
