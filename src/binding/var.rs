//! Destination cells for bindings

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A caller-owned destination that a [`Registry`](super::Registry) writes into
///
/// Cloning a `Var` shares the same storage, so the registry can hold on to a
/// handle while the caller keeps reading theirs. A fresh `Var` holds
/// `T::default()` and keeps it until a parse writes to it.
///
/// Reads hand out copies. The cell is never borrowed outside this type.
pub struct Var<T> {
    cell: Rc<RefCell<T>>,
}

impl<T: Default> Var<T> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Var<T> {
    /// Copy out the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.cell.borrow().clone()
    }

    pub(crate) fn set(&self, value: T) {
        *self.cell.borrow_mut() = value;
    }

    /// Whether two handles point at the same storage
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }
}

impl<T: Default> Default for Var<T> {
    fn default() -> Self {
        Self {
            cell: Rc::new(RefCell::new(T::default())),
        }
    }
}

impl<T> Clone for Var<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Var<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Var").field(&*self.cell.borrow()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Var<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.cell.borrow(), f)
    }
}
