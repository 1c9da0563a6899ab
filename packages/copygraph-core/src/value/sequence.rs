//! Sequence: dense, index-addressed composite

use super::Value;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared, mutable sequence handle. Clones alias the same sequence.
#[derive(Clone, Default)]
pub struct SequenceRef(Rc<RefCell<Vec<Value>>>);

impl SequenceRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        let items = values.into_iter().map(Into::into).collect::<Vec<_>>();
        Self(Rc::new(RefCell::new(items)))
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Write at `index`.
    ///
    /// Writing past the end pads the gap with `Value::Undefined`, so the
    /// sequence stays dense.
    pub fn set(&self, index: usize, value: impl Into<Value>) -> Option<Value> {
        let mut items = self.0.borrow_mut();
        if index >= items.len() {
            items.resize(index, Value::Undefined);
            items.push(value.into());
            return None;
        }
        Some(std::mem::replace(&mut items[index], value.into()))
    }

    pub fn push(&self, value: impl Into<Value>) {
        self.0.borrow_mut().push(value.into());
    }

    pub fn pop(&self) -> Option<Value> {
        self.0.borrow_mut().pop()
    }

    /// Shallow snapshot of the elements
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Address of the shared allocation
    pub fn address(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }

    /// New sequence with the same elements in the same order
    pub(crate) fn shallow_copy(&self) -> Self {
        Self(Rc::new(RefCell::new(self.0.borrow().clone())))
    }

    /// Overwrite an in-bounds element; out-of-bounds writes are ignored
    pub(crate) fn replace_existing(&self, index: usize, value: Value) -> bool {
        match self.0.borrow_mut().get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub(super) fn take_children_if_unique(&mut self) -> Option<Vec<Value>> {
        Rc::get_mut(&mut self.0).map(|cell| std::mem::take(cell.get_mut()))
    }
}

impl Drop for SequenceRef {
    fn drop(&mut self) {
        if let Some(children) = self.take_children_if_unique() {
            super::teardown(children);
        }
    }
}

impl fmt::Debug for SequenceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sequence@{:#x} [{} items]", self.address(), self.len())
    }
}
