//! Record: insertion-ordered string-keyed composite

use super::Value;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared, mutable record handle. Clones alias the same record.
#[derive(Clone, Default)]
pub struct RecordRef(Rc<RefCell<IndexMap<String, Value>>>);

impl RecordRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(key, value)` pairs; later duplicates overwrite in place
    pub fn from_fields<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let map = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<IndexMap<_, _>>();
        Self(Rc::new(RefCell::new(map)))
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.borrow().get(key).cloned()
    }

    /// Insert or overwrite; an existing key keeps its position
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.borrow_mut().insert(key.into(), value.into())
    }

    /// Remove a field, preserving the order of the rest
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.0.borrow_mut().shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.borrow().contains_key(key)
    }

    /// Keys in insertion order
    pub fn keys(&self) -> Vec<String> {
        self.0.borrow().keys().cloned().collect()
    }

    /// Shallow snapshot of the fields in insertion order
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.0
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
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

    /// New record with the same keys, in order, pointing at the same values
    pub(crate) fn shallow_copy(&self) -> Self {
        Self(Rc::new(RefCell::new(self.0.borrow().clone())))
    }

    /// Overwrite an existing field; absent keys are left absent
    pub(crate) fn replace_existing(&self, key: &str, value: Value) -> bool {
        match self.0.borrow_mut().get_mut(key) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Children of a record nobody else holds, for iterative teardown
    pub(super) fn take_children_if_unique(&mut self) -> Option<Vec<Value>> {
        Rc::get_mut(&mut self.0).map(|cell| cell.get_mut().drain(..).map(|(_, v)| v).collect())
    }
}

impl Drop for RecordRef {
    fn drop(&mut self) {
        if let Some(children) = self.take_children_if_unique() {
            super::teardown(children);
        }
    }
}

impl fmt::Debug for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record@{:#x} {{{} fields}}", self.address(), self.len())
    }
}
