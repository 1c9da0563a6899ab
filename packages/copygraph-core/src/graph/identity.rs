//! Per-run identity table
//!
//! Maps an original composite's identity to the handle of its copy.
//! A table lives exactly as long as one cloner run; keys are plain
//! integers, so it never keeps the originals alive.

use super::ports::Identity;
use rustc_hash::FxHashMap;

/// Original identity → copy handle
#[derive(Debug)]
pub struct IdentityTable<C> {
    entries: FxHashMap<Identity, C>,
}

impl<C> IdentityTable<C> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a table with a pre-allocation hint
    pub fn with_capacity(capacity: usize) -> Self {
        let mut entries = FxHashMap::default();
        entries.reserve(capacity);
        Self { entries }
    }

    /// Copy previously registered for `identity`
    pub fn get(&self, identity: Identity) -> Option<&C> {
        self.entries.get(&identity)
    }

    pub fn contains(&self, identity: Identity) -> bool {
        self.entries.contains_key(&identity)
    }

    /// Register the copy of `identity`.
    ///
    /// Each original is registered at most once per run.
    pub fn register(&mut self, identity: Identity, copy: C) {
        let previous = self.entries.insert(identity, copy);
        debug_assert!(previous.is_none(), "identity {identity} registered twice");
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C> Default for IdentityTable<C> {
    fn default() -> Self {
        Self::new()
    }
}
