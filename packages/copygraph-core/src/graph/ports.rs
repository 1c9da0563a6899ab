//! Port trait between the cloner and a host data model
//!
//! The cloner never looks inside values itself. Everything it needs
//! (classification, identity, one-level duplication, child access) goes
//! through [`ObjectGraph`], so the same traversal drives both the
//! `Rc`-based [`Value`](crate::value::Value) model and the arena
//! [`Heap`](crate::heap::Heap).

use crate::errors::Result;

/// Identity key of a composite, valid for the duration of one run
pub type Identity = usize;

/// The two composite kinds that are traversed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompositeKind {
    Record,
    Sequence,
}

impl CompositeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Record => "record",
            Self::Sequence => "sequence",
        }
    }
}

impl std::fmt::Display for CompositeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Address of one child inside a composite
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Record field
    Key(String),
    /// Sequence position
    Index(usize),
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Key(key) => write!(f, ".{}", key),
            Slot::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// Result of classifying a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified<C> {
    /// Primitive or opaque value, passed through unchanged
    Leaf,
    /// Record or sequence, copied and traversed
    Composite { kind: CompositeKind, handle: C },
}

/// Host data model as seen by the cloner
pub trait ObjectGraph {
    /// Any value of the model (leaf or composite)
    type Value: Clone;

    /// Handle to one composite
    type Composite: Clone;

    /// Fail fast if identity tracking is impossible for this root.
    ///
    /// Called once before traversal starts.
    fn check_environment(&self, _root: &Self::Value) -> Result<()> {
        Ok(())
    }

    /// Split values into leaves and composites.
    ///
    /// Errors only when a reference cannot be tracked by identity.
    fn classify(&self, value: &Self::Value) -> Result<Classified<Self::Composite>>;

    /// Identity key of a composite. Distinct live composites never share a key.
    fn identity(&self, composite: &Self::Composite) -> Identity;

    /// One-level duplicate: same kind, same slots, children still pointing
    /// at the original sub-values.
    fn shallow_copy(&mut self, composite: &Self::Composite, kind: CompositeKind)
        -> Self::Composite;

    /// Slots in enumeration order (insertion order for records, `0..n` for sequences)
    fn slots(&self, composite: &Self::Composite) -> Vec<Slot>;

    /// Current child at `slot`
    fn child(&self, composite: &Self::Composite, slot: &Slot) -> Option<Self::Value>;

    /// Overwrite the child at `slot`
    fn replace_child(&mut self, composite: &Self::Composite, slot: &Slot, value: Self::Value);

    /// Wrap a composite handle back into a value
    fn to_value(&self, composite: &Self::Composite) -> Self::Value;

    /// Identity comparison for leaves
    fn same_leaf(&self, a: &Self::Value, b: &Self::Value) -> bool;
}
