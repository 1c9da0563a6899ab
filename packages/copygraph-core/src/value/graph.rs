//! [`ObjectGraph`] adapter for [`Value`]
//!
//! Identity is the address of a composite's `Rc` allocation. The caller's
//! borrow of the root keeps every original alive for the whole run, so an
//! address cannot be reused by another composite while the table exists.

use super::{RecordRef, SequenceRef, Value};
use crate::config::CloneConfig;
use crate::errors::Result;
use crate::graph::{Classified, CompositeKind, GraphCloner, Identity, ObjectGraph, Slot};

/// Stateless adapter over `Rc`-based values
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueGraph;

/// Handle to a record or sequence
#[derive(Debug, Clone)]
pub enum CompositeRef {
    Record(RecordRef),
    Sequence(SequenceRef),
}

impl CompositeRef {
    pub fn kind(&self) -> CompositeKind {
        match self {
            CompositeRef::Record(_) => CompositeKind::Record,
            CompositeRef::Sequence(_) => CompositeKind::Sequence,
        }
    }
}

impl ObjectGraph for ValueGraph {
    type Value = Value;
    type Composite = CompositeRef;

    fn classify(&self, value: &Value) -> Result<Classified<CompositeRef>> {
        let classified = match value {
            Value::Record(record) => Classified::Composite {
                kind: CompositeKind::Record,
                handle: CompositeRef::Record(record.clone()),
            },
            Value::Sequence(sequence) => Classified::Composite {
                kind: CompositeKind::Sequence,
                handle: CompositeRef::Sequence(sequence.clone()),
            },
            _ => Classified::Leaf,
        };
        Ok(classified)
    }

    fn identity(&self, composite: &CompositeRef) -> Identity {
        match composite {
            CompositeRef::Record(record) => record.address(),
            CompositeRef::Sequence(sequence) => sequence.address(),
        }
    }

    fn shallow_copy(&mut self, composite: &CompositeRef, _kind: CompositeKind) -> CompositeRef {
        match composite {
            CompositeRef::Record(record) => CompositeRef::Record(record.shallow_copy()),
            CompositeRef::Sequence(sequence) => CompositeRef::Sequence(sequence.shallow_copy()),
        }
    }

    fn slots(&self, composite: &CompositeRef) -> Vec<Slot> {
        match composite {
            CompositeRef::Record(record) => record.keys().into_iter().map(Slot::Key).collect(),
            CompositeRef::Sequence(sequence) => (0..sequence.len()).map(Slot::Index).collect(),
        }
    }

    fn child(&self, composite: &CompositeRef, slot: &Slot) -> Option<Value> {
        match (composite, slot) {
            (CompositeRef::Record(record), Slot::Key(key)) => record.get(key),
            (CompositeRef::Sequence(sequence), Slot::Index(index)) => sequence.get(*index),
            _ => None,
        }
    }

    fn replace_child(&mut self, composite: &CompositeRef, slot: &Slot, value: Value) {
        match (composite, slot) {
            (CompositeRef::Record(record), Slot::Key(key)) => {
                record.replace_existing(key, value);
            }
            (CompositeRef::Sequence(sequence), Slot::Index(index)) => {
                sequence.replace_existing(*index, value);
            }
            _ => {}
        }
    }

    fn to_value(&self, composite: &CompositeRef) -> Value {
        match composite {
            CompositeRef::Record(record) => Value::Record(record.clone()),
            CompositeRef::Sequence(sequence) => Value::Sequence(sequence.clone()),
        }
    }

    fn same_leaf(&self, a: &Value, b: &Value) -> bool {
        a.same_identity(b)
    }
}

/// Deep-copy `root` with the default configuration.
///
/// Leaves come back unchanged. Every record and sequence reachable from
/// `root` gets exactly one fresh copy, and every reference to it (shared
/// edges and cycles included) points at that copy in the result.
pub fn copy_graph(root: &Value) -> Result<Value> {
    copy_graph_with(root, &CloneConfig::default())
}

/// Deep-copy `root` with an explicit configuration
pub fn copy_graph_with(root: &Value, config: &CloneConfig) -> Result<Value> {
    GraphCloner::new(config.clone()).run(&mut ValueGraph, root)
}
