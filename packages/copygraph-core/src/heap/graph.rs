//! [`ObjectGraph`] adapter for [`Heap`]
//!
//! Identity is the arena index. A reference that belongs to another heap,
//! or points past the end of the arena, cannot be keyed and is reported
//! as `IdentityUnavailable`: up front for the root, during the walk for
//! anything deeper.

use super::{Heap, HeapObject, HeapValue, ObjectRef};
use crate::errors::{CopyGraphError, Result};
use crate::graph::{Classified, CompositeKind, Identity, ObjectGraph, Slot};

impl Heap {
    fn resolve(&self, r: ObjectRef) -> Result<&HeapObject> {
        if r.heap != self.id {
            return Err(CopyGraphError::identity_unavailable(format!(
                "{} belongs to heap {}, not heap {}",
                r, r.heap, self.id
            )));
        }
        self.objects.get(r.index).ok_or_else(|| {
            CopyGraphError::identity_unavailable(format!(
                "{} is out of bounds (heap holds {} objects)",
                r,
                self.objects.len()
            ))
        })
    }
}

impl ObjectGraph for Heap {
    type Value = HeapValue;
    type Composite = ObjectRef;

    fn check_environment(&self, root: &HeapValue) -> Result<()> {
        match root {
            HeapValue::Ref(r) => self.resolve(*r).map(|_| ()),
            _ => Ok(()),
        }
    }

    fn classify(&self, value: &HeapValue) -> Result<Classified<ObjectRef>> {
        match value {
            HeapValue::Ref(r) => Ok(Classified::Composite {
                kind: self.resolve(*r)?.kind(),
                handle: *r,
            }),
            _ => Ok(Classified::Leaf),
        }
    }

    fn identity(&self, composite: &ObjectRef) -> Identity {
        composite.index
    }

    fn shallow_copy(&mut self, composite: &ObjectRef, kind: CompositeKind) -> ObjectRef {
        let object = self
            .get(*composite)
            .cloned()
            .unwrap_or_else(|| HeapObject::empty(kind));
        self.alloc(object)
    }

    fn slots(&self, composite: &ObjectRef) -> Vec<Slot> {
        match self.get(*composite) {
            Some(HeapObject::Record(fields)) => fields.keys().cloned().map(Slot::Key).collect(),
            Some(HeapObject::Sequence(items)) => (0..items.len()).map(Slot::Index).collect(),
            None => Vec::new(),
        }
    }

    fn child(&self, composite: &ObjectRef, slot: &Slot) -> Option<HeapValue> {
        match slot {
            Slot::Key(key) => self.field(*composite, key),
            Slot::Index(index) => self.element(*composite, *index),
        }
    }

    fn replace_child(&mut self, composite: &ObjectRef, slot: &Slot, value: HeapValue) {
        match (self.get_mut(*composite), slot) {
            (Some(HeapObject::Record(fields)), Slot::Key(key)) => {
                if let Some(existing) = fields.get_mut(key) {
                    *existing = value;
                }
            }
            (Some(HeapObject::Sequence(items)), Slot::Index(index)) => {
                if let Some(existing) = items.get_mut(*index) {
                    *existing = value;
                }
            }
            _ => {}
        }
    }

    fn to_value(&self, composite: &ObjectRef) -> HeapValue {
        HeapValue::Ref(*composite)
    }

    fn same_leaf(&self, a: &HeapValue, b: &HeapValue) -> bool {
        a.same_identity(b)
    }
}
