//! Arena heap model
//!
//! Objects live in an index-addressed arena owned by one [`Heap`].
//! References are `(heap id, index)` pairs, so identity is the arena index
//! and a reference from another heap can be detected rather than silently
//! misread.
//!
//! ```rust
//! use copygraph_core::heap::{Heap, HeapValue};
//!
//! let mut heap = Heap::new();
//! let list = heap.alloc_sequence();
//! heap.push(list, 1).unwrap();
//! heap.push(list, list).unwrap(); // list[1] = list
//!
//! let copy = heap.copy_value(&HeapValue::Ref(list)).unwrap();
//! let copy_ref = copy.as_object().unwrap();
//! assert_ne!(copy_ref, list);
//! assert_eq!(heap.element(copy_ref, 1), Some(HeapValue::Ref(copy_ref)));
//! ```

pub mod graph;

use crate::config::CloneConfig;
use crate::errors::{CopyGraphError, Result};
use crate::graph::{CompositeKind, GraphCloner};
use crate::value::Symbol;
use indexmap::IndexMap;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_HEAP_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique heap identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeapId(u64);

impl HeapId {
    fn next() -> Self {
        HeapId(NEXT_HEAP_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for HeapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Reference to an object in a specific heap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectRef {
    heap: HeapId,
    index: usize,
}

impl ObjectRef {
    pub fn heap(&self) -> HeapId {
        self.heap
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "heap{}:{}", self.heap, self.index)
    }
}

/// Value stored in a heap slot
#[derive(Debug, Clone, Default)]
pub enum HeapValue {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(Rc<str>),
    Symbol(Symbol),
    Ref(ObjectRef),
}

impl HeapValue {
    pub fn as_object(&self) -> Option<ObjectRef> {
        match self {
            HeapValue::Ref(r) => Some(*r),
            _ => None,
        }
    }

    /// Identity comparison, same rules as [`Value::same_identity`](crate::value::Value::same_identity)
    pub fn same_identity(&self, other: &HeapValue) -> bool {
        match (self, other) {
            (HeapValue::Undefined, HeapValue::Undefined) | (HeapValue::Null, HeapValue::Null) => {
                true
            }
            (HeapValue::Bool(a), HeapValue::Bool(b)) => a == b,
            (HeapValue::Number(a), HeapValue::Number(b)) => a.to_bits() == b.to_bits(),
            (HeapValue::String(a), HeapValue::String(b)) => a == b,
            (HeapValue::Symbol(a), HeapValue::Symbol(b)) => a.ptr_eq(b),
            (HeapValue::Ref(a), HeapValue::Ref(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq for HeapValue {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl From<bool> for HeapValue {
    fn from(v: bool) -> Self {
        HeapValue::Bool(v)
    }
}

impl From<f64> for HeapValue {
    fn from(v: f64) -> Self {
        HeapValue::Number(v)
    }
}

impl From<i32> for HeapValue {
    fn from(v: i32) -> Self {
        HeapValue::Number(f64::from(v))
    }
}

impl From<&str> for HeapValue {
    fn from(v: &str) -> Self {
        HeapValue::String(Rc::from(v))
    }
}

impl From<String> for HeapValue {
    fn from(v: String) -> Self {
        HeapValue::String(Rc::from(v))
    }
}

impl From<Symbol> for HeapValue {
    fn from(v: Symbol) -> Self {
        HeapValue::Symbol(v)
    }
}

impl From<ObjectRef> for HeapValue {
    fn from(v: ObjectRef) -> Self {
        HeapValue::Ref(v)
    }
}

/// Arena object
#[derive(Debug, Clone)]
pub enum HeapObject {
    Record(IndexMap<String, HeapValue>),
    Sequence(Vec<HeapValue>),
}

impl HeapObject {
    fn empty(kind: CompositeKind) -> Self {
        match kind {
            CompositeKind::Record => HeapObject::Record(IndexMap::new()),
            CompositeKind::Sequence => HeapObject::Sequence(Vec::new()),
        }
    }

    pub fn kind(&self) -> CompositeKind {
        match self {
            HeapObject::Record(_) => CompositeKind::Record,
            HeapObject::Sequence(_) => CompositeKind::Sequence,
        }
    }

    /// Number of fields or elements
    pub fn len(&self) -> usize {
        match self {
            HeapObject::Record(fields) => fields.len(),
            HeapObject::Sequence(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Index-addressed object arena
#[derive(Debug)]
pub struct Heap {
    id: HeapId,
    objects: Vec<HeapObject>,
}

impl Heap {
    pub fn new() -> Self {
        Self {
            id: HeapId::next(),
            objects: Vec::new(),
        }
    }

    pub fn id(&self) -> HeapId {
        self.id
    }

    fn alloc(&mut self, object: HeapObject) -> ObjectRef {
        self.objects.push(object);
        ObjectRef {
            heap: self.id,
            index: self.objects.len() - 1,
        }
    }

    pub fn alloc_record(&mut self) -> ObjectRef {
        self.alloc(HeapObject::empty(CompositeKind::Record))
    }

    pub fn alloc_sequence(&mut self) -> ObjectRef {
        self.alloc(HeapObject::empty(CompositeKind::Sequence))
    }

    /// Object behind `r`; `None` if `r` is foreign or dangling
    pub fn get(&self, r: ObjectRef) -> Option<&HeapObject> {
        if r.heap != self.id {
            return None;
        }
        self.objects.get(r.index)
    }

    pub fn get_mut(&mut self, r: ObjectRef) -> Option<&mut HeapObject> {
        if r.heap != self.id {
            return None;
        }
        self.objects.get_mut(r.index)
    }

    pub fn contains(&self, r: ObjectRef) -> bool {
        self.get(r).is_some()
    }

    fn object_mut(&mut self, r: ObjectRef) -> Result<&mut HeapObject> {
        let id = self.id;
        let count = self.objects.len();
        self.get_mut(r).ok_or_else(|| {
            if r.heap != id {
                CopyGraphError::heap_access(r, format!("reference belongs to heap {}", r.heap))
            } else {
                CopyGraphError::heap_access(r, format!("heap holds only {} objects", count))
            }
        })
    }

    /// Insert or overwrite a record field
    pub fn set_field(
        &mut self,
        r: ObjectRef,
        key: impl Into<String>,
        value: impl Into<HeapValue>,
    ) -> Result<Option<HeapValue>> {
        match self.object_mut(r)? {
            HeapObject::Record(fields) => Ok(fields.insert(key.into(), value.into())),
            HeapObject::Sequence(_) => Err(CopyGraphError::heap_access(r, "not a record")),
        }
    }

    pub fn field(&self, r: ObjectRef, key: &str) -> Option<HeapValue> {
        match self.get(r)? {
            HeapObject::Record(fields) => fields.get(key).cloned(),
            HeapObject::Sequence(_) => None,
        }
    }

    /// Append to a sequence
    pub fn push(&mut self, r: ObjectRef, value: impl Into<HeapValue>) -> Result<()> {
        match self.object_mut(r)? {
            HeapObject::Sequence(items) => {
                items.push(value.into());
                Ok(())
            }
            HeapObject::Record(_) => Err(CopyGraphError::heap_access(r, "not a sequence")),
        }
    }

    pub fn element(&self, r: ObjectRef, index: usize) -> Option<HeapValue> {
        match self.get(r)? {
            HeapObject::Sequence(items) => items.get(index).cloned(),
            HeapObject::Record(_) => None,
        }
    }

    /// Write a sequence element, padding with `Undefined` past the end
    pub fn set_element(
        &mut self,
        r: ObjectRef,
        index: usize,
        value: impl Into<HeapValue>,
    ) -> Result<Option<HeapValue>> {
        match self.object_mut(r)? {
            HeapObject::Sequence(items) => {
                if index >= items.len() {
                    items.resize(index, HeapValue::Undefined);
                    items.push(value.into());
                    return Ok(None);
                }
                Ok(Some(std::mem::replace(&mut items[index], value.into())))
            }
            HeapObject::Record(_) => Err(CopyGraphError::heap_access(r, "not a sequence")),
        }
    }

    /// Number of allocated objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Deep-copy `value` inside this heap with the default configuration.
    ///
    /// Copies are appended to the arena; originals are left untouched.
    pub fn copy_value(&mut self, value: &HeapValue) -> Result<HeapValue> {
        self.copy_value_with(value, &CloneConfig::default())
    }

    pub fn copy_value_with(&mut self, value: &HeapValue, config: &CloneConfig) -> Result<HeapValue> {
        GraphCloner::new(config.clone()).run(self, value)
    }

    /// Same shape, same leaves and the same aliasing topology
    pub fn structurally_equivalent(&self, a: &HeapValue, b: &HeapValue) -> Result<bool> {
        crate::graph::structurally_equivalent(self, a, b)
    }
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}
