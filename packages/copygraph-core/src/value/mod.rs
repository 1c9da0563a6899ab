//! Host value model
//!
//! A small dynamic value type with two shared, mutable composites
//! ([`RecordRef`], [`SequenceRef`]) and a set of leaves. Composites are
//! `Rc<RefCell<..>>` handles: cloning a [`Value`] aliases, it never copies.
//! Deep copies go through [`copy_graph`].
//!
//! ```rust
//! use copygraph_core::value::{copy_graph, Value};
//!
//! let obj = Value::record_from([("n", Value::from(1))]);
//! obj.as_record().unwrap().set("self", obj.clone());
//!
//! let copy = copy_graph(&obj).unwrap();
//! assert!(copy != obj);
//! assert!(copy.field("self").unwrap() == copy);
//! ```

pub mod graph;
pub mod json;
pub mod leaf;
pub mod record;
pub mod sequence;

pub use graph::{copy_graph, copy_graph_with, CompositeRef, ValueGraph};
pub use leaf::{Callable, Symbol};
pub use record::RecordRef;
pub use sequence::SequenceRef;

use crate::errors::Result;
use std::fmt;
use std::rc::Rc;

/// Dynamic value
#[derive(Clone, Default)]
pub enum Value {
    /// Absent value; also fills gaps in sequences
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(Rc<str>),
    Symbol(Symbol),
    Callable(Callable),
    Record(RecordRef),
    Sequence(SequenceRef),
}

impl Value {
    /// Fresh empty record
    pub fn record() -> Self {
        Value::Record(RecordRef::new())
    }

    /// Fresh empty sequence
    pub fn sequence() -> Self {
        Value::Sequence(SequenceRef::new())
    }

    pub fn record_from<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Record(RecordRef::from_fields(fields))
    }

    pub fn sequence_from<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        Value::Sequence(SequenceRef::from_values(values))
    }

    pub fn as_record(&self) -> Option<&RecordRef> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&SequenceRef> {
        match self {
            Value::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(&**s),
            _ => None,
        }
    }

    /// Field of a record; `None` for non-records and missing keys
    pub fn field(&self, key: &str) -> Option<Value> {
        self.as_record().and_then(|record| record.get(key))
    }

    /// Element of a sequence; `None` for non-sequences and out-of-range indices
    pub fn index(&self, index: usize) -> Option<Value> {
        self.as_sequence().and_then(|sequence| sequence.get(index))
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Value::Record(_) | Value::Sequence(_))
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Callable(_) => "callable",
            Value::Record(_) => "record",
            Value::Sequence(_) => "sequence",
        }
    }

    /// Identity comparison.
    ///
    /// Composites, symbols and callables compare by allocation. Numbers
    /// compare by bit pattern, so `NaN` is identical to itself and `0.0`
    /// differs from `-0.0`. Other primitives compare by content.
    pub fn same_identity(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a.to_bits() == b.to_bits(),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a.ptr_eq(b),
            (Value::Callable(a), Value::Callable(b)) => a.ptr_eq(b),
            (Value::Record(a), Value::Record(b)) => a.ptr_eq(b),
            (Value::Sequence(a), Value::Sequence(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Same shape, same leaves and the same aliasing topology
    pub fn structurally_equivalent(&self, other: &Value) -> bool {
        crate::graph::structurally_equivalent(&ValueGraph, self, other).unwrap_or(false)
    }

    /// Deep copy with the default configuration
    pub fn deep_copy(&self) -> Result<Value> {
        copy_graph(self)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity(other)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Symbol(s) => write!(f, "{:?}", s),
            Value::Callable(c) => write!(f, "{:?}", c),
            Value::Record(r) => write!(f, "{:?}", r),
            Value::Sequence(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(f64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(Rc::from(v))
    }
}

impl From<Rc<str>> for Value {
    fn from(v: Rc<str>) -> Self {
        Value::String(v)
    }
}

impl From<Symbol> for Value {
    fn from(v: Symbol) -> Self {
        Value::Symbol(v)
    }
}

impl From<Callable> for Value {
    fn from(v: Callable) -> Self {
        Value::Callable(v)
    }
}

impl From<RecordRef> for Value {
    fn from(v: RecordRef) -> Self {
        Value::Record(v)
    }
}

impl From<SequenceRef> for Value {
    fn from(v: SequenceRef) -> Self {
        Value::Sequence(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Drop a batch of values without recursing once per nesting level.
///
/// Composites that are uniquely owned hand their children back to the
/// worklist instead of dropping them in place.
fn teardown(mut pending: Vec<Value>) {
    while let Some(value) = pending.pop() {
        let children = match value {
            Value::Record(mut record) => record.take_children_if_unique(),
            Value::Sequence(mut sequence) => sequence.take_children_if_unique(),
            _ => None,
        };
        if let Some(children) = children {
            pending.extend(children);
        }
    }
}
