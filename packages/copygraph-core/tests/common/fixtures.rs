//! Test fixtures
//!
//! Ready-made input graphs for the copy scenarios.

use copygraph_core::value::{Callable, Symbol, Value};

/// One of every leaf kind
pub fn leaf_samples() -> Vec<Value> {
    vec![
        Value::from(true),
        Value::from(-1),
        Value::from("hello"),
        Value::Null,
        Value::Undefined,
        Value::Number(f64::NAN),
        Value::Symbol(Symbol::new("token")),
        Value::Callable(Callable::new("identity", |args| {
            args.first().cloned().unwrap_or_default()
        })),
    ]
}

/// `[[1], [[2]], [[[3]]]]`
pub fn nested_sequences() -> Value {
    Value::sequence_from([
        Value::sequence_from([Value::from(1)]),
        Value::sequence_from([Value::sequence_from([Value::from(2)])]),
        Value::sequence_from([Value::sequence_from([Value::sequence_from([
            Value::from(3),
        ])])]),
    ])
}

/// `{a: {a: 1}, b: {b: {b: 2}}, c: {c: {c: {c: 3}}}}`
pub fn nested_records() -> Value {
    Value::record_from([
        ("a", Value::record_from([("a", 1)])),
        (
            "b",
            Value::record_from([("b", Value::record_from([("b", 2)]))]),
        ),
        (
            "c",
            Value::record_from([(
                "c",
                Value::record_from([("c", Value::record_from([("c", 3)]))]),
            )]),
        ),
    ])
}

/// `arr = [1, 2, 3]; arr[0] = arr`
pub fn self_referencing_sequence() -> Value {
    let arr = Value::sequence_from([1, 2, 3]);
    if let Some(seq) = arr.as_sequence() {
        seq.set(0, arr.clone());
    }
    arr
}

/// `obj = {}; obj.a = obj`
pub fn self_referencing_record() -> Value {
    let obj = Value::record();
    if let Some(record) = obj.as_record() {
        record.set("a", obj.clone());
    }
    obj
}

/// `a = [{x: []}, [{}]]; a[0].x = a[1]; a[1][0].y = 2`
pub fn shared_sibling() -> Value {
    let a = Value::sequence_from([
        Value::record_from([("x", Value::sequence())]),
        Value::sequence_from([Value::record()]),
    ]);
    let first = a.index(0).unwrap_or_default();
    let second = a.index(1).unwrap_or_default();
    if let Some(record) = first.as_record() {
        record.set("x", second.clone());
    }
    if let Some(record) = second.index(0).as_ref().and_then(Value::as_record) {
        record.set("y", 2);
    }
    a
}

/// Linear chain of `depth` sequences ending in a leaf
pub fn deep_chain(depth: usize) -> Value {
    let mut value = Value::from("bottom");
    for _ in 0..depth {
        value = Value::sequence_from([value]);
    }
    value
}

/// Ring of `len` records, each pointing at the next; the last points back at the first
pub fn record_ring(len: usize) -> Value {
    let nodes: Vec<Value> = (0..len)
        .map(|i| Value::record_from([("id", i as i32)]))
        .collect();
    for (i, node) in nodes.iter().enumerate() {
        if let Some(record) = node.as_record() {
            record.set("next", nodes[(i + 1) % len].clone());
        }
    }
    nodes.first().cloned().unwrap_or_default()
}
