//! Copy scenarios over the arena `Heap` model

#[path = "common/mod.rs"]
mod common;

use common::*;
use copygraph_core::config::{CloneConfig, Preset, TraversalMode, RECURSIVE_DEPTH_CEILING};
use copygraph_core::heap::{Heap, HeapValue};
use copygraph_core::value::Symbol;
use copygraph_core::CopyGraphError;
use pretty_assertions::assert_eq;

#[test]
fn test_heap_leaves_pass_through() {
    let mut heap = Heap::new();
    let token = Symbol::new("token");
    for leaf in [
        HeapValue::from(true),
        HeapValue::from(-1),
        HeapValue::from("hello"),
        HeapValue::Null,
        HeapValue::Undefined,
        HeapValue::Symbol(token),
    ] {
        assert_eq!(heap.copy_value(&leaf).unwrap(), leaf);
    }
    assert!(heap.is_empty());
}

#[test]
fn test_heap_self_referencing_sequence() {
    // arr = [1, 2, 3]; arr[0] = arr
    let mut heap = Heap::new();
    let arr = heap.alloc_sequence();
    for n in [1, 2, 3] {
        heap.push(arr, n).unwrap();
    }
    heap.set_element(arr, 0, arr).unwrap();

    let copy = heap.copy_value(&HeapValue::Ref(arr)).unwrap();
    let copy_ref = copy.as_object().unwrap();

    assert_eq!(heap.element(copy_ref, 0), Some(copy.clone()));
    assert_ne!(copy_ref, arr);
    assert_eq!(heap.element(copy_ref, 2), Some(HeapValue::from(3)));
}

#[test]
fn test_heap_nested_sequences_are_distinct() {
    // [[1], [[2]], [[[3]]]]
    let spec = GraphSpec::new()
        .sequence(vec![ChildSpec::Edge(1), ChildSpec::Edge(2), ChildSpec::Edge(4)])
        .sequence(vec![ChildSpec::Leaf(1)])
        .sequence(vec![ChildSpec::Edge(3)])
        .sequence(vec![ChildSpec::Leaf(2)])
        .sequence(vec![ChildSpec::Edge(5)])
        .sequence(vec![ChildSpec::Edge(6)])
        .sequence(vec![ChildSpec::Leaf(3)]);

    let mut heap = Heap::new();
    let root = spec.build_heap(&mut heap);
    let copy = heap.copy_value(&root).unwrap();

    assert_eq!(heap.len(), 14);
    assert!(heap.structurally_equivalent(&root, &copy).unwrap());
}

#[test]
fn test_heap_shared_sibling() {
    // a = [{x: []}, [{}]]; a[0].x = a[1]; a[1][0].y = 2
    let mut heap = Heap::new();
    let a = heap.alloc_sequence();
    let first = heap.alloc_record();
    let second = heap.alloc_sequence();
    let inner = heap.alloc_record();
    heap.push(a, first).unwrap();
    heap.push(a, second).unwrap();
    heap.push(second, inner).unwrap();
    heap.set_field(first, "x", second).unwrap();
    heap.set_field(inner, "y", 2).unwrap();

    let result = heap.copy_value(&HeapValue::Ref(a)).unwrap();
    let result_ref = result.as_object().unwrap();
    let result_first = heap.element(result_ref, 0).unwrap().as_object().unwrap();
    let result_second = heap.element(result_ref, 1).unwrap();
    let x = heap.field(result_first, "x").unwrap();

    assert_eq!(x, result_second);
    let x_first = heap.element(x.as_object().unwrap(), 0).unwrap();
    assert_eq!(heap.field(x_first.as_object().unwrap(), "y"), Some(HeapValue::from(2)));
    assert_ne!(x, HeapValue::Ref(second));
}

#[test]
fn test_heap_work_stack_handles_long_chain() {
    let depth = 20_000;
    let mut heap = Heap::new();
    let root = heap.alloc_sequence();
    let mut tail = root;
    for _ in 1..depth {
        let next = heap.alloc_sequence();
        heap.push(tail, next).unwrap();
        tail = next;
    }

    let root_value = HeapValue::Ref(root);
    let err = heap
        .copy_value_with(&root_value, &CloneConfig::from_preset(Preset::Reference))
        .unwrap_err();
    assert!(err.is_resource_error());

    let allocated = heap.len();
    let copy = heap
        .copy_value_with(&root_value, &CloneConfig::from_preset(Preset::Deep))
        .unwrap();
    assert_eq!(heap.len(), allocated + depth);
    assert!(heap.structurally_equivalent(&root_value, &copy).unwrap());
}

fn heap_chain(heap: &mut Heap, depth: usize) -> HeapValue {
    let root = heap.alloc_sequence();
    let mut tail = root;
    for _ in 1..depth {
        let next = heap.alloc_sequence();
        heap.push(tail, next).unwrap();
        tail = next;
    }
    HeapValue::Ref(root)
}

#[test]
fn test_heap_recursive_mode_at_depth_ceiling() {
    let config = CloneConfig::default()
        .traversal(TraversalMode::Recursive)
        .max_depth(RECURSIVE_DEPTH_CEILING);
    assert!(config.validate().is_ok());

    let mut heap = Heap::new();
    let root = heap_chain(&mut heap, RECURSIVE_DEPTH_CEILING);
    let copy = heap.copy_value_with(&root, &config).unwrap();
    assert!(heap.structurally_equivalent(&root, &copy).unwrap());

    let too_deep = heap_chain(&mut heap, RECURSIVE_DEPTH_CEILING + 1);
    let err = heap.copy_value_with(&too_deep, &config).unwrap_err();
    assert!(matches!(
        err,
        CopyGraphError::DepthLimitExceeded {
            mode: TraversalMode::Recursive,
            ..
        }
    ));
}

#[test]
fn test_heap_foreign_root_is_refused() {
    let mut heap = Heap::new();
    let mut other = Heap::new();
    let foreign = other.alloc_sequence();
    other.push(foreign, 1).unwrap();

    let err = heap.copy_value(&HeapValue::Ref(foreign)).unwrap_err();
    assert!(matches!(err, CopyGraphError::IdentityUnavailable { .. }));
    assert!(err.to_string().contains("belongs to heap"));
    assert!(heap.is_empty());
}
