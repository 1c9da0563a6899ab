//! Custom assertions for copy verification

use copygraph_core::graph::shares_no_composites;
use copygraph_core::value::{Value, ValueGraph};

/// Assert that `copy` is a proper deep copy of `original`:
/// equivalent shape and aliasing, distinct root, no shared composites.
pub fn assert_deep_copy(original: &Value, copy: &Value) {
    assert!(
        copy.structurally_equivalent(original),
        "Expected copy to be structurally equivalent to original.\nOriginal: {:?}\nCopy: {:?}",
        original,
        copy
    );
    if original.is_composite() {
        assert!(
            copy != original,
            "Expected a fresh root instance, got the original back: {:?}",
            copy
        );
    }
    assert!(
        shares_no_composites(&ValueGraph, original, copy).unwrap(),
        "Copy shares at least one composite with the original"
    );
}

/// Assert that two values are the same instance (or identical leaves)
pub fn assert_same_instance(left: &Value, right: &Value) {
    assert!(
        left.same_identity(right),
        "Expected the same instance, got {:?} and {:?}",
        left,
        right
    );
}

/// Assert that two composites are distinct instances
pub fn assert_distinct_instance(left: &Value, right: &Value) {
    assert!(
        !left.same_identity(right),
        "Expected distinct instances, both are {:?}",
        left
    );
}

/// Follow a path of record keys and sequence indices
pub fn walk(root: &Value, path: &[&str]) -> Value {
    let mut current = root.clone();
    for step in path {
        let next = match step.parse::<usize>() {
            Ok(index) if current.as_sequence().is_some() => current.index(index),
            _ => current.field(step),
        };
        current = next.unwrap_or_else(|| panic!("path step {:?} missing in {:?}", step, current));
    }
    current
}
