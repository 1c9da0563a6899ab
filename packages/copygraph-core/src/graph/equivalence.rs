//! Aliasing-aware structural comparison
//!
//! Two values are structurally equivalent when the composites reachable
//! from each can be paired one-to-one such that paired composites have
//! the same kind, the same slots in the same order, identical leaves, and
//! children that are themselves paired. Sharing and cycles must line up
//! exactly: a tree and a DAG with the same printed contents are *not*
//! equivalent.
//!
//! Both walks use explicit worklists, so depth is bounded by memory only.

use super::ports::{Classified, Identity, ObjectGraph};
use crate::errors::Result;
use rustc_hash::{FxHashMap, FxHashSet};

/// Check whether `a` and `b` have the same shape, contents and aliasing topology
pub fn structurally_equivalent<G: ObjectGraph>(
    graph: &G,
    a: &G::Value,
    b: &G::Value,
) -> Result<bool> {
    let mut forward: FxHashMap<Identity, Identity> = FxHashMap::default();
    let mut backward: FxHashMap<Identity, Identity> = FxHashMap::default();
    let mut pending = vec![(a.clone(), b.clone())];

    while let Some((left, right)) = pending.pop() {
        let (left_kind, left_handle, right_kind, right_handle) =
            match (graph.classify(&left)?, graph.classify(&right)?) {
                (Classified::Leaf, Classified::Leaf) => {
                    if !graph.same_leaf(&left, &right) {
                        return Ok(false);
                    }
                    continue;
                }
                (
                    Classified::Composite {
                        kind: lk,
                        handle: lh,
                    },
                    Classified::Composite {
                        kind: rk,
                        handle: rh,
                    },
                ) => (lk, lh, rk, rh),
                _ => return Ok(false),
            };

        if left_kind != right_kind {
            return Ok(false);
        }

        let left_id = graph.identity(&left_handle);
        let right_id = graph.identity(&right_handle);
        match (forward.get(&left_id), backward.get(&right_id)) {
            (Some(&paired_right), Some(&paired_left)) => {
                if paired_right == right_id && paired_left == left_id {
                    continue;
                }
                return Ok(false);
            }
            (None, None) => {
                forward.insert(left_id, right_id);
                backward.insert(right_id, left_id);
            }
            // One side already paired with something else
            _ => return Ok(false),
        }

        let slots = graph.slots(&left_handle);
        if slots != graph.slots(&right_handle) {
            return Ok(false);
        }

        for slot in slots {
            match (
                graph.child(&left_handle, &slot),
                graph.child(&right_handle, &slot),
            ) {
                (Some(l), Some(r)) => pending.push((l, r)),
                (None, None) => {}
                _ => return Ok(false),
            }
        }
    }

    Ok(true)
}

/// Identities of every composite reachable from `root` (root included)
pub fn reachable_composites<G: ObjectGraph>(
    graph: &G,
    root: &G::Value,
) -> Result<FxHashSet<Identity>> {
    let mut seen = FxHashSet::default();
    let mut pending = vec![root.clone()];

    while let Some(value) = pending.pop() {
        let Classified::Composite { handle, .. } = graph.classify(&value)? else {
            continue;
        };
        if !seen.insert(graph.identity(&handle)) {
            continue;
        }
        for slot in graph.slots(&handle) {
            if let Some(child) = graph.child(&handle, &slot) {
                pending.push(child);
            }
        }
    }

    Ok(seen)
}

/// True when no composite is reachable from both `a` and `b`
pub fn shares_no_composites<G: ObjectGraph>(
    graph: &G,
    a: &G::Value,
    b: &G::Value,
) -> Result<bool> {
    let left = reachable_composites(graph, a)?;
    let right = reachable_composites(graph, b)?;
    Ok(left.is_disjoint(&right))
}
