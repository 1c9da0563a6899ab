//! Graph cloner
//!
//! Depth-first, identity-memoized deep copy over any [`ObjectGraph`].
//!
//! For every composite reached for the first time the cloner
//! 1. makes a one-level (shallow) copy,
//! 2. registers `original → copy` in the run's [`IdentityTable`],
//! 3. only then replaces each child of the copy with the child's copy.
//!
//! Registration happens before any child is visited, so a later encounter
//! of the same original (a second path, or a cycle back through its own
//! children) resolves to the registered copy and the walk stops there.
//!
//! Two traversal modes share the per-value step ([`GraphCloner::enter`]):
//! plain recursion, and an explicit frame stack that visits slots in the
//! same order without consuming native stack per level.

use super::identity::IdentityTable;
use super::ports::{Classified, CompositeKind, ObjectGraph, Slot};
use crate::config::{CloneConfig, Preset, TraversalMode, Validatable};
use crate::errors::{CopyGraphError, Result};
use serde::Serialize;
use tracing::{debug, trace, warn};

/// Remaining native stack below which recursive mode switches to a new segment
const STACK_RED_ZONE: usize = 64 * 1024;
/// Size of each segment allocated by recursive mode
const STACK_GROWTH_SIZE: usize = 1024 * 1024;

/// Counters for one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CloneStats {
    /// Fresh composites created (records + sequences)
    pub composites_copied: usize,
    pub records_copied: usize,
    pub sequences_copied: usize,
    /// Leaf values passed through, root included
    pub leaves_passed: usize,
    /// Encounters of an original that already had a copy (sharing or cycle)
    pub shared_hits: usize,
    /// Deepest composite nesting on a path (root composite = 1)
    pub max_depth: usize,
}

impl CloneStats {
    fn record_copy(&mut self, kind: CompositeKind, depth: usize) {
        self.composites_copied += 1;
        match kind {
            CompositeKind::Record => self.records_copied += 1,
            CompositeKind::Sequence => self.sequences_copied += 1,
        }
        self.max_depth = self.max_depth.max(depth);
    }
}

/// Outcome of visiting one value
enum Visit<V, C> {
    /// Leaf: the value itself is the copy
    Leaf,
    /// Original already copied during this run
    Shared(V),
    /// Fresh shallow copy, children still to be replaced
    Enter(C),
}

/// Work-stack frame: a copy whose remaining slots still hold originals
struct Frame<C> {
    copy: C,
    /// Slots in reverse enumeration order, popped from the back
    pending: Vec<Slot>,
}

impl<C> Frame<C> {
    fn new<G: ObjectGraph<Composite = C>>(graph: &G, copy: C) -> Self {
        let mut pending = graph.slots(&copy);
        pending.reverse();
        Self { copy, pending }
    }
}

/// Deep copier for object graphs with sharing and cycles
///
/// # Examples
///
/// ```rust
/// use copygraph_core::graph::GraphCloner;
/// use copygraph_core::value::{Value, ValueGraph};
/// use copygraph_core::config::CloneConfig;
///
/// let list = Value::sequence_from([Value::from(1), Value::from(2)]);
/// let list_seq = list.as_sequence().unwrap().clone();
/// list_seq.set(0, list.clone()); // list[0] = list
///
/// let mut cloner = GraphCloner::new(CloneConfig::default());
/// let copy = cloner.run(&mut ValueGraph, &list).unwrap();
///
/// assert!(copy != list);
/// assert!(copy.index(0).unwrap() == copy);
/// assert_eq!(cloner.stats().shared_hits, 1);
/// ```
#[derive(Debug, Clone)]
pub struct GraphCloner {
    config: CloneConfig,
    stats: CloneStats,
}

impl GraphCloner {
    pub fn new(config: CloneConfig) -> Self {
        Self {
            config,
            stats: CloneStats::default(),
        }
    }

    pub fn from_preset(preset: Preset) -> Self {
        Self::new(CloneConfig::from_preset(preset))
    }

    pub fn config(&self) -> &CloneConfig {
        &self.config
    }

    /// Counters of the most recent run (partial if it failed)
    pub fn stats(&self) -> &CloneStats {
        &self.stats
    }

    /// Deep-copy `root`.
    ///
    /// The identity table is created here and dropped on return; nothing
    /// carries over between runs.
    pub fn run<G: ObjectGraph>(&mut self, graph: &mut G, root: &G::Value) -> Result<G::Value> {
        self.stats = CloneStats::default();
        Validatable::validate(&self.config).map_err(|e| {
            warn!(config = self.config.config_name(), "rejected before traversal: {}", e);
            e
        })?;
        graph.check_environment(root).map_err(|e| {
            warn!("graph copy refused before traversal: {}", e);
            e
        })?;

        let mut table = IdentityTable::with_capacity(self.config.table_capacity);
        debug!(
            mode = %self.config.traversal,
            max_depth = self.config.max_depth,
            "graph copy started"
        );

        let result = match self.config.traversal {
            TraversalMode::Recursive => self.copy_recursive(graph, &mut table, root, 1),
            TraversalMode::WorkStack => self.copy_with_work_stack(graph, &mut table, root),
        };

        match &result {
            Ok(_) => debug!(
                composites = self.stats.composites_copied,
                shared_hits = self.stats.shared_hits,
                leaves = self.stats.leaves_passed,
                max_depth = self.stats.max_depth,
                "graph copy finished"
            ),
            Err(e) => warn!(
                composites = self.stats.composites_copied,
                "graph copy aborted: {}", e
            ),
        }

        result
    }

    /// Classify `value` and, for an unseen composite, create and register
    /// its shallow copy.
    fn enter<G: ObjectGraph>(
        &mut self,
        graph: &mut G,
        table: &mut IdentityTable<G::Composite>,
        value: &G::Value,
        depth: usize,
    ) -> Result<Visit<G::Value, G::Composite>> {
        let (kind, original) = match graph.classify(value)? {
            Classified::Leaf => {
                self.stats.leaves_passed += 1;
                return Ok(Visit::Leaf);
            }
            Classified::Composite { kind, handle } => (kind, handle),
        };

        let identity = graph.identity(&original);
        if let Some(copy) = table.get(identity) {
            self.stats.shared_hits += 1;
            return Ok(Visit::Shared(graph.to_value(copy)));
        }

        if depth > self.config.max_depth {
            return Err(CopyGraphError::depth_limit(
                self.config.max_depth,
                self.config.traversal,
            ));
        }

        let copy = graph.shallow_copy(&original, kind);
        table.register(identity, copy.clone());
        self.stats.record_copy(kind, depth);
        trace!(%kind, identity, depth, "registered copy");

        Ok(Visit::Enter(copy))
    }

    fn copy_recursive<G: ObjectGraph>(
        &mut self,
        graph: &mut G,
        table: &mut IdentityTable<G::Composite>,
        value: &G::Value,
        depth: usize,
    ) -> Result<G::Value> {
        let copy = match self.enter(graph, table, value, depth)? {
            Visit::Leaf => return Ok(value.clone()),
            Visit::Shared(existing) => return Ok(existing),
            Visit::Enter(copy) => copy,
        };

        for slot in graph.slots(&copy) {
            if let Some(child) = graph.child(&copy, &slot) {
                let child_copy = stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH_SIZE, || {
                    self.copy_recursive(graph, table, &child, depth + 1)
                })?;
                graph.replace_child(&copy, &slot, child_copy);
            }
        }

        Ok(graph.to_value(&copy))
    }

    fn copy_with_work_stack<G: ObjectGraph>(
        &mut self,
        graph: &mut G,
        table: &mut IdentityTable<G::Composite>,
        root: &G::Value,
    ) -> Result<G::Value> {
        let root_copy = match self.enter(graph, table, root, 1)? {
            Visit::Leaf => return Ok(root.clone()),
            Visit::Shared(existing) => return Ok(existing),
            Visit::Enter(copy) => copy,
        };

        let mut stack = vec![Frame::new(&*graph, root_copy.clone())];

        while let Some(frame) = stack.last_mut() {
            let Some(slot) = frame.pending.pop() else {
                stack.pop();
                continue;
            };
            let parent = frame.copy.clone();

            let Some(child) = graph.child(&parent, &slot) else {
                continue;
            };

            // Frames on the stack are the parent's ancestors plus the parent itself
            let depth = stack.len() + 1;
            match self.enter(graph, table, &child, depth)? {
                Visit::Leaf => {}
                Visit::Shared(existing) => graph.replace_child(&parent, &slot, existing),
                Visit::Enter(copy) => {
                    let copy_value = graph.to_value(&copy);
                    graph.replace_child(&parent, &slot, copy_value);
                    stack.push(Frame::new(&*graph, copy));
                }
            }
        }

        Ok(graph.to_value(&root_copy))
    }
}

impl Default for GraphCloner {
    fn default() -> Self {
        Self::new(CloneConfig::default())
    }
}
