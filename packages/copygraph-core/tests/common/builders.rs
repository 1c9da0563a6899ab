//! Graph builders
//!
//! [`GraphSpec`] describes a graph with arbitrary sharing and back edges as
//! plain data, so the same shape can be materialized as [`Value`]s or in a
//! [`Heap`] and generated by proptest.

use copygraph_core::heap::{Heap, HeapValue, ObjectRef};
use copygraph_core::value::Value;

/// Child of a node: a number leaf or an edge to another node
#[derive(Debug, Clone)]
pub enum ChildSpec {
    Leaf(i32),
    Edge(usize),
}

#[derive(Debug, Clone)]
pub struct NodeSpec {
    pub is_record: bool,
    pub children: Vec<ChildSpec>,
}

/// Node 0 is the root. Edges may point at any node, including ancestors
/// and the node itself.
#[derive(Debug, Clone, Default)]
pub struct GraphSpec {
    pub nodes: Vec<NodeSpec>,
}

impl GraphSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record node
    pub fn record(mut self, children: Vec<ChildSpec>) -> Self {
        self.nodes.push(NodeSpec {
            is_record: true,
            children,
        });
        self
    }

    /// Append a sequence node
    pub fn sequence(mut self, children: Vec<ChildSpec>) -> Self {
        self.nodes.push(NodeSpec {
            is_record: false,
            children,
        });
        self
    }

    fn resolve(&self, edge: usize) -> usize {
        edge % self.nodes.len()
    }

    /// Indices of the nodes reachable from the root, in discovery order
    pub fn reachable(&self) -> Vec<usize> {
        if self.nodes.is_empty() {
            return Vec::new();
        }
        let mut seen = vec![false; self.nodes.len()];
        let mut order = Vec::new();
        let mut pending = vec![0];
        seen[0] = true;
        while let Some(index) = pending.pop() {
            order.push(index);
            for child in &self.nodes[index].children {
                if let ChildSpec::Edge(target) = child {
                    let target = self.resolve(*target);
                    if !seen[target] {
                        seen[target] = true;
                        pending.push(target);
                    }
                }
            }
        }
        order
    }

    /// `(edges, leaves)` over the reachable nodes
    pub fn reachable_counts(&self) -> (usize, usize) {
        self.reachable()
            .into_iter()
            .flat_map(|index| self.nodes[index].children.iter())
            .fold((0, 0), |(edges, leaves), child| match child {
                ChildSpec::Edge(_) => (edges + 1, leaves),
                ChildSpec::Leaf(_) => (edges, leaves + 1),
            })
    }

    /// Materialize as `Rc`-based values
    pub fn build_value(&self) -> Value {
        if self.nodes.is_empty() {
            return Value::Null;
        }

        let values: Vec<Value> = self
            .nodes
            .iter()
            .map(|node| {
                if node.is_record {
                    Value::record()
                } else {
                    Value::sequence()
                }
            })
            .collect();

        for (node, value) in self.nodes.iter().zip(&values) {
            for (slot, child) in node.children.iter().enumerate() {
                let child_value = match child {
                    ChildSpec::Leaf(n) => Value::from(*n),
                    ChildSpec::Edge(target) => values[self.resolve(*target)].clone(),
                };
                match value {
                    Value::Record(record) => {
                        record.set(format!("k{}", slot), child_value);
                    }
                    Value::Sequence(sequence) => sequence.push(child_value),
                    _ => {}
                }
            }
        }

        values[0].clone()
    }

    /// Materialize inside `heap`
    pub fn build_heap(&self, heap: &mut Heap) -> HeapValue {
        if self.nodes.is_empty() {
            return HeapValue::Null;
        }

        let refs: Vec<ObjectRef> = self
            .nodes
            .iter()
            .map(|node| {
                if node.is_record {
                    heap.alloc_record()
                } else {
                    heap.alloc_sequence()
                }
            })
            .collect();

        for (node, &r) in self.nodes.iter().zip(&refs) {
            for (slot, child) in node.children.iter().enumerate() {
                let child_value = match child {
                    ChildSpec::Leaf(n) => HeapValue::from(*n),
                    ChildSpec::Edge(target) => HeapValue::Ref(refs[self.resolve(*target)]),
                };
                let written = if node.is_record {
                    heap.set_field(r, format!("k{}", slot), child_value).map(|_| ())
                } else {
                    heap.push(r, child_value)
                };
                written.expect("builder writes into its own heap");
            }
        }

        HeapValue::Ref(refs[0])
    }
}
