/*
 * Copygraph Core - Cycle-Safe Deep Copy
 *
 * Hexagonal layout:
 * - graph/  : GraphCloner, ObjectGraph port, identity table, equivalence
 * - value/  : Rc-based host values (adapter)
 * - heap/   : arena heap (adapter)
 * - config/ : traversal configuration, presets, YAML I/O
 *
 * Guarantees:
 * - Sharing and cycles reproduced exactly in the copy
 * - Copy shares no composite with the input
 * - Work-stack traversal bounded by memory, not native stack
 */

// Crate-level lint configuration
#![allow(clippy::should_implement_trait)] // from_str naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::module_inception)] // Module naming intentional

pub mod config;
pub mod errors;
pub mod graph;
pub mod heap;
pub mod value;

pub use config::{CloneConfig, Preset, TraversalMode};
pub use errors::{CopyGraphError, Result};
pub use graph::{CloneStats, GraphCloner, ObjectGraph};
pub use heap::{Heap, HeapValue, ObjectRef};
pub use value::{copy_graph, copy_graph_with, Value};
