//! Graph copying
//!
//! ```text
//!   GraphCloner ──uses──▶ ObjectGraph (port) ◀──implements── ValueGraph / Heap
//!        │
//!        └── IdentityTable (one per run)
//! ```
//!
//! - `ports`: the [`ObjectGraph`] trait and classification types
//! - `identity`: per-run original → copy table
//! - `cloner`: the traversal (recursive or work-stack)
//! - `equivalence`: aliasing-aware comparison used to verify copies

pub mod cloner;
pub mod equivalence;
pub mod identity;
pub mod ports;

pub use cloner::{CloneStats, GraphCloner};
pub use equivalence::{reachable_composites, shares_no_composites, structurally_equivalent};
pub use identity::IdentityTable;
pub use ports::{Classified, CompositeKind, Identity, ObjectGraph, Slot};
