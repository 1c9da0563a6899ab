//! Cloner configuration
//!
//! One struct drives a [`GraphCloner`](crate::graph::GraphCloner) run:
//! how the graph is walked, how deep it may nest, and how large the
//! identity table starts out.

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use super::validation::Validatable;
use serde::{Deserialize, Serialize};

/// Upper bound for `max_depth` in any mode
pub const MAX_DEPTH_LIMIT: usize = 10_000_000;

/// Upper bound for `max_depth` when recursing on the native stack
pub const RECURSIVE_DEPTH_CEILING: usize = 2_048;

/// Upper bound for the identity table pre-allocation hint
pub const MAX_TABLE_CAPACITY: usize = 16_777_216;

/// How the cloner walks the object graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalMode {
    /// One native stack frame per nesting level
    Recursive,
    /// Explicit frame stack on the heap, same visiting order
    WorkStack,
}

impl TraversalMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recursive => "recursive",
            Self::WorkStack => "work_stack",
        }
    }
}

impl Default for TraversalMode {
    fn default() -> Self {
        Self::WorkStack
    }
}

impl std::fmt::Display for TraversalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Graph cloner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CloneConfig {
    /// Traversal strategy
    pub traversal: TraversalMode,

    /// Maximum composite nesting on one path (1..=10000000)
    pub max_depth: usize,

    /// Identity table pre-allocation hint (0..=16777216)
    #[serde(default)]
    pub table_capacity: usize,
}

impl CloneConfig {
    /// Create from preset
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Reference => Self {
                traversal: TraversalMode::Recursive,
                max_depth: 1_024,
                table_capacity: 0,
            },
            Preset::Balanced => Self {
                traversal: TraversalMode::WorkStack,
                max_depth: 100_000,
                table_capacity: 64,
            },
            Preset::Deep => Self {
                traversal: TraversalMode::WorkStack,
                max_depth: MAX_DEPTH_LIMIT,
                table_capacity: 4_096,
            },
        }
    }

    /// Builder: Set traversal
    pub fn traversal(mut self, v: TraversalMode) -> Self {
        self.traversal = v;
        self
    }

    /// Builder: Set max_depth
    pub fn max_depth(mut self, v: usize) -> Self {
        self.max_depth = v;
        self
    }

    /// Builder: Set table_capacity
    pub fn table_capacity(mut self, v: usize) -> Self {
        self.table_capacity = v;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == 0 || self.max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::range_with_hint(
                "max_depth",
                self.max_depth,
                1,
                MAX_DEPTH_LIMIT,
                "Depth limit must allow at least the root composite",
            ));
        }

        if self.traversal == TraversalMode::Recursive && self.max_depth > RECURSIVE_DEPTH_CEILING
        {
            return Err(ConfigError::range_with_hint(
                "max_depth",
                self.max_depth,
                1,
                RECURSIVE_DEPTH_CEILING,
                "Recursive traversal uses the native stack; use work_stack for deeper graphs",
            ));
        }

        if self.table_capacity > MAX_TABLE_CAPACITY {
            return Err(ConfigError::range_with_hint(
                "table_capacity",
                self.table_capacity,
                0,
                MAX_TABLE_CAPACITY,
                "Capacity is only a hint; the table grows on demand",
            ));
        }

        Ok(())
    }
}

impl Default for CloneConfig {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

impl Validatable for CloneConfig {
    fn validate(&self) -> ConfigResult<()> {
        CloneConfig::validate(self)
    }

    fn config_name(&self) -> &'static str {
        "CloneConfig"
    }
}
