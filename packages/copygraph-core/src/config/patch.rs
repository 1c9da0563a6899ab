//! Patch type with all-optional fields
//!
//! Used by the YAML `overrides` section and by callers that only want to
//! adjust part of a preset.

use super::clone_config::{CloneConfig, TraversalMode};
use serde::{Deserialize, Serialize};

/// Patch type for CloneConfig (all fields optional)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CloneConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traversal: Option<TraversalMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_capacity: Option<usize>,
}

impl CloneConfigPatch {
    /// True when the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.traversal.is_none() && self.max_depth.is_none() && self.table_capacity.is_none()
    }
}

impl From<&CloneConfig> for CloneConfigPatch {
    fn from(config: &CloneConfig) -> Self {
        Self {
            traversal: Some(config.traversal),
            max_depth: Some(config.max_depth),
            table_capacity: Some(config.table_capacity),
        }
    }
}

impl CloneConfig {
    /// Apply patch on top of this configuration
    pub fn apply_patch(mut self, patch: &CloneConfigPatch) -> Self {
        if let Some(v) = patch.traversal {
            self.traversal = v;
        }
        if let Some(v) = patch.max_depth {
            self.max_depth = v;
        }
        if let Some(v) = patch.table_capacity {
            self.table_capacity = v;
        }
        self
    }
}
