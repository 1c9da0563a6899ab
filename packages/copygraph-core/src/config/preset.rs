//! Preset configurations
//!
//! Presets provide complete default configurations for common use cases.

use serde::{Deserialize, Serialize};

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Reference behaviour: plain recursion
    ///
    /// - Traversal: recursive (one native frame per nesting level)
    /// - Depth limit: 1,024 composites
    Reference,

    /// Default: explicit work stack, generous depth limit
    ///
    /// - Traversal: work stack
    /// - Depth limit: 100,000 composites
    Balanced,

    /// Pathological inputs (linked lists, generated trees)
    ///
    /// - Traversal: work stack
    /// - Depth limit: 10,000,000 composites (bounded by memory only)
    Deep,
}

impl Preset {
    /// Parse preset from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "reference" => Ok(Self::Reference),
            "balanced" => Ok(Self::Balanced),
            "deep" => Ok(Self::Deep),
            _ => Err(format!(
                "Unknown preset '{}'. Valid presets: reference, balanced, deep",
                s
            )),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Balanced => "balanced",
            Self::Deep => "deep",
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::Balanced
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
