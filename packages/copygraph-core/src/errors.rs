//! Error types for copygraph-core
//!
//! Provides unified error handling across the crate.

use crate::config::{ConfigError, TraversalMode};
use thiserror::Error;

/// Main error type for graph copy operations
#[derive(Debug, Error)]
pub enum CopyGraphError {
    /// The graph cannot track composites by identity (environment unsupported)
    #[error("Identity tracking unavailable: {reason}")]
    IdentityUnavailable { reason: String },

    /// Composite nesting on the current path exceeded the configured limit
    #[error("Depth limit exceeded: nesting deeper than {limit} composites ({mode} traversal)")]
    DepthLimitExceeded { limit: usize, mode: TraversalMode },

    /// A heap mutation targeted a missing, foreign or wrong-kind object
    #[error("Invalid heap access at {reference}: {reason}")]
    HeapAccess { reference: String, reason: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CopyGraphError {
    /// Create an identity-unavailable error
    pub fn identity_unavailable(reason: impl Into<String>) -> Self {
        CopyGraphError::IdentityUnavailable {
            reason: reason.into(),
        }
    }

    /// Create a depth-limit error
    pub fn depth_limit(limit: usize, mode: TraversalMode) -> Self {
        CopyGraphError::DepthLimitExceeded { limit, mode }
    }

    pub fn heap_access(reference: impl ToString, reason: impl Into<String>) -> Self {
        CopyGraphError::HeapAccess {
            reference: reference.to_string(),
            reason: reason.into(),
        }
    }

    /// True for resource exhaustion (as opposed to environment/config problems)
    pub fn is_resource_error(&self) -> bool {
        matches!(self, CopyGraphError::DepthLimitExceeded { .. })
    }
}

/// Result type alias for graph copy operations
pub type Result<T> = std::result::Result<T, CopyGraphError>;
