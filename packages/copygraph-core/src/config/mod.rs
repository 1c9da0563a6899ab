//! Cloner configuration
//!
//! Two levels of control:
//! - Preset: one-liner (`CloneConfig::from_preset(Preset::Deep)`)
//! - Override: builder setters, `CloneConfigPatch`, or a YAML file
//!
//! # Examples
//!
//! ```rust
//! use copygraph_core::config::{CloneConfig, Preset, TraversalMode};
//!
//! let config = CloneConfig::from_preset(Preset::Reference).max_depth(256);
//! assert_eq!(config.traversal, TraversalMode::Recursive);
//! assert!(config.validate().is_ok());
//! ```
//!
//! YAML schema v1:
//!
//! ```yaml
//! version: 1
//! preset: balanced
//! overrides:
//!   traversal: work_stack
//!   max_depth: 250000
//! ```

pub mod clone_config;
pub mod error;
pub mod io;
pub mod patch;
pub mod preset;
pub mod validation;

// Re-exports
pub use clone_config::{
    CloneConfig, TraversalMode, MAX_DEPTH_LIMIT, MAX_TABLE_CAPACITY, RECURSIVE_DEPTH_CEILING,
};
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, SUPPORTED_VERSIONS};
pub use patch::CloneConfigPatch;
pub use preset::Preset;
pub use validation::Validatable;
