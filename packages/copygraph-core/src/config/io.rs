//! Configuration I/O (YAML loading)

use super::clone_config::CloneConfig;
use super::error::{ConfigError, ConfigResult};
use super::patch::CloneConfigPatch;
use super::preset::Preset;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Schema versions this build understands
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    /// Base preset
    #[serde(default = "default_preset_name")]
    pub preset: String,

    /// Fine-grained overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<CloneConfigPatch>,
}

fn default_preset_name() -> String {
    Preset::default().as_str().to_string()
}

impl CloneConfig {
    /// Load and validate a configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML content
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        // Version check
        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset = Preset::from_str(&export.preset)
            .map_err(|_| ConfigError::UnknownPreset(export.preset.clone()))?;

        let mut config = Self::from_preset(preset);
        if let Some(overrides) = &export.overrides {
            config = config.apply_patch(overrides);
        }

        config.validate()?;
        Ok(config)
    }

    /// Serialize as YAML schema v1 (every field written as an override)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            preset: default_preset_name(),
            overrides: Some(CloneConfigPatch::from(self)),
        };

        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }
}
