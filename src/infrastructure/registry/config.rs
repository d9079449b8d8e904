//! Registry configuration via TOML
//!
//! Controls which builtin widget models are registered and the default
//! properties they are instantiated with.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::model::validate_model_name;

/// Error type for registry configuration
#[derive(Debug, Error)]
pub enum RegistryConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Root configuration structure for the registry
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegistryConfig {
    #[serde(default)]
    pub settings: RegistrySettings,

    /// Per-model configuration keyed by model name
    #[serde(default)]
    pub models: HashMap<String, ModelEntryConfig>,
}

/// Global registry settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySettings {
    /// Register the builtin widget catalogue (default: true)
    #[serde(default = "default_true")]
    pub builtins: bool,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self { builtins: true }
    }
}

/// Configuration for a single model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelEntryConfig {
    /// Register this model (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Property values applied before the host's payload
    #[serde(default)]
    pub defaults: Map<String, Value>,
}

impl Default for ModelEntryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            defaults: Map::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

impl RegistryConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RegistryConfigError> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading registry configuration");

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_str(&content)?;

        debug!("Registry configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, RegistryConfigError> {
        let config: RegistryConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Try to load from file, falling back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            debug!(path = %path.display(), "Registry config file not found, using defaults");
            return Self::default();
        }

        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to load registry config, using defaults"
                );
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), RegistryConfigError> {
        for name in self.models.keys() {
            validate_model_name(name).map_err(|e| {
                RegistryConfigError::ValidationError(format!("models.{}: {}", name, e))
            })?;
        }

        Ok(())
    }

    /// Check whether a model should be registered
    pub fn is_model_enabled(&self, name: &str) -> bool {
        self.models.get(name).is_none_or(|entry| entry.enabled)
    }

    /// Configured default properties for a model, if any
    pub fn model_defaults(&self, name: &str) -> Option<&Map<String, Value>> {
        self.models
            .get(name)
            .map(|entry| &entry.defaults)
            .filter(|defaults| !defaults.is_empty())
    }

    /// Names of models configured but disabled
    pub fn disabled_models(&self) -> Vec<&str> {
        let mut disabled: Vec<&str> = self
            .models
            .iter()
            .filter(|(_, entry)| !entry.enabled)
            .map(|(name, _)| name.as_str())
            .collect();
        disabled.sort_unstable();
        disabled
    }
}
