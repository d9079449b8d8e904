//! Registry error types

use thiserror::Error;

use crate::domain::model::{ModelError, ModelNameError};

/// Errors raised by registration and resolution
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two modules claimed the same name. Raised while the registry is assembled.
    #[error("Model already registered: {name}")]
    DuplicateName { name: String },

    /// No implementation is registered under the requested name.
    #[error("Unknown model: {name}")]
    UnknownModel { name: String },

    #[error("Invalid model name '{name}': {reason}")]
    InvalidName { name: String, reason: ModelNameError },

    #[error("Invalid default properties for model '{name}': {source}")]
    InvalidDefaults { name: String, source: ModelError },
}

impl RegistryError {
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    pub fn unknown_model(name: impl Into<String>) -> Self {
        Self::UnknownModel { name: name.into() }
    }

    pub fn invalid_name(name: impl Into<String>, reason: ModelNameError) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason,
        }
    }

    pub fn invalid_defaults(name: impl Into<String>, source: ModelError) -> Self {
        Self::InvalidDefaults {
            name: name.into(),
            source,
        }
    }

    /// Name the error refers to
    pub fn name(&self) -> &str {
        match self {
            Self::DuplicateName { name }
            | Self::UnknownModel { name }
            | Self::InvalidName { name, .. }
            | Self::InvalidDefaults { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_error() {
        let error = RegistryError::duplicate_name("Audio");
        assert_eq!(error.to_string(), "Model already registered: Audio");
        assert_eq!(error.name(), "Audio");
    }

    #[test]
    fn test_unknown_model_error() {
        let error = RegistryError::unknown_model("video");
        assert_eq!(error.to_string(), "Unknown model: video");
    }

    #[test]
    fn test_invalid_name_error() {
        let error = RegistryError::invalid_name("", ModelNameError::Empty);
        assert_eq!(
            error.to_string(),
            "Invalid model name '': Model name cannot be empty"
        );
    }

    #[test]
    fn test_invalid_defaults_error() {
        let error = RegistryError::invalid_defaults(
            "Audio",
            ModelError::unknown_property("Audio", "colour"),
        );
        assert_eq!(
            error.to_string(),
            "Invalid default properties for model 'Audio': Unknown property 'colour' for model 'Audio'"
        );
        assert!(std::error::Error::source(&error).is_some());
    }
}
