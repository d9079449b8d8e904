//! Model instantiation error types

use thiserror::Error;

/// Errors raised by a factory while building a model instance
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("Unknown property '{property}' for model '{model}'")]
    UnknownProperty { model: String, property: String },

    #[error("Invalid value for property '{property}' of model '{model}': {message}")]
    InvalidProperty {
        model: String,
        property: String,
        message: String,
    },

    #[error("Invalid model configuration: {message}")]
    InvalidConfig { message: String },
}

impl ModelError {
    pub fn unknown_property(model: impl Into<String>, property: impl Into<String>) -> Self {
        Self::UnknownProperty {
            model: model.into(),
            property: property.into(),
        }
    }

    pub fn invalid_property(
        model: impl Into<String>,
        property: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidProperty {
            model: model.into(),
            property: property.into(),
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_property_error() {
        let error = ModelError::unknown_property("Audio", "colour");
        assert_eq!(
            error.to_string(),
            "Unknown property 'colour' for model 'Audio'"
        );
    }

    #[test]
    fn test_invalid_property_error() {
        let error = ModelError::invalid_property("Audio", "volume", "expected integer <= 100");
        assert_eq!(
            error.to_string(),
            "Invalid value for property 'volume' of model 'Audio': expected integer <= 100"
        );
    }

    #[test]
    fn test_invalid_config_error() {
        let error = ModelError::invalid_config("expected a JSON object");
        assert_eq!(
            error.to_string(),
            "Invalid model configuration: expected a JSON object"
        );
    }
}
