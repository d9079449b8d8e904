//! Host error types

use thiserror::Error;

use super::HostErrorKind;
use crate::domain::model::ModelError;
use crate::domain::registry::RegistryError;

/// Failure while serving a single instantiation request
#[derive(Debug, Error)]
pub enum HostError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Invalid message: {0}")]
    InvalidMessage(String),
}

impl HostError {
    pub fn invalid_message(message: impl Into<String>) -> Self {
        Self::InvalidMessage(message.into())
    }

    /// Category reported back to the backend
    pub fn kind(&self) -> HostErrorKind {
        match self {
            Self::Registry(RegistryError::UnknownModel { .. }) => HostErrorKind::UnknownModel,
            Self::Registry(_) | Self::Model(_) => HostErrorKind::InvalidConfig,
            Self::InvalidMessage(_) => HostErrorKind::InvalidMessage,
        }
    }
}
