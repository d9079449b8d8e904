//! Wire messages for model instantiation

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::model::ModelConfig;

/// Backend request to instantiate a widget model
///
/// `model` is taken verbatim from the wire and is only ever used as a
/// lookup key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateModelMessage {
    /// Correlation id echoed back in the reply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub model: String,

    #[serde(default)]
    pub config: ModelConfig,
}

impl CreateModelMessage {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            id: None,
            model: model.into(),
            config: ModelConfig::default(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_config(mut self, config: ModelConfig) -> Self {
        self.config = config;
        self
    }
}

/// Category of a failed request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostErrorKind {
    UnknownModel,
    InvalidConfig,
    InvalidMessage,
}

/// Reply sent back for every request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HostReply {
    Created {
        #[serde(skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
        model: Value,
    },
    Error {
        #[serde(skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
        kind: HostErrorKind,
        message: String,
    },
}

impl HostReply {
    pub fn created(request_id: Option<String>, model: Value) -> Self {
        Self::Created { request_id, model }
    }

    pub fn error(
        request_id: Option<String>,
        kind: HostErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self::Error {
            request_id,
            kind,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}
