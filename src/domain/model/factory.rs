//! Model factory trait and descriptors

use serde::Serialize;
use serde_json::Value;

use super::entity::{Model, ModelConfig};
use super::error::ModelError;

#[cfg(test)]
use mockall::automock;

/// Description of a single property a model accepts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyDescriptor {
    pub name: String,
    pub kind: String,
    pub default: Value,
}

/// Diagnostic description of what a factory builds
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModelDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub properties: Vec<PropertyDescriptor>,
}

impl ModelDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|p| p.name.as_str())
    }
}

/// Builds model instances from a configuration payload
///
/// The registry stores factories and hands them out; it never calls
/// `create` itself. The configuration shape is owned by each widget.
#[cfg_attr(test, automock)]
pub trait ModelFactory: Send + Sync {
    /// Construct a new model instance
    fn create(&self, config: ModelConfig) -> Result<Box<dyn Model>, ModelError>;

    /// Describe the model this factory builds
    fn describe(&self) -> ModelDescriptor;
}
