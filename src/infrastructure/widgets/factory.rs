//! Widget factory built from a declared property list

use serde_json::{Map, Value};
use uuid::Uuid;

use super::schema::PropertySpec;
use crate::domain::model::{Model, ModelConfig, ModelDescriptor, ModelError, ModelFactory};

/// Factory for a builtin widget model
///
/// Instances start from the declared defaults, then the configured default
/// overrides, then the host's payload. Properties the widget does not
/// declare are rejected.
#[derive(Debug, Clone)]
pub struct WidgetFactory {
    name: &'static str,
    description: &'static str,
    properties: &'static [PropertySpec],
    defaults: Map<String, Value>,
}

impl WidgetFactory {
    pub fn new(
        name: &'static str,
        description: &'static str,
        properties: &'static [PropertySpec],
    ) -> Self {
        Self {
            name,
            description,
            properties,
            defaults: Map::new(),
        }
    }

    /// Override declared defaults, validating each value
    pub fn with_defaults(mut self, overrides: &Map<String, Value>) -> Result<Self, ModelError> {
        for (key, value) in overrides {
            self.check_property(key, value)?;
            self.defaults.insert(key.clone(), value.clone());
        }
        Ok(self)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn properties(&self) -> &'static [PropertySpec] {
        self.properties
    }

    fn spec(&self, property: &str) -> Option<&'static PropertySpec> {
        self.properties.iter().find(|spec| spec.name == property)
    }

    fn check_property(&self, key: &str, value: &Value) -> Result<(), ModelError> {
        let spec = self
            .spec(key)
            .ok_or_else(|| ModelError::unknown_property(self.name, key))?;

        spec.check(value)
            .map_err(|message| ModelError::invalid_property(self.name, key, message))
    }

    fn default_for(&self, spec: &PropertySpec) -> Value {
        self.defaults
            .get(spec.name)
            .cloned()
            .unwrap_or_else(|| spec.default.to_value())
    }
}

impl ModelFactory for WidgetFactory {
    fn create(&self, config: ModelConfig) -> Result<Box<dyn Model>, ModelError> {
        let mut properties = Map::new();
        for spec in self.properties {
            properties.insert(spec.name.to_string(), self.default_for(spec));
        }

        for (key, value) in config.into_inner() {
            self.check_property(&key, &value)?;
            properties.insert(key, value);
        }

        Ok(Box::new(WidgetModel {
            id: Uuid::new_v4().to_string(),
            model_type: self.name.to_string(),
            properties,
        }))
    }

    fn describe(&self) -> ModelDescriptor {
        self.properties.iter().fold(
            ModelDescriptor::new().with_description(self.description),
            |descriptor, spec| descriptor.with_property(spec.descriptor(self.default_for(spec))),
        )
    }
}

/// Instance produced by a [`WidgetFactory`]
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetModel {
    id: String,
    model_type: String,
    properties: Map<String, Value>,
}

impl Model for WidgetModel {
    fn id(&self) -> &str {
        &self.id
    }

    fn model_type(&self) -> &str {
        &self.model_type
    }

    fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}
