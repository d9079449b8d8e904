//! Model entity and related types

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::error::ModelError;
use super::factory::ModelFactory;
use super::validation::{validate_model_name, ModelNameError};

/// Model name - the stable wire key a widget is registered under
///
/// Names are case-sensitive. Validation happens on construction, so every
/// `ModelName` held by a registry is well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModelName(String);

impl ModelName {
    /// Create a new ModelName after validation
    pub fn new(name: impl Into<String>) -> Result<Self, ModelNameError> {
        let name = name.into();
        validate_model_name(&name)?;
        Ok(Self(name))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ModelName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ModelName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ModelName {
    type Error = ModelNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ModelName {
    type Error = ModelNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModelName> for String {
    fn from(name: ModelName) -> Self {
        name.0
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque configuration payload handed to a factory
///
/// Deserializes from a JSON object or `null` (an empty config).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "Value", try_from = "Value")]
pub struct ModelConfig(Map<String, Value>);

impl ModelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<ModelConfig> for Value {
    fn from(config: ModelConfig) -> Self {
        Value::Object(config.0)
    }
}

impl TryFrom<Value> for ModelConfig {
    type Error = ModelError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            other => Err(ModelError::invalid_config(format!(
                "expected a JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

/// A widget model instance produced by a factory
pub trait Model: Send + Sync + fmt::Debug {
    /// Instance identifier assigned at construction
    fn id(&self) -> &str;

    /// Name of the model type this instance was built as
    fn model_type(&self) -> &str;

    /// Current property values
    fn properties(&self) -> &Map<String, Value>;

    /// Serialized form sent back to the host
    fn to_json(&self) -> Value {
        json!({
            "id": self.id(),
            "type": self.model_type(),
            "properties": self.properties(),
        })
    }
}

/// A registered name paired with its factory
#[derive(Clone)]
pub struct ModelEntry {
    name: ModelName,
    factory: Arc<dyn ModelFactory>,
}

impl ModelEntry {
    pub fn new(name: ModelName, factory: Arc<dyn ModelFactory>) -> Self {
        Self { name, factory }
    }

    pub fn name(&self) -> &ModelName {
        &self.name
    }

    pub fn factory(&self) -> &Arc<dyn ModelFactory> {
        &self.factory
    }
}

impl fmt::Debug for ModelEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelEntry")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_model_name_valid() {
        let name = ModelName::new("KaTeX").unwrap();
        assert_eq!(name.as_str(), "KaTeX");
        assert_eq!(name.to_string(), "KaTeX");
    }

    #[test]
    fn test_model_name_invalid() {
        assert!(ModelName::new("").is_err());
        assert!(ModelName::new("two words").is_err());
    }

    #[test]
    fn test_model_name_is_case_sensitive() {
        let upper = ModelName::new("Video").unwrap();
        let lower = ModelName::new("video").unwrap();
        assert_ne!(upper, lower);
    }

    #[test]
    fn test_model_name_borrows_as_str() {
        let mut map = HashMap::new();
        map.insert(ModelName::new("Audio").unwrap(), 1);

        assert_eq!(map.get("Audio"), Some(&1));
        assert_eq!(map.get("audio"), None);
    }

    #[test]
    fn test_model_name_serde() {
        let name: ModelName = serde_json::from_str("\"MathJax\"").unwrap();
        assert_eq!(name.as_str(), "MathJax");

        let invalid: Result<ModelName, _> = serde_json::from_str("\"\"");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_model_config_builder() {
        let config = ModelConfig::new()
            .with("text", "E = mc^2")
            .with("visible", true);

        assert_eq!(config.len(), 2);
        assert_eq!(config.get("text"), Some(&json!("E = mc^2")));
        assert_eq!(config.get("visible"), Some(&json!(true)));
        assert_eq!(config.get("missing"), None);
    }

    #[test]
    fn test_model_config_from_value() {
        let config = ModelConfig::try_from(json!({"volume": 50})).unwrap();
        assert_eq!(config.get("volume"), Some(&json!(50)));

        let empty = ModelConfig::try_from(Value::Null).unwrap();
        assert!(empty.is_empty());

        let error = ModelConfig::try_from(json!([1, 2, 3])).unwrap_err();
        assert_eq!(
            error,
            ModelError::invalid_config("expected a JSON object, got array")
        );
    }

    #[test]
    fn test_model_config_serde_matches_try_from() {
        let empty: ModelConfig = serde_json::from_value(Value::Null).unwrap();
        assert!(empty.is_empty());

        let config: ModelConfig = serde_json::from_value(json!({"paused": false})).unwrap();
        assert_eq!(config.get("paused"), Some(&json!(false)));
        assert_eq!(serde_json::to_value(&config).unwrap(), json!({"paused": false}));

        let error = serde_json::from_value::<ModelConfig>(json!([1])).unwrap_err();
        assert!(error.to_string().contains("expected a JSON object, got array"));
    }
}
