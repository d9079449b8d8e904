//! Declarative property schemas for builtin widgets

use serde_json::{Map, Value};

use crate::domain::model::{json_type_name, PropertyDescriptor};

/// Accepted value type for a property
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyKind {
    Any,
    Bool,
    Int { min: Option<i64>, max: Option<i64> },
    Number,
    String,
    Selector(&'static [&'static str]),
    Object,
    Array,
}

/// Default value of a property
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Null,
    Bool(bool),
    Int(i64),
    Number(f64),
    Str(&'static str),
    EmptyObject,
    EmptyArray,
}

impl DefaultValue {
    pub fn to_value(&self) -> Value {
        match *self {
            DefaultValue::Null => Value::Null,
            DefaultValue::Bool(b) => Value::Bool(b),
            DefaultValue::Int(i) => Value::from(i),
            DefaultValue::Number(n) => Value::from(n),
            DefaultValue::Str(s) => Value::from(s),
            DefaultValue::EmptyObject => Value::Object(Map::new()),
            DefaultValue::EmptyArray => Value::Array(Vec::new()),
        }
    }
}

/// A single declared property of a widget model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertySpec {
    pub name: &'static str,
    pub kind: PropertyKind,
    pub default: DefaultValue,
}

impl PropertySpec {
    pub const fn new(name: &'static str, kind: PropertyKind, default: DefaultValue) -> Self {
        Self {
            name,
            kind,
            default,
        }
    }

    pub const fn any(name: &'static str) -> Self {
        Self::new(name, PropertyKind::Any, DefaultValue::Null)
    }

    pub const fn boolean(name: &'static str, default: bool) -> Self {
        Self::new(name, PropertyKind::Bool, DefaultValue::Bool(default))
    }

    pub const fn int(name: &'static str, default: i64) -> Self {
        Self::new(
            name,
            PropertyKind::Int {
                min: None,
                max: None,
            },
            DefaultValue::Int(default),
        )
    }

    /// Integer that may be null, null by default
    pub const fn optional_int(name: &'static str) -> Self {
        Self::new(
            name,
            PropertyKind::Int {
                min: None,
                max: None,
            },
            DefaultValue::Null,
        )
    }

    pub const fn number(name: &'static str, default: f64) -> Self {
        Self::new(name, PropertyKind::Number, DefaultValue::Number(default))
    }

    pub const fn optional_number(name: &'static str) -> Self {
        Self::new(name, PropertyKind::Number, DefaultValue::Null)
    }

    pub const fn string(name: &'static str, default: &'static str) -> Self {
        Self::new(name, PropertyKind::String, DefaultValue::Str(default))
    }

    pub const fn optional_string(name: &'static str) -> Self {
        Self::new(name, PropertyKind::String, DefaultValue::Null)
    }

    pub const fn selector(
        name: &'static str,
        options: &'static [&'static str],
        default: &'static str,
    ) -> Self {
        Self::new(name, PropertyKind::Selector(options), DefaultValue::Str(default))
    }

    pub const fn optional_selector(name: &'static str, options: &'static [&'static str]) -> Self {
        Self::new(name, PropertyKind::Selector(options), DefaultValue::Null)
    }

    pub const fn object(name: &'static str) -> Self {
        Self::new(name, PropertyKind::Object, DefaultValue::EmptyObject)
    }

    pub const fn optional_object(name: &'static str) -> Self {
        Self::new(name, PropertyKind::Object, DefaultValue::Null)
    }

    pub const fn array(name: &'static str) -> Self {
        Self::new(name, PropertyKind::Array, DefaultValue::EmptyArray)
    }

    pub const fn optional_array(name: &'static str) -> Self {
        Self::new(name, PropertyKind::Array, DefaultValue::Null)
    }

    /// Restrict an integer property to `min..=max` (either bound optional)
    pub const fn bounded(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        if let PropertyKind::Int { .. } = self.kind {
            self.kind = PropertyKind::Int { min, max };
        }
        self
    }

    pub fn accepts_null(&self) -> bool {
        matches!(self.kind, PropertyKind::Any) || matches!(self.default, DefaultValue::Null)
    }

    /// Check a candidate value, returning a message on mismatch
    pub fn check(&self, value: &Value) -> Result<(), String> {
        if value.is_null() {
            return if self.accepts_null() {
                Ok(())
            } else {
                Err(format!("expected {}, got null", self.kind_name()))
            };
        }

        let valid = match self.kind {
            PropertyKind::Any => true,
            PropertyKind::Bool => value.is_boolean(),
            PropertyKind::Int { min, max } => match value.as_i64() {
                Some(i) => {
                    min.is_none_or(|min| i >= min) && max.is_none_or(|max| i <= max)
                }
                None => false,
            },
            PropertyKind::Number => value.is_number(),
            PropertyKind::String => value.is_string(),
            PropertyKind::Selector(options) => value
                .as_str()
                .is_some_and(|s| options.iter().any(|option| *option == s)),
            PropertyKind::Object => value.is_object(),
            PropertyKind::Array => value.is_array(),
        };

        if valid {
            Ok(())
        } else {
            Err(format!(
                "expected {}, got {}",
                self.kind_name(),
                describe_value(value)
            ))
        }
    }

    /// Human-readable name of the accepted type
    pub fn kind_name(&self) -> String {
        match self.kind {
            PropertyKind::Any => "any".to_string(),
            PropertyKind::Bool => "boolean".to_string(),
            PropertyKind::Int { min, max } => match (min, max) {
                (Some(min), Some(max)) => format!("integer in {}..={}", min, max),
                (Some(min), None) => format!("integer >= {}", min),
                (None, Some(max)) => format!("integer <= {}", max),
                (None, None) => "integer".to_string(),
            },
            PropertyKind::Number => "number".to_string(),
            PropertyKind::String => "string".to_string(),
            PropertyKind::Selector(options) => format!("one of {}", options.join("|")),
            PropertyKind::Object => "object".to_string(),
            PropertyKind::Array => "array".to_string(),
        }
    }

    pub fn descriptor(&self, default: Value) -> PropertyDescriptor {
        PropertyDescriptor {
            name: self.name.to_string(),
            kind: self.kind_name(),
            default,
        }
    }
}

fn describe_value(value: &Value) -> String {
    match value {
        Value::Number(n) => format!("number {}", n),
        Value::String(s) => format!("string {:?}", s),
        other => json_type_name(other).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const POLICIES: &[&str] = &["mouseup", "continuous", "throttle"];

    #[test]
    fn test_default_values() {
        assert_eq!(DefaultValue::Null.to_value(), Value::Null);
        assert_eq!(DefaultValue::Bool(true).to_value(), json!(true));
        assert_eq!(DefaultValue::Int(200).to_value(), json!(200));
        assert_eq!(DefaultValue::Number(0.5).to_value(), json!(0.5));
        assert_eq!(DefaultValue::Str("chrome").to_value(), json!("chrome"));
        assert_eq!(DefaultValue::EmptyObject.to_value(), json!({}));
        assert_eq!(DefaultValue::EmptyArray.to_value(), json!([]));
    }

    #[test]
    fn test_check_bool() {
        let spec = PropertySpec::boolean("paused", true);

        assert!(spec.check(&json!(false)).is_ok());
        assert_eq!(
            spec.check(&json!("yes")).unwrap_err(),
            "expected boolean, got string \"yes\""
        );
        assert_eq!(
            spec.check(&Value::Null).unwrap_err(),
            "expected boolean, got null"
        );
    }

    #[test]
    fn test_check_bounded_int() {
        let spec = PropertySpec::int("viewport_update_throttle", 200).bounded(Some(0), None);

        assert!(spec.check(&json!(0)).is_ok());
        assert!(spec.check(&json!(1000)).is_ok());
        assert_eq!(
            spec.check(&json!(-1)).unwrap_err(),
            "expected integer >= 0, got number -1"
        );
        assert!(spec.check(&json!(1.5)).is_err());
        assert!(spec.check(&json!("200")).is_err());
    }

    #[test]
    fn test_check_int_range() {
        let spec = PropertySpec::optional_int("volume").bounded(Some(0), Some(100));

        assert!(spec.check(&json!(50)).is_ok());
        assert!(spec.check(&Value::Null).is_ok());
        assert!(spec.check(&json!(101)).is_err());
        assert_eq!(spec.kind_name(), "integer in 0..=100");
    }

    #[test]
    fn test_bounded_ignores_non_integers() {
        let spec = PropertySpec::string("text", "").bounded(Some(0), Some(1));
        assert_eq!(spec.kind, PropertyKind::String);
    }

    #[test]
    fn test_check_selector() {
        let spec = PropertySpec::selector("viewport_update_policy", POLICIES, "mouseup");

        assert!(spec.check(&json!("throttle")).is_ok());
        assert_eq!(
            spec.check(&json!("sometimes")).unwrap_err(),
            "expected one of mouseup|continuous|throttle, got string \"sometimes\""
        );
        assert!(spec.check(&json!(1)).is_err());
        assert!(spec.check(&Value::Null).is_err());

        let optional = PropertySpec::optional_selector("theme", POLICIES);
        assert!(optional.check(&Value::Null).is_ok());
    }

    #[test]
    fn test_check_containers() {
        let object = PropertySpec::object("layout");
        assert!(object.check(&json!({"title": "x"})).is_ok());
        assert!(object.check(&json!([])).is_err());

        let array = PropertySpec::array("data");
        assert!(array.check(&json!([{"x": [1, 2]}])).is_ok());
        assert!(array.check(&json!({})).is_err());

        let optional = PropertySpec::optional_object("click_data");
        assert!(optional.check(&Value::Null).is_ok());
    }

    #[test]
    fn test_check_any() {
        let spec = PropertySpec::any("value");

        assert!(spec.check(&Value::Null).is_ok());
        assert!(spec.check(&json!(1)).is_ok());
        assert!(spec.check(&json!({"nested": true})).is_ok());
    }

    #[test]
    fn test_descriptor() {
        let spec = PropertySpec::number("time", 0.0);
        let descriptor = spec.descriptor(spec.default.to_value());

        assert_eq!(descriptor.name, "time");
        assert_eq!(descriptor.kind, "number");
        assert_eq!(descriptor.default, json!(0.0));
    }
}
