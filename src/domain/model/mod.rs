//! Model domain - widget model names, factories and instances

mod entity;
mod error;
mod factory;
mod validation;

pub(crate) use entity::json_type_name;
pub use entity::{Model, ModelConfig, ModelEntry, ModelName};
pub use error::ModelError;
#[cfg(test)]
pub use factory::MockModelFactory;
pub use factory::{ModelDescriptor, ModelFactory, PropertyDescriptor};
pub use validation::{validate_model_name, ModelNameError, MAX_MODEL_NAME_LENGTH};
