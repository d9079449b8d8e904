//! Domain layer - Core types and traits for widget model registration

pub mod host;
pub mod model;
pub mod registry;

pub use host::{CreateModelMessage, HostError, HostErrorKind, HostReply};
pub use model::{
    validate_model_name, Model, ModelConfig, ModelDescriptor, ModelEntry, ModelError,
    ModelFactory, ModelName, ModelNameError, PropertyDescriptor,
};
pub use registry::RegistryError;
