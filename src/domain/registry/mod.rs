//! Registry domain - errors raised while assembling or querying a model registry

mod error;

pub use error::RegistryError;
