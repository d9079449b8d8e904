//! Registry Infrastructure
//!
//! - `RegistryBuilder` / `ModelRegistry` for startup registration and frozen reads
//! - `SharedModelRegistry` for registration while a session is running
//! - Configuration via TOML files

pub mod config;
pub mod model_registry;
pub mod shared;

pub use config::{ModelEntryConfig, RegistryConfig, RegistryConfigError, RegistrySettings};
pub use model_registry::{ModelNames, ModelRegistry, RegistryBuilder};
pub use shared::SharedModelRegistry;
