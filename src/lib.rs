//! Widget Model Registry
//!
//! Maps string model names to widget model implementations so that a
//! backend can request models by name and have them instantiated:
//! - Validated, unique model names with insertion ordered listing
//! - A frozen registry for startup registration and a shared registry for hot-loading
//! - Builtin widget models configurable via TOML
//! - A line oriented JSON host that instantiates models on request

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{
    CreateModelMessage, HostError, HostReply, Model, ModelConfig, ModelError, ModelFactory,
    ModelName, RegistryError,
};
pub use infrastructure::host::ModelHost;
pub use infrastructure::registry::{
    ModelRegistry, RegistryBuilder, RegistryConfig, SharedModelRegistry,
};

use infrastructure::widgets::register_builtin_models_with_config;
use tracing::info;

/// Create a registry holding the builtin widget models
pub fn create_default_registry() -> Result<ModelRegistry, Vec<RegistryError>> {
    create_registry(&RegistryConfig::default())
}

/// Create a registry holding the builtin widget models enabled by `config`
pub fn create_registry(config: &RegistryConfig) -> Result<ModelRegistry, Vec<RegistryError>> {
    let disabled = config.disabled_models();
    if !disabled.is_empty() {
        info!(models = ?disabled, "Builtin models disabled by configuration");
    }

    let mut builder = RegistryBuilder::new();
    register_builtin_models_with_config(&mut builder, config)?;

    Ok(builder.build())
}
