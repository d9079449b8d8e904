//! CLI module for the widget model registry
//!
//! Provides subcommands to inspect the registry and instantiate models:
//! - `list`: registered model names in registration order
//! - `resolve`: describe the model registered under a name
//! - `create`: instantiate a model from a JSON config
//! - `serve-stdio`: answer newline delimited JSON requests on stdin

pub mod create;
pub mod list;
pub mod resolve;
pub mod serve_stdio;

use std::path::{Path, PathBuf};

use anyhow::anyhow;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging::{self, LoggingConfig};
use crate::infrastructure::registry::{ModelRegistry, RegistryConfig};

/// Widget Model Registry - resolve and instantiate widget models by name
#[derive(Parser)]
#[command(name = "widget-model-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Registry configuration file (overrides `registry.path`)
    #[arg(long, global = true, value_name = "PATH")]
    pub models: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List registered model names
    List(list::ListArgs),

    /// Describe the model registered under a name
    Resolve(resolve::ResolveArgs),

    /// Instantiate a model and print it as JSON
    Create(create::CreateArgs),

    /// Serve instantiation requests over stdin/stdout
    ServeStdio,
}

/// Load configuration, initialize logging and build the registry
pub(crate) fn bootstrap(models: Option<&Path>) -> anyhow::Result<(AppConfig, ModelRegistry)> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&LoggingConfig::from(&config.logging));

    let registry_config = match models {
        Some(path) => RegistryConfig::from_file(path)?,
        None => RegistryConfig::load_or_default(&config.registry.path),
    };

    let registry = crate::create_registry(&registry_config).map_err(|errors| {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        anyhow!("Failed to build model registry: {}", details.join("; "))
    })?;

    Ok((config, registry))
}
