//! Create command - instantiates a single model

use std::path::Path;
use std::sync::Arc;

use clap::Args;

use crate::domain::host::CreateModelMessage;
use crate::domain::model::ModelConfig;
use crate::infrastructure::host::ModelHost;
use crate::infrastructure::registry::SharedModelRegistry;

#[derive(Args)]
pub struct CreateArgs {
    /// Registered model name, matched exactly
    pub name: String,

    /// Model properties as a JSON object
    #[arg(long, value_name = "JSON")]
    pub config: Option<String>,
}

pub async fn run(models: Option<&Path>, args: CreateArgs) -> anyhow::Result<()> {
    let (_, registry) = super::bootstrap(models)?;

    let config = match args.config.as_deref() {
        Some(raw) => ModelConfig::try_from(serde_json::from_str::<serde_json::Value>(raw)?)?,
        None => ModelConfig::new(),
    };

    let host = ModelHost::new(Arc::new(SharedModelRegistry::new(registry)));
    let model = host.instantiate(CreateModelMessage::new(args.name).with_config(config))?;

    println!("{}", serde_json::to_string_pretty(&model.to_json())?);

    Ok(())
}
