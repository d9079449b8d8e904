//! Resolve command - describes the model registered under a name

use std::path::Path;

use clap::Args;

#[derive(Args)]
pub struct ResolveArgs {
    /// Registered model name, matched exactly
    pub name: String,
}

pub async fn run(models: Option<&Path>, args: ResolveArgs) -> anyhow::Result<()> {
    let (_, registry) = super::bootstrap(models)?;

    let factory = registry.resolve(&args.name)?;
    println!("{}", serde_json::to_string_pretty(&factory.describe())?);

    Ok(())
}
