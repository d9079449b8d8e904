//! List command - prints registered model names

use std::path::Path;

use clap::Args;

#[derive(Args)]
pub struct ListArgs {
    /// Print names and descriptors as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(models: Option<&Path>, args: ListArgs) -> anyhow::Result<()> {
    let (_, registry) = super::bootstrap(models)?;

    if args.json {
        let descriptors: serde_json::Map<String, serde_json::Value> = registry
            .describe_all()
            .into_iter()
            .map(|(name, descriptor)| Ok((String::from(name), serde_json::to_value(descriptor)?)))
            .collect::<Result<_, serde_json::Error>>()?;

        println!("{}", serde_json::to_string_pretty(&descriptors)?);
    } else {
        for name in registry.list() {
            println!("{}", name);
        }
    }

    Ok(())
}
