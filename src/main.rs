use clap::Parser;
use widget_model_registry::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let models = cli.models.as_deref();

    match cli.command {
        Command::List(args) => cli::list::run(models, args).await,
        Command::Resolve(args) => cli::resolve::run(models, args).await,
        Command::Create(args) => cli::create::run(models, args).await,
        Command::ServeStdio => cli::serve_stdio::run(models).await,
    }
}
