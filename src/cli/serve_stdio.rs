//! Serve command - answers instantiation requests on stdin/stdout

use std::path::Path;
use std::sync::Arc;

use tokio::io::{self, BufReader};
use tracing::info;

use crate::infrastructure::host::ModelHost;
use crate::infrastructure::registry::SharedModelRegistry;

/// Run the host until stdin is closed
pub async fn run(models: Option<&Path>) -> anyhow::Result<()> {
    let (_, registry) = super::bootstrap(models)?;
    info!(models = registry.len(), "Starting model host on stdio");

    let host = ModelHost::new(Arc::new(SharedModelRegistry::new(registry)));
    let handled = host
        .serve(BufReader::new(io::stdin()), io::stdout())
        .await?;

    info!(requests = handled, "Model host shutdown complete");

    Ok(())
}
