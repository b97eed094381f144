//! The `cliptag serve` command.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use cliptag_core::{Classifier, Config};

use crate::server;

/// Arguments for the `serve` command. Unset flags keep the config values.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Interface to bind (default: 0.0.0.0)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (default: 8001)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Tag file (default: tags.json next to the executable)
    #[arg(long)]
    pub tags: Option<PathBuf>,
}

impl ServeArgs {
    /// Apply CLI overrides on top of the loaded config.
    pub fn apply(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(tags) = self.tags {
            config.catalog.path = tags;
        }
    }
}

/// Execute the serve command.
pub async fn execute(mut config: Config, args: ServeArgs) -> anyhow::Result<()> {
    args.apply(&mut config);
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid serve options: {e}"))?;

    let catalog_path = config.catalog_path();
    let classifier = Classifier::from_config(&config).map_err(|e| {
        anyhow::anyhow!(
            "{e}\n\n  Hint: the server needs a tag file at {}. Use --tags to point at another one.",
            catalog_path.display()
        )
    })?;
    tracing::info!(
        "Classifier ready: {} tags, {} scorer",
        classifier.catalog().len(),
        classifier.scorer_name()
    );

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {addr}: {e}"))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    server::run(listener, Arc::new(classifier), config.server.max_body_bytes).await?;
    tracing::info!("Server stopped");
    Ok(())
}
