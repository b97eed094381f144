//! Cliptag - mock CLIP-style image tagging server.
//!
//! Serves `POST /classify` with randomly sampled tags and fake scores, and
//! `GET /` as a liveness message.
//!
//! # Usage
//!
//! ```bash
//! # Start the server on 0.0.0.0:8001 with ./tags.json
//! cliptag
//!
//! # Override the listener and tag file
//! cliptag serve --port 9000 --tags /srv/tags.json
//!
//! # View configuration
//! cliptag config show
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cli;
mod logging;
mod server;

/// Cliptag - mock CLIP-style image tagging server.
#[derive(Parser, Debug)]
#[command(name = "cliptag")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP server (default)
    Serve(cli::serve::ServeArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A bad config file is fatal; logging isn't up yet, so anyhow reports it.
    let config = cli::load_config(cli.config.as_deref())?;
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Cliptag v{}", cliptag_core::VERSION);

    match cli.command {
        Some(Commands::Serve(args)) => cli::serve::execute(config, args).await,
        Some(Commands::Config(args)) => cli::config::execute(config, cli.config, args).await,
        None => cli::serve::execute(config, cli::serve::ServeArgs::default()).await,
    }
}
