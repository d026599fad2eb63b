mod config;
mod movie;
mod routes;
mod server;
mod store;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use config::Config;
use server::Server;
use store::MovieStore;

/// In-memory movie catalog HTTP service
#[derive(Debug, Parser)]
#[command(name = "moviedb", version)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Listening address, overrides the configuration file
    #[arg(long)]
    addr: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(addr) = args.addr {
        config.server_addr = addr;
    }

    // Initialize logging
    init_logging(&config)?;

    info!("Starting MovieDB - in-memory movie catalog");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Create the store and bind the HTTP server over it
    let store = Arc::new(MovieStore::new());
    let server = Server::bind(&config.server_addr, store)
        .await
        .with_context(|| format!("failed to bind {}", config.server_addr))?;
    info!("Server listening on: {}", server.local_addr());

    // Start server (blocking)
    server.run().await?;

    Ok(())
}

/// Initialize logging from config. RUST_LOG takes precedence over the
/// configured level.
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.level));

    match &config.log.file {
        Some(path) => {
            let file = std::fs::File::options()
                .append(true)
                .create(true)
                .open(path)
                .with_context(|| format!("failed to open log file '{}'", path))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }

    Ok(())
}
