use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use clientbook_server::{logging, ClientbookServer};
use clientbook_store::InMemoryClientStore;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = cli
        .resolve()
        .context("unable to initialize configuration")?;
    logging::init(&config.log.level).context("unable to initialize logging")?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %config.server.bind_addr(),
        log_level = %config.log.level,
        "starting clientbook"
    );

    let store = Arc::new(InMemoryClientStore::new());
    let server = ClientbookServer::new(config.server, store);
    server.serve().await.context("error when serving")?;
    Ok(())
}
