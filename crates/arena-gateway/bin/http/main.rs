mod cli;

use crate::cli::{StorageBackendArg, CLI};
use anyhow::Context;
use arena_core::FighterStore;
use arena_gateway::{telemetry, App, AppState};
use arena_roster::RosterService;
use arena_storage::{InMemoryStore, MySqlStore};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    telemetry::init(config.log_format)?;

    info!(
        pid = std::process::id(),
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        "starting arena gateway"
    );

    match config.storage {
        StorageBackendArg::InMemory => {
            run_server(config.listen_addr, Arc::new(InMemoryStore::new())).await?;
        }
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .context("mysql dsn is required when storage backend is mysql")?;
            let store = Arc::new(
                MySqlStore::connect(&mysql_dsn, config.mysql_max_connections)
                    .await
                    .context("failed to connect to mysql")?,
            );
            if config.init_schema {
                store
                    .ensure_schema()
                    .await
                    .context("failed to create fighters schema")?;
            }

            let served = run_server(config.listen_addr, Arc::clone(&store)).await;
            store.close().await;
            served?;
        }
    }

    info!("arena gateway stopped");
    Ok(())
}

async fn run_server<S: FighterStore>(
    listen_addr: SocketAddr,
    store: Arc<S>,
) -> anyhow::Result<()> {
    let repository = RosterService::builder().store(store).build();
    let router = App::router(AppState::new(Arc::new(repository)));

    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;
    info!(listen_addr = %listener.local_addr()?, "listening for http requests");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => {
            warn!(error = %err, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
