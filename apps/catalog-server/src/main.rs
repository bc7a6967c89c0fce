//! Catalog server: hosts the catalog service REST API
//!
//! Usage:
//!   catalog-server                        - Start with defaults and environment
//!   catalog-server --config catalog.yaml  - Start with a YAML configuration file
//!   catalog-server --print-config         - Print the effective configuration

mod config;
mod logging;

use anyhow::Context;
use axum::Router;
use catalog_service::CatalogServiceModule;
use clap::Parser;
use config::AppConfig;
use sea_orm::{ConnectOptions, Database};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Parser)]
#[command(name = "catalog-server")]
#[command(about = "Catalog Server - partners and shop products REST API")]
#[command(version)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port; overrides configuration and PORT
    #[arg(short, long)]
    port: Option<u16>,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    if cli.print_config {
        print!("{}", serde_yaml::to_string(&config)?);
        return Ok(());
    }

    logging::init(&config.logging)?;

    if let Err(e) = run(config).await {
        let error = format!("{e:#}");
        tracing::error!(%error, "Catalog server stopped with an error");
        return Err(e);
    }
    Ok(())
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    let mut options = ConnectOptions::new(config.database.url.clone());
    options
        .max_connections(config.database.max_connections)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .context("failed to connect to database")?;
    CatalogServiceModule::migrate(&db)
        .await
        .context("failed to run catalog migrations")?;

    // Pool handle kept for closing after shutdown
    let pool = db.clone();
    let module = CatalogServiceModule::init(config.catalog.clone(), Arc::new(db))
        .context("failed to initialize catalog service")?;

    let app = module
        .register_rest(Router::new())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let host = config.server.host.as_str();
    let port = config.server.port;
    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;
    tracing::info!(addr = %listener.local_addr()?, "Catalog server listening");

    let cancel = CancellationToken::new();
    tokio::spawn(watch_shutdown_signals(cancel.clone()));

    axum::serve(listener, app)
        .with_graceful_shutdown(cancel.cancelled_owned())
        .await
        .context("HTTP server failed")?;

    pool.close().await.context("failed to close database pool")?;
    tracing::info!("Catalog server stopped");
    Ok(())
}

/// Cancel `cancel` on Ctrl+C or SIGTERM
async fn watch_shutdown_signals(cancel: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Shutdown signal received");
    cancel.cancel();
}
