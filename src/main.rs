//! Blogstore server
//!
//! Blog post management service persisting its collection as a single JSON
//! document, exposed over HTTP.

use std::sync::Arc;

use axum::http::HeaderValue;
use clap::{Arg, ArgAction, Command};
use tokio::signal;
use tracing::{info, warn};

use blogstore::api::start_server;
use blogstore::core::config::Config;
use blogstore::service::BlogService;
use blogstore::storage::FileStore;
use blogstore::{Error, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let matches = Command::new("blogstore")
        .version(blogstore::VERSION)
        .about("Blog post management service backed by a single JSON document.")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path"),
        )
        .arg(
            Arg::new("http-addr")
                .long("http-addr")
                .value_name("ADDR")
                .help("HTTP server bind address"),
        )
        .arg(
            Arg::new("data-file")
                .long("data-file")
                .value_name("PATH")
                .help("Backing JSON document path"),
        )
        .arg(
            Arg::new("cors-origin")
                .long("cors-origin")
                .value_name("ORIGIN")
                .help("Allowed CORS origin (default: any origin)"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level (trace, debug, info, warn, error)"),
        )
        .arg(
            Arg::new("init-store")
                .long("init-store")
                .action(ArgAction::SetTrue)
                .help("Create an empty backing document if missing, then exit"),
        )
        .get_matches();

    // Load configuration
    let mut config = if let Some(config_path) = matches.get_one::<String>("config") {
        Config::from_file(config_path)?
    } else {
        Config::load()?
    };

    // Apply CLI overrides
    apply_cli_overrides(&mut config, &matches)?;
    config.validate()?;

    // Initialize logging
    blogstore::init(&config.logging)?;
    info!("Starting blogstore v{}", blogstore::VERSION);

    let store = Arc::new(FileStore::new(&config.storage));

    // Explicit store bootstrap; mutations never create the document implicitly
    if matches.get_flag("init-store") {
        store.initialize().await?;
        info!(
            "Backing document ready at {}",
            config.storage.data_file.display()
        );
        return Ok(());
    }

    let cors_origin = parse_cors_origin(&config)?;
    let service = Arc::new(BlogService::new(store));

    start_server(
        config.server.http_addr,
        service,
        cors_origin,
        shutdown_signal(),
    )
    .await?;

    info!("Shutdown complete");
    Ok(())
}

/// Apply command line argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, matches: &clap::ArgMatches) -> Result<()> {
    if let Some(addr) = matches.get_one::<String>("http-addr") {
        config.server.http_addr = addr
            .parse()
            .map_err(|e| Error::config(format!("Invalid HTTP address: {}", e)))?;
    }

    if let Some(path) = matches.get_one::<String>("data-file") {
        config.storage.data_file = path.into();
    }

    if let Some(origin) = matches.get_one::<String>("cors-origin") {
        config.server.cors_origin = Some(origin.clone());
    }

    if let Some(level) = matches.get_one::<String>("log-level") {
        config.logging.level = level.clone();
    }

    Ok(())
}

/// Parse the configured CORS origin into a header value
fn parse_cors_origin(config: &Config) -> Result<Option<HeaderValue>> {
    match &config.server.cors_origin {
        Some(origin) => origin
            .parse()
            .map(Some)
            .map_err(|e| Error::config(format!("Invalid CORS origin {:?}: {}", origin, e))),
        None => Ok(None),
    }
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }

    warn!("Received shutdown signal, initiating graceful shutdown...");
}
