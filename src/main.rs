//! Vehicle catalog service.
//!
//! # Architecture Overview
//!
//! ```text
//!     POST /          ┌─────────┐    ┌──────────┐    ┌─────────────────┐
//!     ───────────────▶│  http   │───▶│ handlers │───▶│ query::evaluate │──┐
//!     GET /search     │ server  │    │          │───▶│ SearchEngine    │──┤
//!                     └─────────┘    └──────────┘    └─────────────────┘  │
//!                                                            ▲            │
//!                                                    ┌───────┴──────┐     │
//!                                                    │   Catalog    │     │
//!                                                    │ (immutable)  │     │
//!                                                    └──────────────┘     │
//!     ◀───────────────────────── JSON result / {success:false} ──────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use car_catalog::catalog::{bundled_catalog, load_catalog};
use car_catalog::config::resolve_config;
use car_catalog::observability::{logging, metrics};
use car_catalog::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "car-catalog")]
#[command(about = "Serve filter and search queries over a vehicle catalog", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Catalog JSON file; overrides `catalog.path` from the config.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = resolve_config(args.config.as_deref())?;
    logging::init_logging(&config.observability)?;

    tracing::info!("car-catalog v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        search_mode = ?config.search.mode,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let catalog_path = args
        .catalog
        .or_else(|| config.catalog.path.as_ref().map(PathBuf::from));
    let catalog = match catalog_path.as_deref() {
        Some(path) => load_catalog(path)?,
        None => bundled_catalog()?,
    };

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, catalog);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
