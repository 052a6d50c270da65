//! MakanList HTTP Server Binary
//!
//! Loads the site configuration, builds the catalog repository and serves the
//! storefront until Ctrl+C or SIGTERM.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin makanlist-server
//! ```
//!
//! # Environment Variables
//!
//! - `MAKANLIST_CONFIG`: Path to a `makanlist.toml` (default: searched in standard locations)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log filter (default: info)

use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use makanlist::config::SiteConfig;
use makanlist::db::RepositoryFactory;
use makanlist::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting MakanList HTTP Server");

    let config = SiteConfig::from_default_location()?.apply_env()?;
    let repository = RepositoryFactory::from_config(&config)?;
    info!("Catalog repository initialized");

    let state = AppState::new(repository);
    let app = create_router(state);

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
