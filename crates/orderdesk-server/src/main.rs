//! Web host for the orderdesk dashboard
#![forbid(unsafe_code)]

use orderdesk_core::{Config, init_logging};
use orderdesk_server::build_app;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // Logging level comes from the configuration, so it is set up second
    init_logging(&config.logging)?;
    if let Some(e) = load_error {
        warn!("Failed to load config: {}, using defaults", e);
    }

    info!("╔══════════════════════════════════════════════════════════╗");
    info!(
        "║            Orderdesk Web Host v{}                     ║",
        env!("CARGO_PKG_VERSION")
    );
    info!("╚══════════════════════════════════════════════════════════╝");

    let app = build_app(config.clone())?;

    let host: IpAddr = config
        .server
        .host
        .parse()
        .map_err(|e| format!("Invalid web server host '{}': {}", config.server.host, e))?;
    let addr = SocketAddr::new(host, config.server.port);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind to {addr}: {e}"))?;

    info!("🌐 Dashboard: http://{}", addr);
    info!("🔁 Upstream:  {}", config.upstream.base_url);
    info!("📁 Bundle:    {}", config.server.static_dir.display());

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutdown complete");
    Ok(())
}

/// Handle graceful shutdown signals
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received terminate signal, shutting down gracefully...");
        },
    }
}
