//! Ledger UI - invoice dashboard service entry point
//!
//! Resolves the backing store once at startup, prepares the schema, and
//! serves the dashboard API. Connection resolution failure is fatal: the
//! process exits rather than serving mutations without a resolved store.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use ledger_common::config::DatabaseConfig;
use ledger_common::db;
use ledger_ui::{build_router, AppState};
use tokio::signal;
use tracing::{error, info};

/// Command-line arguments for ledger-ui
#[derive(Parser, Debug)]
#[command(name = "ledger-ui")]
#[command(about = "Invoice dashboard service for Ledger")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5750", env = "LEDGER_UI_PORT")]
    port: u16,

    /// Load placeholder data after schema setup
    #[arg(long)]
    seed: bool,

    /// Require a session cookie on dashboard routes
    #[arg(long, env = "LEDGER_REQUIRE_AUTH")]
    require_auth: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!(
        "Starting Ledger UI (ledger-ui) v{} on port {}",
        env!("CARGO_PKG_VERSION"),
        args.port
    );

    // Both candidate connection strings must be present and well-formed
    let config = DatabaseConfig::from_env().context("Failed to load database configuration")?;

    // Resolve which backing store serves this process; fatal on failure
    let db = match db::resolve_connection(&config).await {
        Ok(db) => {
            info!("✓ Resolved {} database connection", db.selected().as_str());
            db
        }
        Err(e) => {
            error!("Database connection resolution failed: {}", e);
            return Err(e.into());
        }
    };

    db::init_schema(db.pool())
        .await
        .context("Failed to initialize database schema")?;

    if args.seed {
        db::seed_database(db.pool())
            .await
            .context("Failed to seed database")?;
        info!("✓ Placeholder data loaded");
    }

    // Create application state and router; the resolved handle is injected
    // here and never read through a global by the handlers
    let state = AppState::new(db, args.require_auth);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("ledger-ui listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
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
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
