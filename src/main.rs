// src/main.rs
use dotenvy::dotenv;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::fmt::init as tracing_init;

use storefront::{app, config::Config, database, state::AppState};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();
    let config = Config::from_env();

    // Create database pool
    let db_pool = match database::create_pool(&config) {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!(error = %e, "Invalid database configuration");
            return;
        }
    };

    let app = app(AppState::new(db_pool.clone()));

    let addr = config.listen_addr();
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(%addr, error = %e, "Failed to bind listener");
            return;
        }
    };
    tracing::info!("Server running on {}", addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
    }

    db_pool.close().await;
    tracing::info!("Database pool closed, bye");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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
    tracing::info!("Shutdown signal received");
}
