//! Campaign tracker HTTP server.
//!
//! Reads configuration from the environment (and `.env`), creates the database and tables if
//! needed, seeds one campaign into an empty store, then serves until Ctrl-C.

use dnd_companion::{app, ensure_database_exists, AppState, ServerConfig, Store};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("dnd_companion=debug,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    ensure_database_exists(&config.database_url).await?;
    let store = Store::connect(&config).await?;
    store.initialize().await?;

    let bind_address = config.bind_address();
    let state = AppState::new(store.clone(), config);
    let app = app(state);

    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    store.pool().close().await;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
