use clap::Parser;
use petstore::api::router::router;
use petstore::config::Config;
use petstore::store::memory::PetStore;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = Config::parse();
    let listen_addr = config.listen_addr()?;

    // 1. Store:
    let store = Arc::new(PetStore::new());
    tracing::info!("Pet store ready, next id {}", store.next_id());

    // 2. HTTP Router:
    let app = router(store);

    // 3. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received, exiting...");
}
