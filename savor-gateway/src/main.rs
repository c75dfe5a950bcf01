//! Entry point for the `savor-gateway` HTTP server.

use std::sync::Arc;

use savor_gateway::routes::create_router;
use savor_store::MemoryStore;
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let addr = std::env::var("SAVOR_LISTEN_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_owned());

    let store = Arc::new(MemoryStore::new());
    let app = create_router(store);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %addr, "savor-gateway listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
