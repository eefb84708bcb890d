// Receipt Processor - Web Server
// REST API with Axum

use anyhow::{Context, Result};
use receipt_processor::{build_app, AppState, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = ServerConfig::from_env()?;
    let app = build_app(AppState::default(), &config);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.listen_addr))?;

    tracing::info!(
        addr = %config.listen_addr,
        cors = config.enable_cors,
        max_body_size = config.max_body_size,
        version = receipt_processor::VERSION,
        "receipt server listening"
    );

    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")
}

/// Initialize logging with tracing
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "receipt_processor=info,receipt_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
