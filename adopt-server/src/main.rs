use std::sync::Arc;

use adopt_server::{Config, Store, build_router, openapi};
use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adopt_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Adopt Server...");

    let config = Config::from_env().context("Invalid configuration")?;

    let store = if config.seed {
        Store::seeded()
    } else {
        Store::new()
    };

    // Spec files are a convenience; failing to write them is not fatal
    if let Some(dir) = &config.spec_output_dir {
        if let Err(e) = openapi::write_spec_files(dir).await {
            tracing::error!("Error writing OpenAPI spec files: {:#}", e);
        }
    }

    // Build router with all API endpoints
    let app = build_router(Arc::new(store));

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
