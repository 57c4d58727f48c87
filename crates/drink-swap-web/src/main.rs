//! drink-swap web server
//!
//! Configuration comes from the environment (optionally a `.env` file);
//! see `config.rs` for the variables.

use anyhow::Context;
use drink_swap_web::{build_router, AppState, Pages, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "drink_swap=debug,drink_swap_web=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env().context("Invalid server configuration")?;

    if let Ok(cwd) = std::env::current_dir() {
        tracing::info!("Current working directory: {}", cwd.display());
    }
    tracing::info!(
        catalog = %config.catalog_path.display(),
        cached = config.cache_catalog,
        algorithm = %config.algorithm,
        threshold = config.threshold,
        "Drink catalog settings"
    );
    if !config.catalog_path.exists() {
        tracing::warn!(
            "Catalog file {} does not exist yet; lookups will report a database error",
            config.catalog_path.display()
        );
    }

    let pages = Pages::new().context("Failed to compile page templates")?;
    let state = AppState::new(config.build_service(), pages);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    tracing::info!("drink-swap listening on http://{}", config.bind_addr);
    tracing::info!("  GET  /             - search page");
    tracing::info!("  POST /api/lookup   - JSON lookup");
    tracing::info!("  GET  /suggestions  - autocomplete");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
