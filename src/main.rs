use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use search_scraper::config::Config;
use search_scraper::scrapers::AmazonScraper;
use search_scraper::server::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::from_default_env().add_directive("search_scraper=info".parse()?);
    if std::env::var("LOG_FORMAT").map(|f| f == "json").unwrap_or(false) {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!("Starting Search Scraper");

    // Load configuration
    let config = Config::load()?;

    // Shared HTTP client lives inside the scraper
    let scraper = AmazonScraper::new(&config)?;
    let state = Arc::new(AppState::new(Arc::new(scraper), config.fallback_on_block));

    if config.fallback_on_block {
        info!("Placeholder fallback enabled for blocked requests");
    }

    let app = create_app(state);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
