use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

mod error;
mod routes;

pub use error::ApiError;

use crate::error::FetchError;
use crate::models::ProductRecord;
use crate::scrapers::placeholder::placeholder_products;
use crate::scrapers::ProductSearch;

pub struct AppState {
    pub scraper: Arc<dyn ProductSearch>,
    pub fallback_on_block: bool,
}

impl AppState {
    pub fn new(scraper: Arc<dyn ProductSearch>, fallback_on_block: bool) -> Self {
        Self {
            scraper,
            fallback_on_block,
        }
    }

    /// Run a search, substituting placeholder products for a blocked fetch when enabled
    pub async fn search(&self, keyword: &str) -> Result<Vec<ProductRecord>, FetchError> {
        match self.scraper.search(keyword).await {
            Err(e) if e.is_blocked() && self.fallback_on_block => {
                warn!("{}; serving placeholder products for {:?}", e, keyword);
                Ok(placeholder_products(keyword))
            }
            result => result,
        }
    }
}

pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/api/scrape", get(routes::scrape))
        .route("/app", get(routes::app_page))
        .route("/placeholder-image.svg", get(routes::placeholder_image))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
