use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::error;

use super::{ApiError, AppState};
use crate::models::ProductRecord;
use crate::render::{SearchView, MIN_KEYWORD_LEN, PLACEHOLDER_IMAGE_SVG};

#[derive(Debug, Deserialize)]
pub struct KeywordQuery {
    keyword: Option<String>,
}

impl KeywordQuery {
    fn keyword(&self) -> Option<&str> {
        self.keyword
            .as_deref()
            .map(str::trim)
            .filter(|keyword| !keyword.is_empty())
    }
}

pub async fn index() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            {
                "method": "GET",
                "path": "/api/scrape?keyword=<keyword>",
                "description": "Scrape the first search results page for a keyword",
            },
            {
                "method": "GET",
                "path": "/app",
                "description": "Search page rendering results as product cards",
            },
        ],
    }))
}

pub async fn scrape(
    State(state): State<Arc<AppState>>,
    query: Result<Query<KeywordQuery>, QueryRejection>,
) -> Result<Json<Vec<ProductRecord>>, ApiError> {
    let Query(query) = query?;
    let keyword = query.keyword().ok_or(ApiError::MissingKeyword)?;

    match state.search(keyword).await {
        Ok(products) => Ok(Json(products)),
        Err(e) => {
            error!("Scraping error for {:?}: {}", keyword, e);
            Err(ApiError::Scrape(e))
        }
    }
}

pub async fn app_page(
    State(state): State<Arc<AppState>>,
    query: Result<Query<KeywordQuery>, QueryRejection>,
) -> Html<String> {
    let Ok(Query(query)) = query else {
        return Html(SearchView::invalid("", "Please enter a single keyword.").render());
    };

    let view = match (query.keyword.is_some(), query.keyword()) {
        (false, _) => SearchView::idle(),
        (true, None) => SearchView::invalid("", "Please enter a keyword to search."),
        (true, Some(keyword)) if keyword.chars().count() < MIN_KEYWORD_LEN => SearchView::invalid(
            keyword,
            &format!("The keyword must be at least {} characters long.", MIN_KEYWORD_LEN),
        ),
        (true, Some(keyword)) => match state.search(keyword).await {
            Ok(products) => SearchView::results(keyword, products),
            Err(e) => {
                error!("Scraping error for {:?}: {}", keyword, e);
                SearchView::failed(keyword, &e.to_string())
            }
        },
    };

    Html(view.render())
}

pub async fn placeholder_image() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], PLACEHOLDER_IMAGE_SVG)
}
