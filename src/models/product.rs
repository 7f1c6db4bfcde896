use serde::{Deserialize, Serialize};

/// One search result card, as served by `/api/scrape`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub title: String,
    pub rating: Option<f32>,
    pub review_count: u64,
    pub image_url: String,
    pub product_url: String,
}
