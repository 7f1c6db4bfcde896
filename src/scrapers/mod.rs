use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::ProductRecord;

mod amazon;
pub mod extract;
pub mod placeholder;
pub mod selectors;

pub use amazon::{search_url, AmazonScraper};
pub use extract::{extract_products, selector_report, SelectorReport};

/// Keyword in, product records out. The server only sees this seam.
#[async_trait]
pub trait ProductSearch: Send + Sync {
    async fn search(&self, keyword: &str) -> Result<Vec<ProductRecord>, FetchError>;
}
