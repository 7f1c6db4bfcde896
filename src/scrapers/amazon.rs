use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Client;
use std::time::Duration;
use tracing::info;
use url::Url;

use crate::config::{Config, HttpConfig, TargetConfig};
use crate::error::FetchError;
use crate::models::ProductRecord;
use crate::scrapers::extract::extract_products;
use crate::scrapers::ProductSearch;
use crate::utils::http::{create_client, fetch_html, random_delay};

/// Characters `encodeURIComponent` leaves alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build the first results page URL for `keyword`
pub fn search_url(target: &TargetConfig, keyword: &str) -> Result<String, FetchError> {
    let url = format!(
        "{}{}?k={}&ref={}",
        target.origin.trim_end_matches('/'),
        target.search_path,
        utf8_percent_encode(keyword, URI_COMPONENT),
        utf8_percent_encode(&target.ref_tag, URI_COMPONENT),
    );
    Url::parse(&url)?;
    Ok(url)
}

pub struct AmazonScraper {
    client: Client,
    target: TargetConfig,
    http: HttpConfig,
}

impl AmazonScraper {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: create_client(&config.http)?,
            target: config.target.clone(),
            http: config.http.clone(),
        })
    }

    pub async fn fetch_search_page(&self, keyword: &str) -> Result<String, FetchError> {
        let url = search_url(&self.target, keyword)?;
        random_delay(self.http.delay_min_ms, self.http.delay_max_ms).await;

        info!("Fetching search results: {}", url);
        fetch_html(&self.client, &url, Duration::from_secs(self.http.timeout_secs)).await
    }
}

#[async_trait]
impl ProductSearch for AmazonScraper {
    async fn search(&self, keyword: &str) -> Result<Vec<ProductRecord>, FetchError> {
        let html = self.fetch_search_page(keyword).await?;
        let products = extract_products(&html, &self.target.origin);
        info!("Found {} products for {:?}", products.len(), keyword);
        Ok(products)
    }
}
