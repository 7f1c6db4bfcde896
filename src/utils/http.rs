use rand::Rng;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, DNT, UPGRADE_INSECURE_REQUESTS,
};
use reqwest::{redirect, Client, ClientBuilder, StatusCode};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::HttpConfig;
use crate::error::FetchError;

/// Statuses the target site answers with when it decides we are a bot
const BLOCK_STATUSES: [StatusCode; 3] = [
    StatusCode::FORBIDDEN,
    StatusCode::TOO_MANY_REQUESTS,
    StatusCode::SERVICE_UNAVAILABLE,
];

/// Build the shared client: browser-like headers, cookie jar, bounded timeout and redirects.
///
/// Content-Encoding is negotiated by reqwest itself so compressed bodies are decoded.
pub fn create_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    ClientBuilder::new()
        .user_agent(config.user_agent.as_str())
        .default_headers(browser_headers())
        .timeout(Duration::from_secs(config.timeout_secs))
        .redirect(redirect::Policy::limited(config.max_redirects))
        .cookie_store(true)
        .build()
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8",
        ),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(DNT, HeaderValue::from_static("1"));
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    headers.insert(HeaderName::from_static("sec-fetch-dest"), HeaderValue::from_static("document"));
    headers.insert(HeaderName::from_static("sec-fetch-mode"), HeaderValue::from_static("navigate"));
    headers.insert(HeaderName::from_static("sec-fetch-site"), HeaderValue::from_static("none"));
    headers.insert(HeaderName::from_static("sec-fetch-user"), HeaderValue::from_static("?1"));
    headers
}

/// Sleep for a random duration in `[min_ms, max_ms]`. A zero upper bound disables the delay.
pub async fn random_delay(min_ms: u64, max_ms: u64) {
    if max_ms == 0 {
        return;
    }

    let (low, high) = if min_ms <= max_ms { (min_ms, max_ms) } else { (max_ms, min_ms) };
    let millis = rand::thread_rng().gen_range(low..=high);
    debug!("Waiting {}ms before request", millis);
    sleep(Duration::from_millis(millis)).await;
}

/// Single GET, no retries. Returns the body text of a 2xx response.
pub async fn fetch_html(client: &Client, url: &str, timeout: Duration) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(e, timeout))?;

    let status = response.status();
    if !status.is_success() {
        warn!("HTTP error {}: {}", status, url);
        return Err(if BLOCK_STATUSES.contains(&status) {
            FetchError::Blocked { status: status.as_u16() }
        } else {
            FetchError::Status { status: status.as_u16() }
        });
    }

    response.text().await.map_err(|e| classify_error(e, timeout))
}

fn classify_error(error: reqwest::Error, timeout: Duration) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout(timeout)
    } else {
        FetchError::Transport(error)
    }
}
