use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use search_scraper::error::FetchError;
use search_scraper::models::ProductRecord;
use search_scraper::scrapers::ProductSearch;
use search_scraper::server::{create_app, AppState};

enum Reply {
    Products(Vec<ProductRecord>),
    Blocked,
    Status(u16),
}

struct StubSearch {
    reply: Reply,
    calls: AtomicUsize,
    last_keyword: std::sync::Mutex<Option<String>>,
}

impl StubSearch {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            last_keyword: std::sync::Mutex::new(None),
        })
    }
}

#[async_trait]
impl ProductSearch for StubSearch {
    async fn search(&self, keyword: &str) -> Result<Vec<ProductRecord>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_keyword.lock().unwrap() = Some(keyword.to_string());
        match &self.reply {
            Reply::Products(products) => Ok(products.clone()),
            Reply::Blocked => Err(FetchError::Blocked { status: 503 }),
            Reply::Status(status) => Err(FetchError::Status { status: *status }),
        }
    }
}

fn app(stub: Arc<StubSearch>, fallback_on_block: bool) -> Router {
    create_app(Arc::new(AppState::new(stub, fallback_on_block)))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

fn keyboard() -> ProductRecord {
    ProductRecord {
        title: "Mechanical Keyboard".to_string(),
        rating: Some(4.5),
        review_count: 1234,
        image_url: "https://m.media-amazon.com/images/I/kb.jpg".to_string(),
        product_url: "https://www.amazon.com/dp/B08EXAMPLE1?ref=x".to_string(),
    }
}

#[tokio::test]
async fn missing_keyword_is_rejected_before_searching() {
    let stub = StubSearch::new(Reply::Products(vec![keyboard()]));

    for uri in ["/api/scrape", "/api/scrape?keyword=", "/api/scrape?keyword=%20%20"] {
        let (status, body) = get_json(app(stub.clone(), false), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Keyword parameter is required" }));
    }

    assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn malformed_query_is_a_json_400() {
    let stub = StubSearch::new(Reply::Products(vec![keyboard()]));
    let (status, body) = get_json(app(stub.clone(), false), "/api/scrape?keyword=a&keyword=b").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Invalid query string"));
    assert_eq!(body.as_object().unwrap().len(), 1);
    assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn app_page_handles_malformed_query() {
    let stub = StubSearch::new(Reply::Products(vec![keyboard()]));
    let (status, html) = get(app(stub.clone(), false), "/app?keyword=a&keyword=b").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Please enter a single keyword."));
    assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn returns_records_as_json_array() {
    let stub = StubSearch::new(Reply::Products(vec![keyboard()]));
    let (status, body) = get_json(app(stub.clone(), false), "/api/scrape?keyword=mechanical%20keyboard").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "title": "Mechanical Keyboard",
            "rating": 4.5,
            "reviewCount": 1234,
            "imageUrl": "https://m.media-amazon.com/images/I/kb.jpg",
            "productUrl": "https://www.amazon.com/dp/B08EXAMPLE1?ref=x",
        }])
    );
    assert_eq!(stub.last_keyword.lock().unwrap().as_deref(), Some("mechanical keyboard"));
}

#[tokio::test]
async fn empty_result_is_an_empty_array() {
    let stub = StubSearch::new(Reply::Products(Vec::new()));
    let (status, body) = get_json(app(stub, false), "/api/scrape?keyword=zzzz").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn fetch_failure_is_a_500_with_message() {
    let stub = StubSearch::new(Reply::Status(500));
    let (status, body) = get_json(app(stub, true), "/api/scrape?keyword=desk").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({
            "error": "Failed to scrape Amazon",
            "message": "Unexpected HTTP status 500",
        })
    );
}

#[tokio::test]
async fn blocked_without_fallback_is_a_500() {
    let stub = StubSearch::new(Reply::Blocked);
    let (status, body) = get_json(app(stub, false), "/api/scrape?keyword=desk").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Request blocked by target site (HTTP 503)");
}

#[tokio::test]
async fn blocked_with_fallback_serves_placeholders() {
    let stub = StubSearch::new(Reply::Blocked);
    let (status, body) = get_json(app(stub, true), "/api/scrape?keyword=desk").await;

    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 3);
    assert!(products
        .iter()
        .all(|p| p["title"].as_str().unwrap().starts_with("desk - ")));
}

#[tokio::test]
async fn index_describes_the_api() {
    let stub = StubSearch::new(Reply::Products(Vec::new()));
    let (status, body) = get_json(app(stub, false), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "search-scraper");
    assert!(body["endpoints"]
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e["path"].as_str().unwrap().starts_with("/api/scrape")));
}

#[tokio::test]
async fn app_page_renders_cards() {
    let stub = StubSearch::new(Reply::Products(vec![keyboard()]));
    let (status, html) = get(app(stub, false), "/app?keyword=keyboard").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Mechanical Keyboard"));
    assert!(html.contains("★★★★☆"));
    assert!(html.contains("1,234 reviews"));
}

#[tokio::test]
async fn app_page_validates_keyword_length() {
    let stub = StubSearch::new(Reply::Products(vec![keyboard()]));
    let (status, html) = get(app(stub.clone(), false), "/app?keyword=k").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("at least 2 characters"));
    assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn app_page_without_keyword_is_just_the_form() {
    let stub = StubSearch::new(Reply::Products(vec![keyboard()]));
    let (_, html) = get(app(stub.clone(), false), "/app").await;

    assert!(html.contains("keyword-input"));
    assert!(!html.contains("error-message"));
    assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn app_page_shows_fetch_errors() {
    let stub = StubSearch::new(Reply::Blocked);
    let (_, html) = get(app(stub, false), "/app?keyword=desk").await;

    assert!(html.contains("Error fetching products: Request blocked by target site (HTTP 503)"));
}

#[tokio::test]
async fn placeholder_image_is_svg() {
    let stub = StubSearch::new(Reply::Products(Vec::new()));
    let response = app(stub, false)
        .oneshot(
            Request::builder()
                .uri("/placeholder-image.svg")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "image/svg+xml");
}
