//! Minimal server-rendered front end for the scrape API.
//!
//! A [`SearchView`] holds everything one page render needs: the keyword as typed
//! and the outcome of the search. Nothing is kept between requests.

mod card;

pub use card::{format_count, product_card, stars, PLACEHOLDER_IMAGE_PATH};

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::models::ProductRecord;

pub const MIN_KEYWORD_LEN: usize = 2;

pub const PLACEHOLDER_IMAGE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="200" viewBox="0 0 200 200"><rect width="200" height="200" fill="#f0f0f0"/><text x="100" y="105" font-family="sans-serif" font-size="14" fill="#999" text-anchor="middle">No image</text></svg>"##;

const STYLE: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; margin: 0; background: #f5f5f5; color: #222; }
header { background: #232f3e; color: #fff; padding: 1.5rem; text-align: center; }
form { display: flex; gap: .5rem; justify-content: center; margin-top: 1rem; }
input[type=text] { padding: .6rem; width: 20rem; border-radius: 4px; border: 1px solid #ccc; }
button { padding: .6rem 1.2rem; background: #ff9900; border: 0; border-radius: 4px; cursor: pointer; }
.error-message { max-width: 40rem; margin: 1rem auto; padding: 1rem; background: #fdecea; color: #b71c1c; border-radius: 4px; }
.products-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; padding: 1rem; }
.product-card { background: #fff; border-radius: 6px; padding: 1rem; text-decoration: none; color: inherit; }
.product-image { width: 100%; height: 200px; object-fit: contain; }
.product-title { font-size: .95rem; }
.stars { color: #ff9900; }
.review-count { color: #666; font-size: .85rem; }
"#;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Idle,
    Invalid(String),
    Failed(String),
    Results(Vec<ProductRecord>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    pub keyword: String,
    pub outcome: Outcome,
}

impl SearchView {
    pub fn idle() -> Self {
        Self {
            keyword: String::new(),
            outcome: Outcome::Idle,
        }
    }

    pub fn invalid(keyword: &str, message: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            outcome: Outcome::Invalid(message.to_string()),
        }
    }

    pub fn failed(keyword: &str, message: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            outcome: Outcome::Failed(format!("Error fetching products: {}", message)),
        }
    }

    pub fn results(keyword: &str, products: Vec<ProductRecord>) -> Self {
        Self {
            keyword: keyword.to_string(),
            outcome: Outcome::Results(products),
        }
    }

    pub fn render(&self) -> String {
        let body = match &self.outcome {
            Outcome::Idle => String::new(),
            Outcome::Invalid(message) | Outcome::Failed(message) => error_block(message),
            Outcome::Results(products) if products.is_empty() => {
                error_block("No products found for this keyword.")
            }
            Outcome::Results(products) => {
                let cards: String = products.iter().map(product_card).collect();
                format!(
                    r#"<section id="results-container"><h2>{} results for "{}"</h2><div id="products-grid" class="products-grid">{}</div></section>"#,
                    products.len(),
                    encode_text(&self.keyword),
                    cards
                )
            }
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Product Search</title>
<style>{style}</style>
</head>
<body>
<header>
<h1>Product Search</h1>
<form method="get" action="/app">
<input id="keyword-input" type="text" name="keyword" value="{keyword}" placeholder="Type a keyword..." minlength="{min_len}" autofocus>
<button id="search-btn" type="submit">Search</button>
</form>
</header>
<main>
{body}
</main>
</body>
</html>
"#,
            style = STYLE,
            keyword = encode_double_quoted_attribute(&self.keyword),
            min_len = MIN_KEYWORD_LEN,
            body = body,
        )
    }
}

fn error_block(message: &str) -> String {
    format!(
        r#"<div id="error-message" class="error-message">{}</div>"#,
        encode_text(message)
    )
}
