//! Selectors for search result pages.
//!
//! Each field has an ordered chain; the markup differs across experiment cohorts
//! and locales, so expect individual entries to go stale. Add new variants to the
//! front of a chain and keep the old ones as fallbacks.

use once_cell::sync::Lazy;
use scraper::Selector;

pub const CARD: &str = r#"[data-component-type="s-search-result"]"#;

pub const TITLE: &[&str] = &[
    "h2 a span",
    "h2 span",
    r#"[data-cy="title-recipe-title"]"#,
    r#"a[href*="/dp/"] span"#,
];

pub const RATING: &[&str] = &[
    r#"i[class*="a-icon-star"] span.a-offscreen"#,
    "span.a-icon-alt",
    r#"[aria-label*="out of"]"#,
];

pub const REVIEW_COUNT: &[&str] = &[
    "span.a-size-base.s-underline-text",
    r##"a[href*="#customerReviews"] span"##,
    r#"[aria-label*="ratings"]"#,
];

pub const IMAGE: &[&str] = &["img.s-image", "img[data-image-latency]"];

pub const LINK: &[&str] = &["h2 a", r#"a[href*="/dp/"]"#];

pub static CARD_SELECTOR: Lazy<Selector> = Lazy::new(|| compile(CARD));
pub static TITLE_CHAIN: Lazy<Vec<Selector>> = Lazy::new(|| compile_chain(TITLE));
pub static RATING_CHAIN: Lazy<Vec<Selector>> = Lazy::new(|| compile_chain(RATING));
pub static REVIEW_COUNT_CHAIN: Lazy<Vec<Selector>> = Lazy::new(|| compile_chain(REVIEW_COUNT));
pub static IMAGE_CHAIN: Lazy<Vec<Selector>> = Lazy::new(|| compile_chain(IMAGE));
pub static LINK_CHAIN: Lazy<Vec<Selector>> = Lazy::new(|| compile_chain(LINK));

fn compile(selector: &str) -> Selector {
    Selector::parse(selector).unwrap_or_else(|_| panic!("Invalid selector: {}", selector))
}

fn compile_chain(selectors: &[&str]) -> Vec<Selector> {
    selectors.iter().map(|s| compile(s)).collect()
}
