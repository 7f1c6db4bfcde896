use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::models::ProductRecord;
use crate::parsers::{absolute_url, clean_text, parse_rating, try_parse_review_count};
use crate::scrapers::selectors::{
    self, CARD_SELECTOR, IMAGE_CHAIN, LINK_CHAIN, RATING_CHAIN, REVIEW_COUNT_CHAIN, TITLE_CHAIN,
};

/// Extract product records from a search results page, in document order.
///
/// Cards without a usable title are dropped; every other field falls back to
/// its default when no selector in its chain produces a value.
pub fn extract_products(html: &str, origin: &str) -> Vec<ProductRecord> {
    let document = Html::parse_document(html);

    let cards: Vec<ElementRef> = document.select(&CARD_SELECTOR).collect();
    debug!("Found {} product cards", cards.len());

    let products: Vec<ProductRecord> = cards
        .into_iter()
        .map(|card| extract_card(card, origin))
        .filter(|product| !product.title.is_empty())
        .collect();

    debug!("Extracted {} products with titles", products.len());
    products
}

pub fn extract_card(card: ElementRef<'_>, origin: &str) -> ProductRecord {
    ProductRecord {
        title: first_value(card, &TITLE_CHAIN, read_title).unwrap_or_default(),
        rating: first_value(card, &RATING_CHAIN, |node| parse_rating(&text_or_label(node))),
        review_count: first_value(card, &REVIEW_COUNT_CHAIN, |node| {
            try_parse_review_count(&text_or_label(node))
        })
        .unwrap_or(0),
        image_url: first_value(card, &IMAGE_CHAIN, read_image).unwrap_or_default(),
        product_url: first_value(card, &LINK_CHAIN, |node| {
            non_empty_attr(node, "href")
                .map(|href| absolute_url(origin, &href))
                .filter(|url| !url.is_empty())
        })
        .unwrap_or_default(),
    }
}

/// Walk the chain in order and return the first value any selector produces.
///
/// Only the first node matched by each selector is considered. A node that
/// matches but yields no usable value also advances the chain.
fn first_value<T>(
    card: ElementRef<'_>,
    chain: &[Selector],
    read: impl Fn(ElementRef<'_>) -> Option<T>,
) -> Option<T> {
    chain
        .iter()
        .find_map(|selector| card.select(selector).next().and_then(&read))
}

fn read_title(node: ElementRef<'_>) -> Option<String> {
    let title = clean_text(&node.text().collect::<String>());
    (!title.is_empty()).then_some(title)
}

fn read_image(node: ElementRef<'_>) -> Option<String> {
    non_empty_attr(node, "src").or_else(|| non_empty_attr(node, "data-src"))
}

/// Node text, or its accessibility label when the text is empty
fn text_or_label(node: ElementRef<'_>) -> String {
    let text = clean_text(&node.text().collect::<String>());
    if text.is_empty() {
        node.value().attr("aria-label").map(clean_text).unwrap_or_default()
    } else {
        text
    }
}

fn non_empty_attr(node: ElementRef<'_>, name: &str) -> Option<String> {
    node.value()
        .attr(name)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// How many cards each selector matches, for diagnosing stale chains.
#[derive(Debug, Clone, Default)]
pub struct SelectorReport {
    pub cards: usize,
    pub hits: Vec<SelectorHits>,
}

#[derive(Debug, Clone)]
pub struct SelectorHits {
    pub field: &'static str,
    pub selector: &'static str,
    pub cards_matched: usize,
}

pub fn selector_report(html: &str) -> SelectorReport {
    let document = Html::parse_document(html);
    let cards: Vec<ElementRef> = document.select(&CARD_SELECTOR).collect();

    let fields: [(&'static str, &'static [&'static str], &[Selector]); 5] = [
        ("title", selectors::TITLE, TITLE_CHAIN.as_slice()),
        ("rating", selectors::RATING, RATING_CHAIN.as_slice()),
        ("reviewCount", selectors::REVIEW_COUNT, REVIEW_COUNT_CHAIN.as_slice()),
        ("imageUrl", selectors::IMAGE, IMAGE_CHAIN.as_slice()),
        ("productUrl", selectors::LINK, LINK_CHAIN.as_slice()),
    ];

    let mut hits = Vec::new();
    for (field, sources, chain) in fields {
        for (source, selector) in sources.iter().zip(chain.iter()) {
            let cards_matched = cards
                .iter()
                .filter(|card| card.select(selector).next().is_some())
                .count();
            hits.push(SelectorHits {
                field,
                selector: *source,
                cards_matched,
            });
        }
    }

    SelectorReport {
        cards: cards.len(),
        hits,
    }
}
