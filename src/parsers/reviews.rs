use once_cell::sync::Lazy;
use regex::Regex;

static REVIEW_COUNT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{1,3}(?:,\d{3})+|\d+").expect("Invalid review count regex")
});

/// Parse a review count such as "1,234 ratings", defaulting to 0
pub fn parse_review_count(text: &str) -> u64 {
    try_parse_review_count(text).unwrap_or(0)
}

/// Same as [`parse_review_count`] but distinguishes "nothing found"
pub fn try_parse_review_count(text: &str) -> Option<u64> {
    let found = REVIEW_COUNT_REGEX.find(text)?;
    found.as_str().replace(',', "").parse::<u64>().ok()
}
