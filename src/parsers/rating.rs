use once_cell::sync::Lazy;
use regex::Regex;

static RATING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]\.[0-9])").expect("Invalid rating regex")
});

/// Parse a star rating such as "4.5 out of 5 stars".
///
/// Only the first `d.d` match counts. Values outside 0..=5 are rejected.
pub fn parse_rating(text: &str) -> Option<f32> {
    let found = RATING_REGEX.find(text)?;
    let rating = found.as_str().parse::<f32>().ok()?;

    if (0.0..=5.0).contains(&rating) {
        Some(rating)
    } else {
        None
    }
}
