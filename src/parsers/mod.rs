pub mod rating;
pub mod reviews;

pub use rating::*;
pub use reviews::*;

use url::Url;

/// Collapse whitespace runs to a single space and trim the ends
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolve an href found on the page against the site origin.
///
/// Absolute http(s) hrefs are returned unchanged; any other scheme
/// (`javascript:`, `data:`, `mailto:`) yields an empty string. If the origin
/// itself does not parse, the href is appended to it verbatim.
pub fn absolute_url(origin: &str, href: &str) -> String {
    let href = href.trim();
    match Url::parse(href) {
        Ok(url) if is_web_url(&url) => return href.to_string(),
        Ok(_) => return String::new(),
        Err(_) => {}
    }

    match Url::parse(origin).and_then(|base| base.join(href)) {
        Ok(url) if is_web_url(&url) => url.to_string(),
        Ok(_) => String::new(),
        Err(_) => format!("{}{}", origin.trim_end_matches('/'), href),
    }
}

fn is_web_url(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}
