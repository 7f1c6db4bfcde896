use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::models::ProductRecord;

pub const PLACEHOLDER_IMAGE_PATH: &str = "/placeholder-image.svg";

/// Five-character star string: filled stars for the whole part, empty ones for the rest.
/// A fractional part of .5 or more still renders as an empty star.
pub fn stars(rating: Option<f32>) -> String {
    let rating = match rating {
        Some(r) if r > 0.0 => r.min(5.0),
        _ => return "☆".repeat(5),
    };

    let full = rating.floor() as usize;
    format!("{}{}", "★".repeat(full), "☆".repeat(5 - full))
}

/// Group digits in threes with commas, e.g. 1234567 -> "1,234,567"
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

pub fn product_card(product: &ProductRecord) -> String {
    let image = if product.image_url.is_empty() {
        PLACEHOLDER_IMAGE_PATH
    } else {
        product.image_url.as_str()
    };
    let rating_value = product
        .rating
        .map(|r| format!("{:.1}", r))
        .unwrap_or_else(|| "N/A".to_string());
    let reviews = if product.review_count > 0 {
        format!("{} reviews", format_count(product.review_count))
    } else {
        "No reviews".to_string()
    };

    let content = format!(
        r#"<img src="{image}" alt="{alt}" class="product-image" onerror="this.onerror=null;this.src='{placeholder}'"/>
<h3 class="product-title">{title}</h3>
<div class="product-rating"><span class="stars">{stars}</span> <span class="rating-value">{rating}</span></div>
<div class="review-count">{reviews}</div>"#,
        image = encode_double_quoted_attribute(image),
        alt = encode_double_quoted_attribute(&product.title),
        placeholder = PLACEHOLDER_IMAGE_PATH,
        title = encode_text(&product.title),
        stars = stars(product.rating),
        rating = rating_value,
        reviews = reviews,
    );

    if !is_web_link(&product.product_url) {
        format!(r#"<div class="product-card">{}</div>"#, content)
    } else {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener" class="product-card clickable">{}<div class="product-link"><small>View on Amazon</small></div></a>"#,
            encode_double_quoted_attribute(&product.product_url),
            content
        )
    }
}

fn is_web_link(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}
