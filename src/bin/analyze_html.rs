//! Check which selectors still match the live markup.
//!
//! Usage:
//!   analyze_html --file saved_page.html
//!   analyze_html <keyword>

use anyhow::{bail, Context, Result};
use std::fs;

use search_scraper::config::Config;
use search_scraper::scrapers::{extract_products, selector_report, AmazonScraper};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::load()?;

    let html = match args.as_slice() {
        [flag, path] if flag == "--file" => {
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?
        }
        [keyword, ..] if !keyword.starts_with("--") => {
            let keyword = args.join(" ");
            println!("Fetching search results for {:?}...", keyword);
            let scraper = AmazonScraper::new(&config)?;
            let html = scraper.fetch_search_page(&keyword).await?;
            fs::write("search_sample.html", &html)?;
            println!("Saved page to search_sample.html");
            html
        }
        _ => bail!("usage: analyze_html --file <page.html> | analyze_html <keyword>"),
    };

    let report = selector_report(&html);
    println!("Found {} product card elements", report.cards);

    for hit in &report.hits {
        println!(
            "{:<12} {:<50} matched {}/{}",
            hit.field, hit.selector, hit.cards_matched, report.cards
        );
    }

    let products = extract_products(&html, &config.target.origin);
    println!("\nExtracted {} products:", products.len());
    println!("{}", serde_json::to_string_pretty(&products)?);

    Ok(())
}
