//! Detik search results.
//!
//! Results page: `https://www.detik.com/search/searchall?query={keyword}`.
//! Each hit is an `h3.media__title` holding the headline anchor.

use super::{MAX_RESULTS, element_text, resolve_href};
use crate::models::SearchResult;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static CONTAINER: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h3.media__title").expect("static selector"));
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("static selector"));

/// Extract up to ten headlines from a Detik search page.
pub fn parse_results(html: &str, base_url: &str) -> Vec<SearchResult> {
    let document = Html::parse_document(html);
    document
        .select(&CONTAINER)
        .take(MAX_RESULTS)
        .filter_map(|container| {
            let a = container.select(&ANCHOR).next()?;
            let href = a.value().attr("href")?;
            let title = element_text(&a);
            (!title.is_empty()).then(|| SearchResult {
                title,
                url: resolve_href(base_url, href),
            })
        })
        .collect()
}
