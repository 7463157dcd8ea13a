//! Liputan6 search results.
//!
//! Results page: `https://www.liputan6.com/search?q={keyword}`. Each hit is a
//! `div.articles--iridescent-list`; the headline lives in its first `h4` and
//! the link in its first `a`, and both must be present.

use super::{MAX_RESULTS, element_text, resolve_href};
use crate::models::SearchResult;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static CONTAINER: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.articles--iridescent-list").expect("static selector"));
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("static selector"));
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("h4").expect("static selector"));

/// Extract up to ten headlines from a Liputan6 search page.
pub fn parse_results(html: &str, base_url: &str) -> Vec<SearchResult> {
    let document = Html::parse_document(html);
    document
        .select(&CONTAINER)
        .take(MAX_RESULTS)
        .filter_map(|container| {
            let a = container.select(&ANCHOR).next()?;
            let h4 = container.select(&TITLE).next()?;
            let href = a.value().attr("href")?;
            let title = element_text(&h4);
            (!title.is_empty()).then(|| SearchResult {
                title,
                url: resolve_href(base_url, href),
            })
        })
        .collect()
}
