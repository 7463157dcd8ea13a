//! Kompas search results.
//!
//! Results page: `https://www.kompas.com/search/?q={keyword}`. Each hit is a
//! `div.article__list__title` wrapping the headline anchor.

use super::{MAX_RESULTS, element_text, resolve_href};
use crate::models::SearchResult;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

static CONTAINER: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.article__list__title").expect("static selector"));
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("static selector"));

/// Extract up to ten headlines from a Kompas search page.
pub fn parse_results(html: &str, base_url: &str) -> Vec<SearchResult> {
    let document = Html::parse_document(html);
    document
        .select(&CONTAINER)
        .take(MAX_RESULTS)
        .filter_map(|container| {
            let a = container.select(&ANCHOR).next()?;
            let href = a.value().attr("href")?;
            let title = element_text(&a);
            if title.is_empty() {
                return None;
            }
            Some(SearchResult {
                title,
                url: resolve_href(base_url, href),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.kompas.com";

    #[test]
    fn test_parse_results() {
        let html = r#"
            <html><body>
              <div class="article__list__title">
                <h3><a href="https://regional.kompas.com/read/2024/01/01/banjir">Banjir Rendam Ribuan Rumah</a></h3>
              </div>
              <div class="article__list__title">
                <h3><a href="/read/2024/01/02/harga">Harga Beras   Turun</a></h3>
              </div>
              <div class="article__list">Sidebar without title class</div>
            </body></html>
        "#;

        let results = parse_results(html, BASE);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Banjir Rendam Ribuan Rumah");
        assert_eq!(
            results[0].url,
            "https://regional.kompas.com/read/2024/01/01/banjir"
        );
        assert_eq!(results[1].title, "Harga Beras Turun");
        assert_eq!(results[1].url, "https://www.kompas.com/read/2024/01/02/harga");
    }

    #[test]
    fn test_skips_containers_without_anchor_or_href() {
        let html = r#"
            <div class="article__list__title"><span>No link</span></div>
            <div class="article__list__title"><a>No href</a></div>
            <div class="article__list__title"><a href="/x">Kept</a></div>
        "#;
        let results = parse_results(html, BASE);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Kept");
    }

    #[test]
    fn test_only_first_ten_containers_are_considered() {
        let mut html = String::from(r#"<div class="article__list__title"><span>broken</span></div>"#);
        for i in 0..12 {
            html.push_str(&format!(
                r#"<div class="article__list__title"><a href="/read/{i}">Berita {i}</a></div>"#
            ));
        }
        let results = parse_results(&html, BASE);
        assert_eq!(results.len(), 9);
        assert_eq!(results.last().unwrap().title, "Berita 8");
    }

    #[test]
    fn test_empty_page() {
        assert!(parse_results("<html><body></body></html>", BASE).is_empty());
    }
}
