//! News portal search scrapers.
//!
//! Each portal module knows the CSS layout of its search results page and
//! exposes a pure `parse_results(html, base_url)` function. This module owns
//! the shared HTTP plumbing and walks the portals in order.
//!
//! # Supported Portals
//!
//! | Portal | Module | Result container | Title from | Link from |
//! |--------|--------|------------------|------------|-----------|
//! | Kompas | [`kompas`] | `div.article__list__title` | first `a` | first `a` |
//! | Detik | [`detik`] | `h3.media__title` | first `a` | first `a` |
//! | Liputan6 | [`liputan6`] | `div.articles--iridescent-list` | first `h4` | first `a` |
//!
//! Only the first [`MAX_RESULTS`] containers of a page are looked at. A
//! container missing its title or link is skipped, so a portal can yield
//! fewer than ten results.

use crate::config::PortalEndpoints;
use crate::error::AppError;
use crate::models::{Portal, PortalResults, SearchResult};
use futures::stream::{self, StreamExt};
use reqwest::Client;
use scraper::ElementRef;
use std::time::Duration;
use tracing::{debug, error, info, instrument};
use url::Url;

pub mod detik;
pub mod kompas;
pub mod liputan6;

/// Containers inspected per search page.
pub const MAX_RESULTS: usize = 10;

/// Build the client shared by every portal request.
pub fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client, AppError> {
    let client = Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;
    Ok(client)
}

/// GET `url` and return the body; non-2xx responses are errors.
#[instrument(level = "debug", skip(client))]
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, AppError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Upstream(format!("{url} returned {status}")));
    }
    Ok(response.text().await?)
}

/// Search one portal for `keyword`.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `endpoints` - Base URL of every portal
/// * `portal` - The portal to search
/// * `keyword` - Search keyword, percent-encoded into the query
///
/// # Returns
///
/// Up to [`MAX_RESULTS`] headlines with absolute links, in page order.
///
/// # Errors
///
/// Returns [`AppError::Http`] on transport failures and [`AppError::Upstream`]
/// when the portal answers with a non-2xx status.
#[instrument(level = "info", skip(client, endpoints), fields(portal = %portal))]
pub async fn search(
    client: &Client,
    endpoints: &PortalEndpoints,
    portal: Portal,
    keyword: &str,
) -> Result<Vec<SearchResult>, AppError> {
    let url = endpoints.search_url(portal, keyword);
    let base = endpoints.base_url(portal);
    let html = fetch_html(client, &url).await?;

    let results = match portal {
        Portal::Kompas => kompas::parse_results(&html, base),
        Portal::Detik => detik::parse_results(&html, base),
        Portal::Liputan6 => liputan6::parse_results(&html, base),
    };

    info!(count = results.len(), %url, "Parsed search results");
    debug!(titles = ?results.iter().map(|r| &r.title).collect::<Vec<_>>(), "Titles");
    Ok(results)
}

/// Search every portal, one after the other, in [`Portal::ALL`] order.
///
/// A portal that fails is logged and reported with an empty result list; it
/// never aborts the others.
///
/// # Returns
///
/// One [`PortalResults`] per portal, always three entries.
#[instrument(level = "info", skip(client, endpoints))]
pub async fn scrape_all(
    client: &Client,
    endpoints: &PortalEndpoints,
    keyword: &str,
) -> Vec<PortalResults> {
    stream::iter(Portal::ALL)
        .then(move |portal| async move {
            match search(client, endpoints, portal, keyword).await {
                Ok(articles) => PortalResults {
                    portal,
                    articles,
                    error: None,
                },
                Err(e) => {
                    error!(%portal, error = %e, "Portal search failed");
                    PortalResults {
                        portal,
                        articles: Vec::new(),
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect()
        .await
}

/// Visible text of an element with whitespace runs collapsed to single spaces.
pub(crate) fn element_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve `href` against the portal base; falls back to the raw value.
pub(crate) fn resolve_href(base_url: &str, href: &str) -> String {
    Url::parse(base_url)
        .and_then(|base| base.join(href))
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_element_text_collapses_whitespace() {
        let doc = Html::parse_fragment("<h3><a>  Banjir \n  <b>Jakarta</b>   surut </a></h3>");
        let sel = Selector::parse("a").unwrap();
        let a = doc.select(&sel).next().unwrap();
        assert_eq!(element_text(&a), "Banjir Jakarta surut");
    }

    #[test]
    fn test_resolve_href() {
        assert_eq!(
            resolve_href("https://www.detik.com", "/berita/123"),
            "https://www.detik.com/berita/123"
        );
        assert_eq!(
            resolve_href("https://www.detik.com", "https://news.detik.com/x"),
            "https://news.detik.com/x"
        );
        assert_eq!(resolve_href("not a url", "/berita/123"), "/berita/123");
    }

    #[tokio::test]
    async fn test_fetch_html_rejects_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = build_client("Mozilla/5.0", 5).unwrap();
        let err = fetch_html(&client, &server.uri()).await.unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_scrape_all_isolates_failing_portal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/"))
            .and(query_param("q", "gempa"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<div class="article__list__title"><a href="/read/1">Gempa guncang Cianjur</a></div>"#,
            ))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/search/searchall"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "gempa"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<div class="articles--iridescent-list"><a href="/news/read/9"><h4>Warga mengungsi</h4></a></div>"#,
            ))
            .mount(&server)
            .await;

        let client = build_client("Mozilla/5.0", 5).unwrap();
        let endpoints = PortalEndpoints::uniform(&server.uri());
        let results = scrape_all(&client, &endpoints, "gempa").await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].portal, Portal::Kompas);
        assert_eq!(results[0].articles.len(), 1);
        assert_eq!(results[0].articles[0].url, format!("{}/read/1", server.uri()));
        assert_eq!(results[1].portal, Portal::Detik);
        assert!(results[1].articles.is_empty());
        assert!(results[1].error.is_some());
        assert_eq!(results[2].portal, Portal::Liputan6);
        assert_eq!(results[2].articles[0].title, "Warga mengungsi");
    }

    #[tokio::test]
    async fn test_search_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/searchall"))
            .and(query_param("query", "pilkada"))
            .and(wiremock::matchers::header("user-agent", "Mozilla/5.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<h3 class="media__title"><a href="https://news.detik.com/1">Pilkada serentak</a></h3>"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = build_client("Mozilla/5.0", 5).unwrap();
        let endpoints = PortalEndpoints::uniform(&server.uri());
        let results = search(&client, &endpoints, Portal::Detik, "pilkada").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url, "https://news.detik.com/1");
    }
}
