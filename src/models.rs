//! Data models shared by the scrapers, the sentiment tagger and the outputs.
//!
//! - [`Portal`]: the three fixed news portals and their search URLs
//! - [`SearchResult`]: one headline parsed from a portal's search page
//! - [`Sentiment`] / [`SentimentRecord`]: a classified headline, one dataset row
//! - [`PortalResults`] / [`SentimentTally`] / [`Report`]: the aggregated outcome
//!   of one search request
//!
//! Dataset column names (`media`, `judul`, `sentimen`, `tanggal_input`) and the
//! sentiment labels (`Positif`, `Negatif`, `Netral`) are in the portals' own
//! language, so the serde attributes below pin them explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three news portals searched for every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Portal {
    Kompas,
    Detik,
    Liputan6,
}

impl Portal {
    /// Scrape order; also the bar order in the chart and row order in the dataset.
    pub const ALL: [Portal; 3] = [Portal::Kompas, Portal::Detik, Portal::Liputan6];

    /// Lowercase identifier used in the dataset and the chart.
    pub fn key(&self) -> &'static str {
        match self {
            Portal::Kompas => "kompas",
            Portal::Detik => "detik",
            Portal::Liputan6 => "liputan6",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Portal::Kompas => "Kompas",
            Portal::Detik => "Detik",
            Portal::Liputan6 => "Liputan6",
        }
    }

    /// Path and query of the keyword search page, relative to the portal base URL.
    ///
    /// The keyword is percent-encoded.
    pub fn search_path(&self, keyword: &str) -> String {
        let q = urlencoding::encode(keyword);
        match self {
            Portal::Kompas => format!("/search/?q={q}"),
            Portal::Detik => format!("/search/searchall?query={q}"),
            Portal::Liputan6 => format!("/search?q={q}"),
        }
    }
}

impl fmt::Display for Portal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A headline and its link as found on a search results page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
}

/// Polarity bucket of a headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Sentiment {
    #[serde(rename = "Positif")]
    Positive,
    #[serde(rename = "Negatif")]
    Negative,
    #[serde(rename = "Netral")]
    Neutral,
}

impl Sentiment {
    /// Label written to the dataset and shown on the page.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positif",
            Sentiment::Negative => "Negatif",
            Sentiment::Neutral => "Netral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the exported dataset.
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SentimentRecord {
    /// Portal the headline came from.
    pub media: Portal,
    /// The headline.
    pub judul: String,
    /// Polarity bucket of the headline.
    pub sentimen: Sentiment,
    /// Date submitted with the search form, `YYYY-MM-DD`.
    pub tanggal_input: String,
}

/// What a single portal produced for the request.
#[derive(Debug, Clone)]
pub struct PortalResults {
    pub portal: Portal,
    pub articles: Vec<SearchResult>,
    /// Set when the portal could not be fetched; `articles` is then empty.
    pub error: Option<String>,
}

/// Number of headlines per polarity bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentTally {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentTally {
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

/// Everything the result page shows after a search.
#[derive(Debug, Clone)]
pub struct Report {
    pub keyword: String,
    pub date: String,
    pub results: Vec<PortalResults>,
    pub records: Vec<SentimentRecord>,
    pub tallies: Vec<(Portal, SentimentTally)>,
    /// File name of the chart inside the static directory.
    pub chart_file: String,
    /// File name of the dataset inside the static directory.
    pub csv_file: String,
}

/// Number of headlines each portal returned.
pub fn article_counts(results: &[PortalResults]) -> Vec<(Portal, usize)> {
    results
        .iter()
        .map(|r| (r.portal, r.articles.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portal_keys_in_scrape_order() {
        let keys: Vec<_> = Portal::ALL.iter().map(|p| p.key()).collect();
        assert_eq!(keys, vec!["kompas", "detik", "liputan6"]);
    }

    #[test]
    fn test_search_paths() {
        assert_eq!(Portal::Kompas.search_path("banjir"), "/search/?q=banjir");
        assert_eq!(
            Portal::Detik.search_path("banjir"),
            "/search/searchall?query=banjir"
        );
        assert_eq!(Portal::Liputan6.search_path("banjir"), "/search?q=banjir");
    }

    #[test]
    fn test_search_path_encodes_keyword() {
        assert_eq!(
            Portal::Kompas.search_path("harga beras & cabai"),
            "/search/?q=harga%20beras%20%26%20cabai"
        );
    }

    #[test]
    fn test_sentiment_labels() {
        assert_eq!(Sentiment::Positive.label(), "Positif");
        assert_eq!(Sentiment::Negative.to_string(), "Negatif");
        assert_eq!(Sentiment::Neutral.label(), "Netral");
    }

    #[test]
    fn test_tally_total() {
        let tally = SentimentTally {
            positive: 2,
            negative: 1,
            neutral: 4,
        };
        assert_eq!(tally.total(), 7);
    }

    #[test]
    fn test_article_counts() {
        let report = Report {
            keyword: "pemilu".to_string(),
            date: "2024-02-14".to_string(),
            results: vec![
                PortalResults {
                    portal: Portal::Kompas,
                    articles: vec![SearchResult {
                        title: "Pemilu damai".to_string(),
                        url: "https://www.kompas.com/a".to_string(),
                    }],
                    error: None,
                },
                PortalResults {
                    portal: Portal::Detik,
                    articles: vec![],
                    error: Some("timeout".to_string()),
                },
            ],
            records: vec![],
            tallies: vec![],
            chart_file: "trend_pemilu.svg".to_string(),
            csv_file: "pemilu_2024-02-14.csv".to_string(),
        };
        assert_eq!(
            article_counts(&report.results),
            vec![(Portal::Kompas, 1), (Portal::Detik, 0)]
        );
    }
}
