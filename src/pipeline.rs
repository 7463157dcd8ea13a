//! One search request, end to end.
//!
//! 1. **Validate**: trimmed keyword must be non-empty, date must be `YYYY-MM-DD`
//! 2. **Scrape**: search the three portals in order
//! 3. **Tag**: classify every headline's polarity
//! 4. **Tally**: count polarity buckets per portal
//! 5. **Write**: draw the chart and save the dataset into the static directory

use crate::error::AppError;
use crate::models::{
    Portal, PortalResults, Report, Sentiment, SentimentRecord, SentimentTally, article_counts,
};
use crate::outputs::{chart, chart_file_name, dataset, dataset_file_name};
use crate::scrapers;
use crate::sentiment::analyze_sentiment;
use crate::state::AppState;
use crate::utils::{file_stem, normalize_date};
use itertools::Itertools;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Run the whole pipeline for one form submission.
///
/// # Arguments
///
/// * `state` - Shared HTTP client and settings
/// * `keyword` - Search keyword; surrounding whitespace is ignored
/// * `date` - Submitted date, `YYYY-MM-DD` or blank for today
///
/// # Returns
///
/// The [`Report`] rendered on the result page. The chart and dataset it names
/// have already been written to the static directory.
///
/// # Errors
///
/// - [`AppError::Validation`] for a blank keyword or a malformed date
/// - [`AppError::Chart`], [`AppError::Csv`] or [`AppError::Io`] if an artifact
///   cannot be written
///
/// A failing portal is not an error; it is reported inside the [`Report`].
#[instrument(level = "info", skip(state))]
pub async fn run(state: &AppState, keyword: &str, date: &str) -> Result<Report, AppError> {
    let t0 = Instant::now();
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(AppError::Validation("keyword is required".to_string()));
    }
    let date = normalize_date(date)?;

    let results = scrapers::scrape_all(&state.client, &state.settings.portals, keyword).await;
    let records = tag_sentiment(&results, &date);
    let tallies = tally(&records);
    let counts = article_counts(&results);
    info!(
        total = records.len(),
        counts = ?counts,
        "Tagged headlines"
    );

    let stem = file_stem(keyword);
    let chart_file = chart_file_name(&stem);
    let csv_file = dataset_file_name(&stem, &date);
    let static_dir = PathBuf::from(&state.settings.static_dir);

    // Plotting and CSV writing are blocking file I/O.
    let records = {
        let chart_path = static_dir.join(&chart_file);
        let csv_path = static_dir.join(&csv_file);
        let title = keyword.to_string();
        tokio::task::spawn_blocking(move || -> Result<Vec<SentimentRecord>, AppError> {
            chart::render_trend_chart(&chart_path, &title, &counts)?;
            dataset::save_csv(&csv_path, &records)?;
            Ok(records)
        })
        .await??
    };

    let elapsed = t0.elapsed();
    info!(?elapsed, %chart_file, %csv_file, "Search complete");

    Ok(Report {
        keyword: keyword.to_string(),
        date,
        results,
        records,
        tallies,
        chart_file,
        csv_file,
    })
}

/// Classify every headline, in portal order then result order.
pub fn tag_sentiment(results: &[PortalResults], date: &str) -> Vec<SentimentRecord> {
    results
        .iter()
        .flat_map(|r| {
            r.articles.iter().map(move |article| {
                let sentimen = analyze_sentiment(&article.title);
                debug!(portal = %r.portal, title = %article.title, %sentimen, "Classified");
                SentimentRecord {
                    media: r.portal,
                    judul: article.title.clone(),
                    sentimen,
                    tanggal_input: date.to_string(),
                }
            })
        })
        .collect()
}

/// Polarity counts for every portal, zeros included, in [`Portal::ALL`] order.
pub fn tally(records: &[SentimentRecord]) -> Vec<(Portal, SentimentTally)> {
    let counts = records.iter().map(|r| (r.media, r.sentimen)).counts();
    let get = |portal: Portal, sentiment: Sentiment| counts.get(&(portal, sentiment)).copied().unwrap_or(0);

    Portal::ALL
        .iter()
        .map(|&portal| {
            (
                portal,
                SentimentTally {
                    positive: get(portal, Sentiment::Positive),
                    negative: get(portal, Sentiment::Negative),
                    neutral: get(portal, Sentiment::Neutral),
                },
            )
        })
        .collect()
}
