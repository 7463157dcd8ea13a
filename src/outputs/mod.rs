//! Artifacts produced for each search.
//!
//! # Submodules
//!
//! - [`dataset`]: writes the sentiment-tagged headlines as CSV
//! - [`chart`]: draws the per-portal article-count bar chart as SVG
//! - [`page`]: renders the HTML form and result page
//!
//! # Output Structure
//!
//! ```text
//! static_dir/
//! ├── trend_{stem}.svg        # bar chart, linked from the page
//! └── {stem}_{date}.csv       # dataset, served by /download_csv/
//! ```
//!
//! `{stem}` is the keyword passed through [`crate::utils::file_stem`]. A
//! repeated search for the same keyword overwrites the previous files.

pub mod chart;
pub mod dataset;
pub mod page;

/// File name of the chart for `stem`.
pub fn chart_file_name(stem: &str) -> String {
    format!("trend_{stem}.svg")
}

/// File name of the dataset for `stem` and `date`.
pub fn dataset_file_name(stem: &str, date: &str) -> String {
    format!("{stem}_{date}.csv")
}
