//! Utility functions for file naming and file system checks.

use crate::error::AppError;
use chrono::{Local, NaiveDate};
use std::fs as stdfs;
use std::path::{Component, Path};
use tokio::fs;
use tracing::{info, instrument};

/// Longest stem, in bytes, that goes into an artifact file name.
pub const MAX_STEM_BYTES: usize = 100;

/// Reduce a keyword to a slug that is safe inside a file name.
///
/// Letters and digits are lowercased, `-` and `_` are kept, whitespace becomes
/// `_` and everything else is dropped. The slug is cut at a character boundary
/// once it would exceed [`MAX_STEM_BYTES`].
///
/// # Arguments
///
/// * `keyword` - The raw keyword as submitted with the form
///
/// # Returns
///
/// A non-empty slug. An empty result becomes `"keyword"`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(file_stem("Harga BBM"), "harga_bbm");
/// assert_eq!(file_stem("../../etc/passwd"), "etcpasswd");
/// ```
pub fn file_stem(keyword: &str) -> String {
    let chars = keyword
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '_')
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .flat_map(char::to_lowercase);

    let mut stem = String::new();
    for c in chars {
        if stem.len() + c.len_utf8() > MAX_STEM_BYTES {
            break;
        }
        stem.push(c);
    }

    if stem.is_empty() {
        "keyword".to_string()
    } else {
        stem
    }
}

/// Validate a submitted date as `YYYY-MM-DD`; blank means today (local time).
///
/// # Errors
///
/// Returns [`AppError::Validation`] when a non-blank date does not parse.
pub fn normalize_date(raw: &str) -> Result<String, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Local::now().date_naive().to_string());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.to_string())
        .map_err(|_| AppError::Validation(format!("invalid date {raw:?}, expected YYYY-MM-DD")))
}

/// True when `name` is a plain relative path with no `..`, root or prefix parts.
pub fn is_safe_relative(name: &str) -> bool {
    !name.is_empty()
        && Path::new(name)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then creates and removes a probe file.
///
/// # Errors
///
/// Returns [`AppError::Io`] if the directory cannot be created or written to.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), AppError> {
    fs::create_dir_all(path).await?;
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    stdfs::File::create(&probe_path)?;
    let _ = stdfs::remove_file(&probe_path);
    info!("Output directory is writable");
    Ok(())
}
