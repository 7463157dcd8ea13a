//! CSV export of the sentiment-tagged headlines.
//!
//! One row per headline, columns `media,judul,sentimen,tanggal_input`, rows in
//! portal order then result order. The header row is always written.

use crate::error::AppError;
use crate::models::SentimentRecord;
use std::path::Path;
use tracing::{info, instrument};

/// Serialize `records` as CSV into any writer.
pub fn write_records<W: std::io::Write>(writer: W, records: &[SentimentRecord]) -> Result<(), AppError> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(["media", "judul", "sentimen", "tanggal_input"])?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `records` to `path`, replacing any existing file.
#[instrument(level = "info", skip(records), fields(path = %path.display(), rows = records.len()))]
pub fn save_csv(path: &Path, records: &[SentimentRecord]) -> Result<(), AppError> {
    let file = std::fs::File::create(path)?;
    write_records(file, records)?;
    info!("Wrote dataset");
    Ok(())
}
