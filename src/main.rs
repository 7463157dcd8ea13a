//! # Portal Sentiment
//!
//! A small web service that searches three Indonesian news portals (Kompas,
//! Detik and Liputan6) for a keyword, tags each headline as positive,
//! negative or neutral, and hands back a bar chart plus a CSV dataset.
//!
//! ## Usage
//!
//! ```sh
//! portal_sentiment --bind 127.0.0.1:5000 --static-dir ./static
//! ```
//!
//! Then open `http://127.0.0.1:5000/`, enter a keyword and a date.
//!
//! ## Architecture
//!
//! Each form submission runs a linear pipeline:
//! 1. **Scraping**: fetch each portal's search page and parse the first ten hits
//! 2. **Tagging**: score every headline against the polarity lexicon
//! 3. **Charting**: draw the per-portal article counts
//! 4. **Export**: write the tagged headlines as CSV
//! 5. **Rendering**: return the result page with links to both artifacts

use clap::Parser;
use std::error::Error;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod error;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod sentiment;
mod server;
mod state;
mod utils;

use cli::Cli;
use config::Settings;
use state::AppState;
use utils::ensure_writable_dir;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    info!("portal_sentiment starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let settings = Settings::load(&args).await?;
    info!(
        bind = %settings.bind,
        static_dir = %settings.static_dir,
        timeout_secs = settings.timeout_secs,
        "Resolved settings"
    );

    // Early check: charts and datasets are written here on every search
    if let Err(e) = ensure_writable_dir(&settings.static_dir).await {
        error!(
            path = %settings.static_dir,
            error = %e,
            "Static directory is not writable (fix perms or choose a different path)"
        );
        return Err(e.into());
    }

    let bind = settings.bind.clone();
    let state = AppState::new(Arc::new(settings))?;
    let app = server::router(state);

    let listener = TcpListener::bind(&bind).await?;
    info!(address = %bind, "Listening on http://{}/", bind);
    axum::serve(listener, app).await?;

    Ok(())
}
