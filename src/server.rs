//! HTTP surface: the search form, the result page and artifact downloads.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/` | empty form |
//! | POST | `/` | run a search, render results |
//! | GET | `/download_csv/{*filename}` | dataset as an attachment |
//! | GET | `/static/*` | generated charts and datasets |
//! | GET | `/health` | liveness |

use crate::error::AppError;
use crate::outputs::page::render_page;
use crate::pipeline;
use crate::state::AppState;
use crate::utils::is_safe_relative;
use axum::{
    Form, Router,
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
    routing::get,
};
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::PathBuf;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Fields posted by the search form.
///
/// The date may arrive as `date` or `tanggal`; when both are sent, a
/// non-blank `date` wins.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub tanggal: String,
}

impl SearchForm {
    pub fn date(&self) -> &str {
        if self.date.trim().is_empty() {
            &self.tanggal
        } else {
            &self.date
        }
    }
}

pub fn router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.settings.static_dir);
    Router::new()
        .route("/", get(index).post(search))
        .route("/download_csv/{*filename}", get(download_csv))
        .route("/health", get(health))
        .nest_service("/static", static_dir)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<String> {
    Html(render_page("", "", None))
}

async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, AppError> {
    info!(keyword = %form.keyword, date = %form.date(), "POST / - search");
    let report = pipeline::run(&state, &form.keyword, form.date()).await?;
    Ok(Html(render_page(&report.keyword, &report.date, Some(&report))))
}

async fn download_csv(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !is_safe_relative(&filename) {
        warn!(%filename, "Rejected download path");
        return Err(AppError::Validation(format!("invalid file name {filename:?}")));
    }
    if !filename.ends_with(".csv") {
        return Err(AppError::NotFound);
    }

    let path = PathBuf::from(&state.settings.static_dir).join(&filename);
    let body = match tokio::fs::read(&path).await {
        Ok(body) => body,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(AppError::NotFound),
        Err(e) => return Err(e.into()),
    };

    let attachment_name = path
        .file_name()
        .map(|n| n.to_string_lossy().replace('"', ""))
        .unwrap_or_default();
    info!(%filename, bytes = body.len(), "Serving dataset");
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{attachment_name}\""),
            ),
        ],
        body,
    ))
}

async fn health() -> &'static str {
    "OK"
}
