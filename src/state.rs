//! Shared per-process state handed to every request handler.

use crate::config::Settings;
use crate::error::AppError;
use crate::scrapers::build_client;
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AppState {
    /// One connection pool for all portal requests.
    pub client: Client,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Arc<Settings>) -> Result<Self, AppError> {
        let client = build_client(&settings.user_agent, settings.timeout_secs)?;
        Ok(Self { client, settings })
    }
}
