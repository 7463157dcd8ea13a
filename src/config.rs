//! Runtime settings.
//!
//! Resolution order, highest first: command-line flags / environment
//! variables, the optional YAML file passed with `--config`, built-in defaults.
//!
//! ```yaml
//! bind: 127.0.0.1:5000
//! static_dir: static
//! user_agent: Mozilla/5.0
//! timeout_secs: 20
//! portals:
//!   kompas: https://www.kompas.com
//!   detik: https://www.detik.com
//!   liputan6: https://www.liputan6.com
//! ```

use crate::cli::Cli;
use crate::error::AppError;
use crate::models::Portal;
use serde::Deserialize;
use std::path::Path;
use tracing::{info, instrument};

const DEFAULT_BIND: &str = "127.0.0.1:5000";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Base URL of each portal; search paths are appended to these.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PortalEndpoints {
    pub kompas: String,
    pub detik: String,
    pub liputan6: String,
}

impl Default for PortalEndpoints {
    fn default() -> Self {
        Self {
            kompas: "https://www.kompas.com".to_string(),
            detik: "https://www.detik.com".to_string(),
            liputan6: "https://www.liputan6.com".to_string(),
        }
    }
}

impl PortalEndpoints {
    /// All three portals served from one base URL.
    #[cfg(test)]
    pub fn uniform(base: &str) -> Self {
        Self {
            kompas: base.to_string(),
            detik: base.to_string(),
            liputan6: base.to_string(),
        }
    }

    pub fn base_url(&self, portal: Portal) -> &str {
        match portal {
            Portal::Kompas => &self.kompas,
            Portal::Detik => &self.detik,
            Portal::Liputan6 => &self.liputan6,
        }
    }

    /// Full search URL for `keyword` on `portal`.
    pub fn search_url(&self, portal: Portal, keyword: &str) -> String {
        format!(
            "{}{}",
            self.base_url(portal).trim_end_matches('/'),
            portal.search_path(keyword)
        )
    }
}

/// Contents of the YAML config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    bind: Option<String>,
    static_dir: Option<String>,
    user_agent: Option<String>,
    timeout_secs: Option<u64>,
    portals: PortalEndpoints,
}

/// Fully resolved settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind: String,
    pub static_dir: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub portals: PortalEndpoints,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            portals: PortalEndpoints::default(),
        }
    }
}

impl Settings {
    /// Resolve settings from the CLI, reading the config file if one was given.
    #[instrument(level = "info", skip_all)]
    pub async fn load(cli: &Cli) -> Result<Self, AppError> {
        let file = match &cli.config {
            Some(path) => {
                let raw = tokio::fs::read_to_string(Path::new(path))
                    .await
                    .map_err(|e| AppError::Config(format!("cannot read {path}: {e}")))?;
                info!(config_path = %path, "Loaded configuration file");
                Self::parse_file(&raw)?
            }
            None => FileConfig::default(),
        };
        Ok(Self::merge(cli, file))
    }

    fn parse_file(raw: &str) -> Result<FileConfig, AppError> {
        // An empty file deserializes to unit, not to a mapping.
        if raw.trim().is_empty() {
            return Ok(FileConfig::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    fn merge(cli: &Cli, file: FileConfig) -> Self {
        let defaults = Settings::default();
        Self {
            bind: cli.bind.clone().or(file.bind).unwrap_or(defaults.bind),
            static_dir: cli
                .static_dir
                .clone()
                .or(file.static_dir)
                .unwrap_or(defaults.static_dir),
            user_agent: cli
                .user_agent
                .clone()
                .or(file.user_agent)
                .unwrap_or(defaults.user_agent),
            timeout_secs: cli
                .timeout_secs
                .or(file.timeout_secs)
                .unwrap_or(defaults.timeout_secs),
            portals: file.portals,
        }
    }
}
