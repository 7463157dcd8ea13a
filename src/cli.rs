//! Command-line interface definitions for Portal Sentiment.
//!
//! Every option can also be supplied through an environment variable. Values
//! given here take precedence over the optional YAML config file.

use clap::Parser;

/// Command-line arguments for the Portal Sentiment web service.
///
/// # Examples
///
/// ```sh
/// # Serve on the default address, writing artifacts to ./static
/// portal_sentiment
///
/// # Custom address and artifact directory
/// portal_sentiment --bind 0.0.0.0:8080 --static-dir /var/lib/portal_sentiment
///
/// # Portal base URLs and other settings from a file
/// portal_sentiment --config ./config.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Address to listen on
    #[arg(short, long, env = "PORTAL_SENTIMENT_BIND")]
    pub bind: Option<String>,

    /// Directory for the generated chart and dataset files
    #[arg(short, long, env = "PORTAL_SENTIMENT_STATIC_DIR")]
    pub static_dir: Option<String>,

    /// Optional path to a config.yaml file
    #[arg(short, long, env = "PORTAL_SENTIMENT_CONFIG")]
    pub config: Option<String>,

    /// User-Agent header sent to the portals
    #[arg(long, env = "PORTAL_SENTIMENT_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Per-request timeout when fetching a portal, in seconds
    #[arg(long, env = "PORTAL_SENTIMENT_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_unset() {
        let cli = Cli::parse_from(["portal_sentiment"]);
        assert!(cli.config.is_none());
        assert!(cli.timeout_secs.is_none());
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "portal_sentiment",
            "--bind",
            "0.0.0.0:8080",
            "--static-dir",
            "./out",
            "--timeout-secs",
            "5",
        ]);

        assert_eq!(cli.bind.as_deref(), Some("0.0.0.0:8080"));
        assert_eq!(cli.static_dir.as_deref(), Some("./out"));
        assert_eq!(cli.timeout_secs, Some(5));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["portal_sentiment", "-b", "127.0.0.1:9000", "-c", "cfg.yaml"]);

        assert_eq!(cli.bind.as_deref(), Some("127.0.0.1:9000"));
        assert_eq!(cli.config.as_deref(), Some("cfg.yaml"));
    }
}
