//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration. Every option can also be supplied through the environment.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_FEISHU_BASE_URL, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_PORT,
    DEFAULT_STORE_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Language of the human-readable strings in a digest (sentinel title, labels,
/// section header and closing note). The keyword set is bilingual regardless.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    /// Simplified Chinese (default)
    #[default]
    Zh,
    /// English
    En,
}

/// Service configuration.
///
/// Each field maps to a long flag and an environment variable, so the service
/// can be configured from a `.env` file, the process environment or the
/// command line (flags win).
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// HTTP port for the API server
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address the API server binds to
    #[arg(long = "bind", env = "BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    pub bind_addr: String,

    /// Feishu application id
    #[arg(long, env = "FEISHU_APP_ID", default_value = "")]
    pub feishu_app_id: String,

    /// Feishu application secret
    #[arg(long, env = "FEISHU_APP_SECRET", default_value = "", hide_env_values = true)]
    pub feishu_app_secret: String,

    /// Feishu wiki space id that receives digests
    #[arg(long, env = "FEISHU_WIKI_ID", default_value = "")]
    pub feishu_wiki_id: String,

    /// Feishu open platform base URL
    #[arg(long, env = "FEISHU_BASE_URL", default_value = DEFAULT_FEISHU_BASE_URL)]
    pub feishu_base_url: String,

    /// Page fetch timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_FETCH_TIMEOUT_SECS)]
    pub fetch_timeout_seconds: u64,

    /// Document-store request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_STORE_TIMEOUT_SECS)]
    pub store_timeout_seconds: u64,

    /// HTTP User-Agent header value for page fetches
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Language of digest labels: zh|en
    #[arg(long, global = true, value_enum, default_value_t = Locale::Zh)]
    pub locale: Locale,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Socket address string the server binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            feishu_app_id: String::new(),
            feishu_app_secret: String::new(),
            feishu_wiki_id: String::new(),
            feishu_base_url: DEFAULT_FEISHU_BASE_URL.to_string(),
            fetch_timeout_seconds: DEFAULT_FETCH_TIMEOUT_SECS,
            store_timeout_seconds: DEFAULT_STORE_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            locale: Locale::Zh,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// Command-line entry point.
///
/// # Examples
///
/// ```bash
/// # Run the API server (default)
/// page_digest --port 9000
///
/// # Print the digest of a single page
/// page_digest digest --url https://example.com/post
///
/// # Digest a saved page, attributing it to its original URL
/// page_digest digest --file page.html --url https://example.com/post --locale en
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "page_digest",
    about = "Fetches web pages and files condensed digests in a Feishu wiki."
)]
pub struct Cli {
    #[command(flatten)]
    pub config: Config,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands. Omitting the subcommand runs the server.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,
    /// Extract and print the digest of one page
    Digest {
        /// Page URL (fetched unless --file is given, in which case it is only the attributed source)
        #[arg(long)]
        url: String,

        /// Read markup from this file instead of fetching the URL
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.fetch_timeout_seconds, 60);
        assert_eq!(config.store_timeout_seconds, 30);
        assert_eq!(config.feishu_base_url, "https://open.feishu.cn");
        assert_eq!(config.locale, Locale::Zh);
        assert!(config.feishu_app_id.is_empty());
    }

    #[test]
    fn test_listen_addr() {
        let config = Config {
            bind_addr: "127.0.0.1".to_string(),
            port: 9090,
            ..Config::default()
        };
        assert_eq!(config.listen_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn test_cli_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["page_digest"]).expect("parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.config.locale, Locale::Zh);
    }

    #[test]
    fn test_cli_digest_with_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "page_digest",
            "digest",
            "--url",
            "https://example.com",
            "--locale",
            "en",
            "--fetch-timeout-seconds",
            "5",
        ])
        .expect("parse");
        assert_eq!(cli.config.locale, Locale::En);
        assert_eq!(cli.config.fetch_timeout_seconds, 5);
        match cli.command {
            Some(Command::Digest { url, file }) => {
                assert_eq!(url, "https://example.com");
                assert!(file.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
