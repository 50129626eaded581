//! Top-level operations behind the CLI subcommands.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

use crate::config::Config;
use crate::docstore::{FeishuClient, FeishuSettings};
use crate::extract::{extract_with_options, ExtractOptions, ExtractionResult};
use crate::fetch::fetch_page;
use crate::initialization::{init_client, init_store_client};
use crate::server::{start_server, AppState};

/// Builds the server state (HTTP clients, document store client) from the configuration.
///
/// # Errors
///
/// Returns an error if an HTTP client cannot be created.
pub fn init_app_state(config: &Config) -> Result<AppState> {
    let http = init_client(config).context("Failed to initialize HTTP client")?;
    let store_http =
        init_store_client(config).context("Failed to initialize document store client")?;
    let store = FeishuClient::new(store_http, FeishuSettings::from_config(config));

    Ok(AppState::new(
        http,
        Arc::new(store),
        ExtractOptions {
            locale: config.locale,
        },
    ))
}

/// Runs the API server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if initialization fails, the address cannot be bound or
/// the server stops abnormally.
pub async fn run_server(config: Config) -> Result<()> {
    let state = init_app_state(&config)?;
    start_server(&config.listen_addr(), state).await
}

/// Produces the digest of one page.
///
/// With `file`, the markup is read from disk and `url` is only the attributed
/// source; otherwise `url` is fetched.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the fetch fails.
pub async fn run_digest(config: &Config, url: &str, file: Option<&Path>) -> Result<ExtractionResult> {
    let markup = match file {
        Some(path) => {
            info!("Reading markup from {}", path.display());
            tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => {
            let client = init_client(config).context("Failed to initialize HTTP client")?;
            fetch_page(&client, url)
                .await
                .with_context(|| format!("Failed to fetch {url}"))?
                .markup
        }
    };

    let options = ExtractOptions {
        locale: config.locale,
    };
    Ok(extract_with_options(&markup, url, &options))
}
