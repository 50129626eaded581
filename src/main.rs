//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `page_digest` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use page_digest::initialization::init_logger_with;
use page_digest::{run_digest, run_server, Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Feishu credentials usually live in a .env next to the working directory
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = cli.config;

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let outcome = match cli.command {
        None | Some(Command::Serve) => run_server(config).await,
        Some(Command::Digest { url, file }) => run_digest(&config, &url, file.as_deref())
            .await
            .map(|result| println!("{}", result.final_content)),
    };

    if let Err(e) = outcome {
        eprintln!("page_digest error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
