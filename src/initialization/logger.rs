//! Logger initialization.
//!
//! Installs `env_logger` with one of two line formats: a colored plain format
//! for terminals and a one-object-per-line JSON format for log shippers.

use std::io::Write;

use colored::*;
use env_logger::fmt::Formatter;
use log::{LevelFilter, Record};

use crate::config::{LogFormat, TIMESTAMP_FORMAT};
use crate::error_handling::InitializationError;

/// Dependencies whose debug output drowns the service's own logs.
const QUIET_MODULES: &[(&str, LevelFilter)] = &[
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
    ("h2", LevelFilter::Info),
    ("tower_http", LevelFilter::Info),
    ("wiremock", LevelFilter::Warn),
];

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` is read first, then `level` overrides it for this crate and as
/// the global default, so `--log-level` always wins over the environment.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Use RUST_LOG for quick debugging (no CLI args needed)
/// RUST_LOG=debug page_digest
///
/// # Structured logs for a log shipper
/// page_digest serve --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    for (module, module_level) in QUIET_MODULES {
        builder.filter_module(module, *module_level);
    }
    builder.filter_module("page_digest", level);

    match format {
        LogFormat::Json => {
            builder.format(write_json);
        }
        LogFormat::Plain => {
            colored::control::set_override(true);
            builder.format(write_plain);
        }
    }

    // try_init so a second initialization (tests) is an error, not a panic
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

fn write_json(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    writeln!(
        buf,
        "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
        chrono::Utc::now().timestamp_millis(),
        record.level(),
        record.target(),
        serde_json::to_string(&record.args().to_string()).unwrap_or_else(|_| "\"\"".into())
    )
}

fn write_plain(buf: &mut Formatter, record: &Record) -> std::io::Result<()> {
    let level = record.level();
    let colored_level = match level {
        log::Level::Error => level.to_string().red(),
        log::Level::Warn => level.to_string().yellow(),
        log::Level::Info => level.to_string().green(),
        log::Level::Debug => level.to_string().blue(),
        log::Level::Trace => level.to_string().purple(),
    };

    writeln!(
        buf,
        "{} {} [{}] {}",
        chrono::Local::now().format(TIMESTAMP_FORMAT),
        record.target().cyan(),
        colored_level,
        record.args()
    )
}
