//! Tests for CLI subcommand parsing.

use std::path::PathBuf;

use clap::Parser;
use page_digest::{Cli, Command, Locale, LogFormat};

#[test]
fn test_cli_serve_subcommand() {
    let cli = Cli::try_parse_from(["page_digest", "serve", "--log-level", "debug"])
        .expect("Should parse serve command");

    assert!(matches!(cli.command, Some(Command::Serve)));
    assert_eq!(
        log::LevelFilter::from(cli.config.log_level),
        log::LevelFilter::Debug
    );
}

#[test]
fn test_cli_server_options_before_subcommand() {
    let cli = Cli::try_parse_from([
        "page_digest",
        "--port",
        "9001",
        "--bind",
        "127.0.0.1",
        "--feishu-wiki-id",
        "wiki_1",
        "serve",
    ])
    .expect("Should parse server options");

    assert_eq!(cli.config.listen_addr(), "127.0.0.1:9001");
    assert_eq!(cli.config.feishu_wiki_id, "wiki_1");
}

#[test]
fn test_cli_digest_from_file() {
    let cli = Cli::try_parse_from([
        "page_digest",
        "digest",
        "--url",
        "https://example.com/post",
        "--file",
        "page.html",
        "--log-format",
        "json",
    ])
    .expect("Should parse digest command");

    assert!(matches!(cli.config.log_format, LogFormat::Json));
    match cli.command {
        Some(Command::Digest { url, file }) => {
            assert_eq!(url, "https://example.com/post");
            assert_eq!(file, Some(PathBuf::from("page.html")));
        }
        other => panic!("Expected digest command, got {other:?}"),
    }
}

#[test]
fn test_cli_digest_requires_url() {
    let result = Cli::try_parse_from(["page_digest", "digest", "--file", "page.html"]);
    assert!(result.is_err(), "digest without --url should fail");
}

#[test]
fn test_cli_rejects_unknown_locale() {
    let result = Cli::try_parse_from(["page_digest", "--locale", "fr"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_locale_en() {
    let cli = Cli::try_parse_from(["page_digest", "--locale", "en"]).expect("Should parse");
    assert_eq!(cli.config.locale, Locale::En);
}

#[test]
fn test_cli_invalid_port() {
    let result = Cli::try_parse_from(["page_digest", "--port", "70000"]);
    assert!(result.is_err(), "port must fit in u16");
}
