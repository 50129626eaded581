//! Error type definitions.
//!
//! This module defines the error enums of the I/O collaborators (fetch and
//! document store) and the error/warning categories counted by
//! [`ProcessingStats`](super::ProcessingStats). The extraction core itself has
//! no error type: it degrades to empty or sentinel values instead.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Failures of the page fetch that precedes extraction.
///
/// Any of these aborts the whole request; no partial extraction is produced.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The URL is syntactically invalid, too long, or not http/https.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(#[source] ReqwestError),

    /// The server answered with something other than 200 OK.
    #[error("HTTP error: {0}")]
    Status(reqwest::StatusCode),

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(#[source] ReqwestError),

    /// The response body was empty.
    #[error("response contained no content")]
    EmptyBody,

    /// The response body exceeded the size limit.
    #[error("response body too large: {size} bytes (limit {limit})")]
    BodyTooLarge {
        /// Observed size in bytes
        size: usize,
        /// Configured limit in bytes
        limit: usize,
    },
}

/// Failures of the remote document store.
#[derive(Error, Debug)]
pub enum DocStoreError {
    /// Credentials or wiki space id are missing from the configuration.
    #[error("document store is not configured (missing {0})")]
    NotConfigured(&'static str),

    /// Transport-level failure talking to the API.
    #[error("document store request failed: {0}")]
    Transport(#[from] ReqwestError),

    /// The API answered with a body that could not be decoded.
    #[error("failed to decode document store response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API answered with a non-zero business code.
    #[error("{operation} failed: {msg} (code: {code})")]
    Api {
        /// What was being attempted
        operation: &'static str,
        /// API result code
        code: i64,
        /// API message
        msg: String,
    },

    /// The API answered with an unexpected HTTP status.
    #[error("{operation} failed: HTTP {status}, response: {body}")]
    HttpStatus {
        /// What was being attempted
        operation: &'static str,
        /// HTTP status
        status: reqwest::StatusCode,
        /// Raw response body
        body: String,
    },

    /// The document has no blocks to append content to.
    #[error("document {0} has no blocks")]
    MissingRootBlock(String),
}

/// Types of errors counted by the server.
///
/// This enum categorizes failures that abort a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Request decoding
    InvalidRequestBody,
    // Fetch errors
    FetchInvalidUrl,
    FetchTimeout,
    FetchConnectError,
    FetchRequestError,
    FetchHttpStatus,
    FetchBodyError,
    FetchEmptyBody,
    FetchBodyTooLarge,
    // Document store errors
    StoreNotConfigured,
    StoreTransportError,
    StoreApiError,
}

/// Types of warnings counted by the server.
///
/// Warnings are degradations of an extraction that still completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    MissingTitle,
    MissingDescription,
    NoRelevantBlocks,
    StripIterationCap,
    DocumentNotReady,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InvalidRequestBody => "Invalid request body",
            ErrorType::FetchInvalidUrl => "Invalid URL",
            ErrorType::FetchTimeout => "Fetch timeout",
            ErrorType::FetchConnectError => "Fetch connect error",
            ErrorType::FetchRequestError => "Fetch request error",
            ErrorType::FetchHttpStatus => "Fetch non-200 status",
            ErrorType::FetchBodyError => "Fetch body read error",
            ErrorType::FetchEmptyBody => "Fetch empty body",
            ErrorType::FetchBodyTooLarge => "Fetch body too large",
            ErrorType::StoreNotConfigured => "Document store not configured",
            ErrorType::StoreTransportError => "Document store transport error",
            ErrorType::StoreApiError => "Document store API error",
        }
    }
}

impl std::fmt::Display for WarningType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl WarningType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingTitle => "Missing title",
            WarningType::MissingDescription => "Missing meta description",
            WarningType::NoRelevantBlocks => "No relevant text blocks",
            WarningType::StripIterationCap => "Tag stripping hit iteration cap",
            WarningType::DocumentNotReady => "Document not ready before content write",
        }
    }
}
