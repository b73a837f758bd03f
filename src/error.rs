// src/error.rs

//! Unified error handling for the submitter application.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for submitter operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
///
/// Everything here is fatal: these errors abort the run before (or instead
/// of) any submissions. Per-URL submission failures are not errors — they
/// are recorded as [`crate::models::SubmissionResult`] outcomes and counted
/// in the run summary.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client construction failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// XML parsing failed
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Sitemap contained no `<item><link>` entries
    #[error("No URLs found in sitemap {}", .0.display())]
    EmptySitemap(PathBuf),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
