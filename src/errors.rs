//! Unified application error type.
//! Engine, sources, config and cli all return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid swipe record: {0}")]
    InvalidSwipe(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    // ---------------------------
    // Engine errors
    // ---------------------------
    /// A computed session ended before it started. Fails the single
    /// computation, never the process.
    #[error("Invariant violated: {0}")]
    Invariant(String),

    // ---------------------------
    // Collaborators
    // ---------------------------
    #[error("Source error: {0}")]
    Source(#[from] crate::sources::SourceError),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
