//! Unified application error type.
//! Every module (core, source, export, db, cli) returns AppError so that
//! failures surface to the caller the same way.

use crate::models::day_summary::DailySummary;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Invalid table name: {0}")]
    InvalidIdentifier(String),

    // ---------------------------
    // Pipeline
    // ---------------------------
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Malformed timestamp in record {row}: '{value}' does not match '{format}'")]
    MalformedTimestamp {
        row: usize,
        value: String,
        format: String,
    },

    /// The sink refused the report. The computed summaries travel with the
    /// error so the caller can retry the write without re-reading the source.
    #[error("Output unavailable: {reason}")]
    SinkUnavailable {
        reason: String,
        summaries: Vec<DailySummary>,
    },

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
