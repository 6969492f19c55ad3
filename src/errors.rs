//! Unified application error type.
//! All modules (models, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use chrono::{DateTime, Local};
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
    // (De)serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Stream errors
    // ---------------------------
    #[error(
        "Snapshot {index} is out of order: {time} is earlier than the previous snapshot at {previous}"
    )]
    UnorderedStream {
        index: usize,
        previous: DateTime<Local>,
        time: DateTime<Local>,
    },

    #[error("Stream file not found: {0}")]
    StreamNotFound(String),

    #[error("No snapshots to report on")]
    EmptyStream,

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    // ---------------------------
    // Tracker errors
    // ---------------------------
    #[error("Tracker has no more snapshots")]
    TrackerExhausted,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
