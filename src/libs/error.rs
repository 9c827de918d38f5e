//! Error type shared by the storage, settings, export and timer layers.
//!
//! Command handlers work with `anyhow::Result` and convert these errors with
//! `?`. Library code returns [`Result`] so callers can match on the failure
//! kind (a storage fault versus a misuse of the timer, for example).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The storage engine rejected an open, read or write.
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// The storage worker thread is gone and can no longer accept requests.
    #[error("Storage worker is not running")]
    WorkerGone,

    #[error("Database migration error: {0}")]
    Migration(String),

    /// A stored row failed required-field validation on read.
    #[error("Malformed record in '{table}' ({key}): {reason}")]
    MalformedRecord { table: &'static str, key: String, reason: String },

    /// The settings file exists but cannot be decoded; it is left untouched.
    #[error("Settings file '{path}' is unreadable: {reason}")]
    MalformedSettings { path: String, reason: String },

    #[error("End time {end} is before start time {start}")]
    InvalidInterval { start: String, end: String },

    #[error("A timer session is already running")]
    SessionAlreadyRunning,

    #[error("No timer session is running")]
    NoRunningSession,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
