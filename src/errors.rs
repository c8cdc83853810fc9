//! Unified application error type.
//! All modules (store, auth, core, cli) return AppError to keep error
//! handling consistent across the crate.

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

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    // ---------------------------
    // Auth errors (user-facing messages)
    // ---------------------------
    #[error("{0}")]
    Auth(String),

    #[error("An account with this email already exists")]
    DuplicateEmail,

    #[error("Not logged in. Run `punchclock login` first")]
    NotLoggedIn,

    // ---------------------------
    // Lifecycle errors
    // ---------------------------
    #[error("Already clocked in: an entry opened on {0} is still running")]
    AlreadyClockedIn(String),

    #[error("Not clocked in")]
    NotClockedIn,

    #[error("Clock-out {clock_out} is earlier than clock-in {clock_in}; sessions may not cross midnight")]
    ClockOutBeforeIn { clock_in: String, clock_out: String },

    // ---------------------------
    // Store errors
    // ---------------------------
    #[error("Store write failed: {0}")]
    StoreWrite(String),

    #[error("Store read failed: {0}")]
    StoreRead(String),

    // ---------------------------
    // Config / session errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session error: {0}")]
    Session(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
