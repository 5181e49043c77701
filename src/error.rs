//! Error types for quranhub operations.

use thiserror::Error;

use crate::format::strings;

/// Errors that can occur while talking to the API or loading configuration.
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid verse key: {0:?}")]
    InvalidVerseKey(String),

    #[error("Invalid juz number: {0} (expected 1-30)")]
    InvalidJuz(u32),

    #[error("Invalid chapter number: {0} (expected 1-114)")]
    InvalidChapter(u32),

    #[error("Missing field in response: {0}")]
    MissingField(&'static str),

    /// Chapter audio was requested without choosing a reciter.
    #[error("{}", strings::SELECT_RECITER)]
    NoReciterSelected,
}

impl Error {
    /// A short message suitable for showing to a reader instead of the raw error.
    pub fn user_message(&self) -> String {
        let message = match self {
            Error::Http(e) if e.is_timeout() => strings::REQUEST_TIMED_OUT,
            Error::Http(e) if e.is_connect() || e.is_request() => strings::CONNECTION_FAILED,
            Error::Http(e) if e.is_decode() => strings::UNEXPECTED_RESPONSE,
            Error::Http(_) => strings::NETWORK_ERROR,
            other => return other.to_string(),
        };
        message.to_string()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
