use gm_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur while talking to the remote API
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Remote returned HTTP {status} for {url} {location}")]
    Status {
        status: u16,
        url: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl RemoteError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        RemoteError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        RemoteError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn status(status: u16, url: &str) -> Self {
        RemoteError::Status {
            status,
            url: url.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for RemoteError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        RemoteError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for RemoteError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        RemoteError::from_json(err)
    }
}

impl From<RemoteError> for CoreError {
    #[track_caller]
    fn from(e: RemoteError) -> Self {
        log::warn!("{}", e);

        let message = match e {
            RemoteError::Http { message, .. } | RemoteError::Json { message, .. } => message,
            RemoteError::Status { status, url, .. } => {
                format!("Remote returned HTTP {} for {}", status, url)
            }
        };

        CoreError::upstream(message)
    }
}

pub type Result<T> = std::result::Result<T, RemoteError>;
