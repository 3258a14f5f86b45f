use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Identifier could not be parsed as a base-10 integer
    #[error("Invalid identifier: {message} {location}")]
    InvalidIdentifier {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// The remote API returned nothing usable
    #[error("Upstream failure: {message} {location}")]
    Upstream {
        message: String,
        location: ErrorLocation,
    },

    #[error("Store failure: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid {kind} token: {value} {location}")]
    InvalidToken {
        kind: &'static str,
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn invalid_identifier<S: Into<String>>(message: S) -> Self {
        CoreError::InvalidIdentifier {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        CoreError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        CoreError::Upstream {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn store<S: Into<String>>(message: S) -> Self {
        CoreError::Store {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message without the captured location, suitable for clients.
    pub fn message(&self) -> String {
        match self {
            CoreError::InvalidIdentifier { message, .. }
            | CoreError::NotFound { message, .. }
            | CoreError::Upstream { message, .. }
            | CoreError::Store { message, .. } => message.clone(),
            CoreError::InvalidToken { kind, value, .. } => {
                format!("'{}' is not a valid {}", value, kind)
            }
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
