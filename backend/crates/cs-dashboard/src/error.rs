use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Config error: {0}")]
    Config(#[from] cs_config::ConfigError),

    #[error("Core error: {0}")]
    Core(#[from] cs_core::CoreError),

    #[error("Request source error: {message} {location}")]
    Source {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON error: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl DashboardError {
    /// Create a request source error
    #[track_caller]
    pub fn request_source<S: Into<String>>(message: S) -> Self {
        DashboardError::Source {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type DashboardResult<T> = StdResult<T, DashboardError>;
