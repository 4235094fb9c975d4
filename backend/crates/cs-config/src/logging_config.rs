use crate::{DEFAULT_LOG_COLORED, LogLevel};

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Ignored when logging to a file
    pub colored: bool,
    /// None = stdout
    pub file: Option<String>,
}

impl LoggingConfig {
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file.as_ref().map(PathBuf::from)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            colored: DEFAULT_LOG_COLORED,
            file: None,
        }
    }
}
