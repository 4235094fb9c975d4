use crate::ConfigError;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// What the dashboard does with a status outside the known request states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Keep the row and log a warning
    #[default]
    Lenient,
    /// Fail the whole dashboard
    Strict,
}

impl StatusPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

impl FromStr for StatusPolicy {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lenient" => Ok(Self::Lenient),
            "strict" => Ok(Self::Strict),
            other => Err(ConfigError::dashboard(format!(
                "unknown status_policy '{other}' (expected 'lenient' or 'strict')"
            ))),
        }
    }
}

impl fmt::Display for StatusPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
