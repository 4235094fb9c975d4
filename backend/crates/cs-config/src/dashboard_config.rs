use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAX_REQUESTS, DEFAULT_NEWEST_FIRST, MAX_MAX_REQUESTS,
    MIN_MAX_REQUESTS, StatusPolicy,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub status_policy: StatusPolicy,
    /// Cap on rows returned per dashboard
    pub max_requests: usize,
    /// Order by `appliedAt` descending instead of source order
    pub newest_first: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            status_policy: StatusPolicy::default(),
            max_requests: DEFAULT_MAX_REQUESTS,
            newest_first: DEFAULT_NEWEST_FIRST,
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_MAX_REQUESTS..=MAX_MAX_REQUESTS).contains(&self.max_requests) {
            return Err(ConfigError::dashboard(format!(
                "max_requests must be {}-{}, got {}",
                MIN_MAX_REQUESTS, MAX_MAX_REQUESTS, self.max_requests
            )));
        }

        Ok(())
    }
}
