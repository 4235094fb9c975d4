mod config;
mod dashboard_config;
mod error;
mod log_level;
mod logging_config;
mod status_policy;

pub use config::Config;
pub use dashboard_config::DashboardConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use status_policy::StatusPolicy;

const CONFIG_DIR_ENV: &str = "CS_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".collabsphere";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_MAX_REQUESTS: usize = 100;
const MIN_MAX_REQUESTS: usize = 1;
const MAX_MAX_REQUESTS: usize = 1000;
const DEFAULT_NEWEST_FIRST: bool = true;

#[cfg(test)]
mod tests;
