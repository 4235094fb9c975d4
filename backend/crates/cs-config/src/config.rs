use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIRECTORY,
    DashboardConfig, LoggingConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub dashboard: DashboardConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for CS_CONFIG_DIR env var, else use ./.collabsphere/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply CS_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: CS_CONFIG_DIR env var > ./.collabsphere/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.dashboard.validate()?;

        if let Some(file) = &self.logging.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::logging("logging.file cannot be empty"));
        }

        Ok(())
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  dashboard: status_policy={}, max_requests={}, newest_first={}",
            self.dashboard.status_policy, self.dashboard.max_requests, self.dashboard.newest_first
        );
    }

    fn apply_env_overrides(&mut self) {
        // Logging
        Self::apply_env_parse("CS_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CS_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CS_LOG_FILE", &mut self.logging.file);

        // Dashboard
        Self::apply_env_parse(
            "CS_DASHBOARD_STATUS_POLICY",
            &mut self.dashboard.status_policy,
        );
        Self::apply_env_parse(
            "CS_DASHBOARD_MAX_REQUESTS",
            &mut self.dashboard.max_requests,
        );
        Self::apply_env_bool("CS_DASHBOARD_NEWEST_FIRST", &mut self.dashboard.newest_first);
    }

    /// Accepts "true"/"1", anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Leaves the target untouched when the value does not parse
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
