use crate::{DashboardResult, logger};

use cs_config::Config;

/// Validate the loaded configuration, install the logger and log a summary.
///
/// Nothing is installed when validation fails.
pub fn initialize(config: &Config) -> DashboardResult<()> {
    config.validate()?;
    logger::initialize(&config.logging)?;
    config.log_summary();
    Ok(())
}
