//! Pure parse/validate for converter configuration.

use crate::domain::AppError;
use crate::domain::config::ConverterConfig;

/// Parse and validate converter configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<ConverterConfig, AppError> {
    let config: ConverterConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
