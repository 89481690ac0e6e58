//! Converter configuration loading.

use std::fs;
use std::path::Path;

use crate::domain::config::parse_config_content;
use crate::domain::{AppError, ConverterConfig};

/// Load and parse the converter configuration at `path`.
pub fn load_config(path: &Path) -> Result<ConverterConfig, AppError> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::config_error(format!("Failed to read config file {}: {e}", path.display()))
    })?;
    parse_config_content(&content)
}
