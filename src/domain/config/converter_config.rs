//! Converter configuration domain models.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;

/// Optional settings loaded from a `--config` TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConverterConfig {
    /// Conversion run settings.
    #[serde(default)]
    pub convert: ConvertSection,
}

impl ConverterConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.convert.validate()
    }
}

/// `[convert]` section. Every key is optional; CLI flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConvertSection {
    /// Directory scanned for `.docx` files.
    #[serde(default)]
    pub docs_dir: Option<PathBuf>,
    /// Root of the mirrored output tree.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Overwrite existing Markdown files.
    #[serde(default)]
    pub force: bool,
}

impl ConvertSection {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.docs_dir.as_deref().is_some_and(is_blank) {
            return Err(AppError::config_error("convert.docs_dir must not be empty"));
        }
        if self.output_dir.as_deref().is_some_and(is_blank) {
            return Err(AppError::config_error("convert.output_dir must not be empty"));
        }
        Ok(())
    }
}

fn is_blank(path: &Path) -> bool {
    path.as_os_str().is_empty()
}
