//! Configuration loading and option resolution.

mod load_config;

use std::path::PathBuf;

use crate::app::commands::convert::ConvertOptions;
use crate::domain::ConverterConfig;

pub use load_config::load_config;

/// Docs directory used when neither the CLI nor a config file names one.
pub const DEFAULT_DOCS_DIR: &str = "docs";

/// Values supplied on the command line. `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertOverrides {
    pub docs_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub force: bool,
}

/// Merge CLI values over config values over built-in defaults.
pub fn resolve_options(
    overrides: ConvertOverrides,
    config: Option<&ConverterConfig>,
) -> ConvertOptions {
    let section = config.map(|c| c.convert.clone()).unwrap_or_default();

    ConvertOptions {
        docs_dir: overrides
            .docs_dir
            .or(section.docs_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCS_DIR)),
        output_dir: overrides.output_dir.or(section.output_dir),
        force: overrides.force || section.force,
    }
}
