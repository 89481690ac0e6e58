//! Convert command implementation.

use std::path::PathBuf;

use crate::app::config::{ConvertOverrides, load_config, resolve_options};
use crate::domain::AppError;

pub fn run_convert(
    docs_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    force: bool,
    config: Option<PathBuf>,
) -> Result<i32, AppError> {
    let config = config.as_deref().map(load_config).transpose()?;
    let overrides = ConvertOverrides { docs_dir, output_dir, force };
    let options = resolve_options(overrides, config.as_ref());

    let outcome = crate::app::api::convert(options)?;
    Ok(outcome.exit_code)
}
