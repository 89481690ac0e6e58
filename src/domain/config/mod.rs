pub mod converter_config;
pub mod parse;

pub use converter_config::{ConvertSection, ConverterConfig};
pub use parse::parse_config_content;
